//! Modelos de mantenimiento
//!
//! Este módulo contiene el plan de mantenimiento por modelo, el tracker
//! por vehículo, el log de servicio y sus líneas de coste.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Entrada del plan de mantenimiento de un modelo - tabla maintenance_plans
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenancePlan {
    pub id: Uuid,
    pub model_id: Uuid,
    pub service_type_id: Uuid,
    pub interval_km: Option<i32>,
    pub interval_days: Option<i32>,
    pub remind_before_km: i32,
    pub remind_before_days: i32,
    pub created_at: DateTime<Utc>,
}

/// Tracker de último servicio por vehículo - tabla maintenance_statuses
///
/// Se crea uno por entrada del plan del modelo al crear el vehículo,
/// con last_service_mileage = 0 y sin fecha de servicio.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceStatus {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_type_id: Uuid,
    pub last_service_mileage: i32,
    pub last_service_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Registro de un servicio realizado - tabla maintenance_logs
///
/// total_cost es derivado: suma de los costes de sus líneas.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub mileage: i32,
    pub note: Option<String>,
    pub total_cost: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Línea de coste de un log - tabla maintenance_cost_lines
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceCostLine {
    pub id: Uuid,
    pub log_id: Uuid,
    pub service_type_id: Uuid,
    pub cost: Decimal,
    pub created_at: DateTime<Utc>,
}
