//! Modelos de Vehicle y VehicleModel
//!
//! Este módulo contiene el struct Vehicle, su enum de estado y el
//! catálogo de modelos de vehículo. Mapea exactamente al schema
//! PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del vehículo - mapea al ENUM vehicle_status
///
/// 'booked', 'maintenance' e 'inactive' se asignan externamente;
/// 'rented' y 'available' los gobierna el ciclo de vida de la orden.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Booked,
    Maintenance,
    Inactive,
}

/// Modelo de vehículo (catálogo) - mapea a la tabla vehicle_models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleModel {
    pub id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub model_id: Uuid,
    pub office_id: Option<Uuid>,
    pub plate_number: Option<String>,
    pub serial_number: Option<String>,
    pub mileage: i32,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}
