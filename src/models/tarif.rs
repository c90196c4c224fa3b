//! Modelo de Tarif
//!
//! Tramo de precio por oficina/modelo/tipo de periodo. La tabla lleva
//! un UNIQUE sobre (vehicle_model_id, period_type, min_period): como
//! máximo una tarifa por tramo.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de periodo de la tarifa - mapea al ENUM tarif_period_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "tarif_period_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Hour,
    Day,
}

/// Tarif - mapea exactamente a la tabla tarifs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tarif {
    pub id: Uuid,
    pub office_id: Uuid,
    pub vehicle_model_id: Uuid,
    pub period_type: PeriodType,
    pub min_period: i32,
    pub price_per_unit: Decimal,
    pub currency: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
