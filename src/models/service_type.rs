//! Modelo de ServiceType
//!
//! Catálogo de tipos de servicio de mantenimiento con coste por defecto.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// ServiceType - mapea exactamente a la tabla service_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceType {
    pub id: Uuid,
    pub name: String,
    pub default_cost: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
