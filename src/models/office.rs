//! Modelo de Office
//!
//! Oficina de alquiler. Cada oficina define la moneda por defecto
//! de sus tarifas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Office - mapea exactamente a la tabla offices
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Office {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}
