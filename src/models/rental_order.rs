//! Modelo de RentalOrder
//!
//! Orden de alquiler. El estado sigue un ciclo de vida de una sola
//! dirección: draft -> active -> (done | cancelled), con cancelación
//! permitida también desde draft.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de la orden - mapea al ENUM rental_order_state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "rental_order_state", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RentalOrderState {
    Draft,
    Active,
    Done,
    Cancelled,
}

/// RentalOrder - mapea exactamente a la tabla rental_orders
///
/// end_date y total_amount son campos derivados: se recalculan en cada
/// escritura a partir de start_date/rental_days y de la tarifa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RentalOrder {
    pub id: Uuid,
    pub office_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    pub tarif_id: Uuid,
    pub customer_name: String,
    pub rental_days: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub extra_expenses: Decimal,
    pub start_mileage: i32,
    pub end_mileage: i32,
    pub total_amount: Decimal,
    pub deposit_amount: Decimal,
    pub currency: String,
    pub state: RentalOrderState,
    pub created_at: DateTime<Utc>,
}
