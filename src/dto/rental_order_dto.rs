use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::rental_order::{RentalOrder, RentalOrderState};

// Request para crear una orden de alquiler
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRentalOrderRequest {
    pub office_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    // Si no se indica se selecciona el tramo que cubre rental_days
    pub tarif_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100))]
    pub customer_name: String,
    #[validate(range(min = 1))]
    pub rental_days: Option<i32>,
    // Por defecto ahora
    pub start_date: Option<DateTime<Utc>>,
    pub extra_expenses: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,
    // Si no se indica se toma el kilometraje actual del vehículo
    #[validate(range(min = 0))]
    pub start_mileage: Option<i32>,
}

// Request para actualizar una orden (solo en draft)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRentalOrderRequest {
    pub vehicle_id: Option<Uuid>,
    pub tarif_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100))]
    pub customer_name: Option<String>,
    #[validate(range(min = 1))]
    pub rental_days: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub extra_expenses: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,
    #[validate(range(min = 0))]
    pub start_mileage: Option<i32>,
    #[validate(range(min = 0))]
    pub end_mileage: Option<i32>,
}

// Request para las acciones por lote start/cancel
#[derive(Debug, Deserialize, Validate)]
pub struct BatchOrderActionRequest {
    #[validate(length(min = 1))]
    pub order_ids: Vec<Uuid>,
}

// Orden a finalizar, con la lectura final del odómetro si se conoce
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct EndOrderItem {
    pub order_id: Uuid,
    #[validate(range(min = 0))]
    pub end_mileage: Option<i32>,
}

// Request para la acción de cierre por lote
#[derive(Debug, Deserialize, Validate)]
pub struct BatchOrderEndRequest {
    #[validate(length(min = 1))]
    pub orders: Vec<EndOrderItem>,
}

// Filtros para listado de órdenes
#[derive(Debug, Deserialize)]
pub struct RentalOrderFilters {
    pub state: Option<RentalOrderState>,
    pub vehicle_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de orden de alquiler
#[derive(Debug, Serialize)]
pub struct RentalOrderResponse {
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

impl From<RentalOrder> for RentalOrderResponse {
    fn from(order: RentalOrder) -> Self {
        Self {
            id: order.id,
            office_id: order.office_id,
            vehicle_id: order.vehicle_id,
            tarif_id: order.tarif_id,
            customer_name: order.customer_name,
            rental_days: order.rental_days,
            start_date: order.start_date,
            end_date: order.end_date,
            extra_expenses: order.extra_expenses,
            start_mileage: order.start_mileage,
            end_mileage: order.end_mileage,
            total_amount: order.total_amount,
            deposit_amount: order.deposit_amount,
            currency: order.currency,
            state: order.state,
            created_at: order.created_at,
        }
    }
}
