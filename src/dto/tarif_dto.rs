use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::tarif::{PeriodType, Tarif};

// Request para crear una tarifa
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTarifRequest {
    pub office_id: Uuid,
    pub vehicle_model_id: Uuid,
    // Por defecto tarifa diaria
    pub period_type: Option<PeriodType>,
    #[validate(range(min = 1))]
    pub min_period: i32,
    pub price_per_unit: Decimal,
    // Si no se indica se toma la moneda de la oficina
    #[validate(custom = "crate::utils::validation::validate_currency_code")]
    pub currency: Option<String>,
    pub active: Option<bool>,
}

// Request para actualizar una tarifa
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTarifRequest {
    pub office_id: Option<Uuid>,
    pub period_type: Option<PeriodType>,
    #[validate(range(min = 1))]
    pub min_period: Option<i32>,
    pub price_per_unit: Option<Decimal>,
    #[validate(custom = "crate::utils::validation::validate_currency_code")]
    pub currency: Option<String>,
    pub active: Option<bool>,
}

// Query para buscar la tarifa aplicable a una orden
#[derive(Debug, Deserialize)]
pub struct TarifMatchQuery {
    pub office_id: Uuid,
    pub vehicle_model_id: Uuid,
    pub rental_days: i32,
}

// Response de tarifa
#[derive(Debug, Serialize)]
pub struct TarifResponse {
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

impl From<Tarif> for TarifResponse {
    fn from(tarif: Tarif) -> Self {
        Self {
            id: tarif.id,
            office_id: tarif.office_id,
            vehicle_model_id: tarif.vehicle_model_id,
            period_type: tarif.period_type,
            min_period: tarif.min_period,
            price_per_unit: tarif.price_per_unit,
            currency: tarif.currency,
            active: tarif.active,
            created_at: tarif.created_at,
        }
    }
}
