use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service_type::ServiceType;

// Request para crear un tipo de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub default_cost: Option<Decimal>,
}

// Request para actualizar un tipo de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub default_cost: Option<Decimal>,
    pub active: Option<bool>,
}

// Response de tipo de servicio
#[derive(Debug, Serialize)]
pub struct ServiceTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub default_cost: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceType> for ServiceTypeResponse {
    fn from(service_type: ServiceType) -> Self {
        Self {
            id: service_type.id,
            name: service_type.name,
            default_cost: service_type.default_cost,
            active: service_type.active,
            created_at: service_type.created_at,
        }
    }
}
