use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::office::Office;

// Request para crear una oficina
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOfficeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(custom = "crate::utils::validation::validate_currency_code")]
    pub currency: String,
}

// Request para actualizar una oficina
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOfficeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(custom = "crate::utils::validation::validate_currency_code")]
    pub currency: Option<String>,
}

// Response de oficina
#[derive(Debug, Serialize)]
pub struct OfficeResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<Office> for OfficeResponse {
    fn from(office: Office) -> Self {
        Self {
            id: office.id,
            name: office.name,
            city: office.city,
            currency: office.currency,
            created_at: office.created_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
