use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleModel, VehicleStatus};

// Request para crear un modelo de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleModelRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,
}

// Request para actualizar un modelo de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleModelRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,
}

// Response de modelo de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleModelResponse {
    pub id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<VehicleModel> for VehicleModelResponse {
    fn from(model: VehicleModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            brand: model.brand,
            created_at: model.created_at,
        }
    }
}

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub model_id: Uuid,
    pub office_id: Option<Uuid>,
    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub plate_number: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub serial_number: Option<String>,
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub office_id: Option<Uuid>,
    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub plate_number: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub serial_number: Option<String>,
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
    pub status: Option<VehicleStatus>,
}

// Filtros para listado de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<VehicleStatus>,
    pub office_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model_id: vehicle.model_id,
            office_id: vehicle.office_id,
            plate_number: vehicle.plate_number,
            serial_number: vehicle.serial_number,
            mileage: vehicle.mileage,
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}
