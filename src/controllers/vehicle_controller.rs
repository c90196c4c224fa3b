use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::MaintenanceStatusResponse;
use crate::dto::office_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleModelRequest, CreateVehicleRequest, UpdateVehicleModelRequest,
    UpdateVehicleRequest, VehicleFilters, VehicleModelResponse, VehicleResponse,
};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    pool: PgPool,
    repository: VehicleRepository,
    maintenance_repository: MaintenanceRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            maintenance_repository: MaintenanceRepository::new(pool.clone()),
            pool,
        }
    }

    // --- Catálogo de modelos ---

    pub async fn create_model(
        &self,
        request: CreateVehicleModelRequest,
    ) -> Result<ApiResponse<VehicleModelResponse>, AppError> {
        request.validate()?;

        let model = self
            .repository
            .create_model(request.name, request.brand)
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleModelResponse::from(model),
            "Modelo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_model(&self, id: Uuid) -> Result<VehicleModelResponse, AppError> {
        let model = self
            .repository
            .find_model_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Modelo no encontrado".to_string()))?;

        Ok(VehicleModelResponse::from(model))
    }

    pub async fn list_models(&self) -> Result<Vec<VehicleModelResponse>, AppError> {
        let models = self.repository.find_all_models().await?;

        Ok(models.into_iter().map(VehicleModelResponse::from).collect())
    }

    pub async fn update_model(
        &self,
        id: Uuid,
        request: UpdateVehicleModelRequest,
    ) -> Result<ApiResponse<VehicleModelResponse>, AppError> {
        request.validate()?;

        let model = self
            .repository
            .update_model(id, request.name, request.brand)
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleModelResponse::from(model),
            "Modelo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete_model(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete_model(id).await
    }

    // --- Vehículos ---

    /// Alta de vehículo. En la misma transacción se crea un tracker de
    /// mantenimiento por cada entrada del plan del modelo, inicializado
    /// sin servicio previo.
    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let model = self
            .repository
            .find_model_by_id(request.model_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Modelo no encontrado".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let vehicle = self
            .repository
            .create(
                &mut tx,
                request.name,
                model.id,
                request.office_id,
                request.plate_number,
                request.serial_number,
                request.mileage.unwrap_or(0),
            )
            .await?;

        let plans = self
            .maintenance_repository
            .find_plans_by_model(&mut tx, model.id)
            .await?;

        for plan in &plans {
            self.maintenance_repository
                .create_status(&mut tx, vehicle.id, plan.service_type_id)
                .await?;
        }

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let limit = filters.limit.unwrap_or(50).min(100);
        let offset = filters.offset.unwrap_or(0);

        let vehicles = self
            .repository
            .list(filters.status, filters.office_id, limit, offset)
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.office_id,
                request.plate_number,
                request.serial_number,
                request.mileage,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Trackers de mantenimiento del vehículo (solo lectura)
    pub async fn maintenance_statuses(
        &self,
        id: Uuid,
    ) -> Result<Vec<MaintenanceStatusResponse>, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let statuses = self
            .maintenance_repository
            .find_statuses_by_vehicle(vehicle.id)
            .await?;

        Ok(statuses
            .into_iter()
            .map(MaintenanceStatusResponse::from)
            .collect())
    }
}
