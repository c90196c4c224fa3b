use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::office_dto::ApiResponse;
use crate::dto::service_type_dto::{
    CreateServiceTypeRequest, ServiceTypeResponse, UpdateServiceTypeRequest,
};
use crate::repositories::service_type_repository::ServiceTypeRepository;
use crate::utils::errors::AppError;

pub struct ServiceTypeController {
    repository: ServiceTypeRepository,
}

impl ServiceTypeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceTypeRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateServiceTypeRequest,
    ) -> Result<ApiResponse<ServiceTypeResponse>, AppError> {
        request.validate()?;

        let service_type = self
            .repository
            .create(request.name, request.default_cost.unwrap_or(Decimal::ZERO))
            .await?;

        Ok(ApiResponse::success_with_message(
            ServiceTypeResponse::from(service_type),
            "Tipo de servicio creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ServiceTypeResponse, AppError> {
        let service_type = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de servicio no encontrado".to_string()))?;

        Ok(ServiceTypeResponse::from(service_type))
    }

    pub async fn list(&self) -> Result<Vec<ServiceTypeResponse>, AppError> {
        let service_types = self.repository.find_all().await?;

        Ok(service_types
            .into_iter()
            .map(ServiceTypeResponse::from)
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceTypeRequest,
    ) -> Result<ApiResponse<ServiceTypeResponse>, AppError> {
        request.validate()?;

        let service_type = self
            .repository
            .update(id, request.name, request.default_cost, request.active)
            .await?;

        Ok(ApiResponse::success_with_message(
            ServiceTypeResponse::from(service_type),
            "Tipo de servicio actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
