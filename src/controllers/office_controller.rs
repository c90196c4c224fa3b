use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::office_dto::{
    ApiResponse, CreateOfficeRequest, OfficeResponse, UpdateOfficeRequest,
};
use crate::repositories::office_repository::OfficeRepository;
use crate::utils::errors::AppError;

pub struct OfficeController {
    repository: OfficeRepository,
}

impl OfficeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OfficeRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateOfficeRequest,
    ) -> Result<ApiResponse<OfficeResponse>, AppError> {
        request.validate()?;

        let office = self
            .repository
            .create(request.name, request.city, request.currency)
            .await?;

        Ok(ApiResponse::success_with_message(
            OfficeResponse::from(office),
            "Oficina creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<OfficeResponse, AppError> {
        let office = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;

        Ok(OfficeResponse::from(office))
    }

    pub async fn list(&self) -> Result<Vec<OfficeResponse>, AppError> {
        let offices = self.repository.find_all().await?;

        Ok(offices.into_iter().map(OfficeResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateOfficeRequest,
    ) -> Result<ApiResponse<OfficeResponse>, AppError> {
        request.validate()?;

        let office = self
            .repository
            .update(id, request.name, request.city, request.currency)
            .await?;

        Ok(ApiResponse::success_with_message(
            OfficeResponse::from(office),
            "Oficina actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
