use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::office_dto::ApiResponse;
use crate::dto::tarif_dto::{
    CreateTarifRequest, TarifMatchQuery, TarifResponse, UpdateTarifRequest,
};
use crate::models::tarif::PeriodType;
use crate::repositories::office_repository::OfficeRepository;
use crate::repositories::tarif_repository::TarifRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::tarif_service;
use crate::utils::errors::AppError;

const DUPLICATE_BRACKET_MSG: &str = "Ya existe una tarifa para este modelo y periodo";

pub struct TarifController {
    repository: TarifRepository,
    office_repository: OfficeRepository,
    vehicle_repository: VehicleRepository,
}

impl TarifController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TarifRepository::new(pool.clone()),
            office_repository: OfficeRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTarifRequest,
    ) -> Result<ApiResponse<TarifResponse>, AppError> {
        request.validate()?;

        let office = self
            .office_repository
            .find_by_id(request.office_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;

        self.vehicle_repository
            .find_model_by_id(request.vehicle_model_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Modelo no encontrado".to_string()))?;

        let period_type = request.period_type.unwrap_or(PeriodType::Day);

        // Como máximo una tarifa por (modelo, tipo de periodo, min_period)
        if self
            .repository
            .bracket_exists(request.vehicle_model_id, period_type, request.min_period, None)
            .await?
        {
            return Err(AppError::Conflict(DUPLICATE_BRACKET_MSG.to_string()));
        }

        let currency = tarif_service::default_currency(request.currency, &office.currency);

        let tarif = self
            .repository
            .create(
                office.id,
                request.vehicle_model_id,
                period_type,
                request.min_period,
                request.price_per_unit,
                currency,
                request.active.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            TarifResponse::from(tarif),
            "Tarifa creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TarifResponse, AppError> {
        let tarif = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarifa no encontrada".to_string()))?;

        Ok(TarifResponse::from(tarif))
    }

    pub async fn list(&self) -> Result<Vec<TarifResponse>, AppError> {
        let tarifs = self.repository.find_all().await?;

        Ok(tarifs.into_iter().map(TarifResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTarifRequest,
    ) -> Result<ApiResponse<TarifResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarifa no encontrada".to_string()))?;

        let period_type = request.period_type.unwrap_or(current.period_type);
        let min_period = request.min_period.unwrap_or(current.min_period);

        if (period_type != current.period_type || min_period != current.min_period)
            && self
                .repository
                .bracket_exists(current.vehicle_model_id, period_type, min_period, Some(id))
                .await?
        {
            return Err(AppError::Conflict(DUPLICATE_BRACKET_MSG.to_string()));
        }

        // Al reasignar la oficina, la moneda se toma de ella salvo que
        // venga indicada
        let currency = match (&request.office_id, request.currency) {
            (_, Some(currency)) => Some(currency),
            (Some(office_id), None) => {
                let office = self
                    .office_repository
                    .find_by_id(*office_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;
                Some(office.currency)
            }
            (None, None) => None,
        };

        let tarif = self
            .repository
            .update(
                id,
                request.office_id,
                request.period_type,
                request.min_period,
                request.price_per_unit,
                currency,
                request.active,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            TarifResponse::from(tarif),
            "Tarifa actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Tarifa sugerida para una oficina, un modelo y una duración. Devuelve
    /// null si ningún tramo cubre los días pedidos.
    pub async fn find_match(
        &self,
        query: TarifMatchQuery,
    ) -> Result<Option<TarifResponse>, AppError> {
        let candidates = self
            .repository
            .find_candidates(query.office_id, query.vehicle_model_id)
            .await?;

        Ok(tarif_service::select_bracket(&candidates, query.rental_days)
            .cloned()
            .map(TarifResponse::from))
    }
}
