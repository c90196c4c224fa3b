use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{
    CostLineResponse, CreateMaintenanceLogRequest, CreateMaintenancePlanRequest,
    MaintenanceLogResponse, MaintenancePlanResponse, UpdateCostLineRequest,
    UpdateMaintenanceLogRequest, UpdateMaintenancePlanRequest,
};
use crate::dto::office_dto::ApiResponse;
use crate::models::service_type::ServiceType;
use crate::models::vehicle::Vehicle;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::office_repository::OfficeRepository;
use crate::repositories::service_type_repository::ServiceTypeRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::maintenance_service;
use crate::utils::errors::AppError;

pub struct MaintenanceController {
    pool: PgPool,
    repository: MaintenanceRepository,
    vehicle_repository: VehicleRepository,
    service_type_repository: ServiceTypeRepository,
    office_repository: OfficeRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            service_type_repository: ServiceTypeRepository::new(pool.clone()),
            office_repository: OfficeRepository::new(pool.clone()),
            pool,
        }
    }

    // --- Plan de mantenimiento ---

    pub async fn create_plan(
        &self,
        request: CreateMaintenancePlanRequest,
    ) -> Result<ApiResponse<MaintenancePlanResponse>, AppError> {
        request.validate()?;

        self.vehicle_repository
            .find_model_by_id(request.model_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Modelo no encontrado".to_string()))?;

        self.service_type_repository
            .find_by_id(request.service_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de servicio no encontrado".to_string()))?;

        let plan = self
            .repository
            .create_plan(
                request.model_id,
                request.service_type_id,
                request.interval_km,
                request.interval_days,
                request.remind_before_km.unwrap_or(100),
                request.remind_before_days.unwrap_or(7),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MaintenancePlanResponse::from(plan),
            "Entrada del plan creada exitosamente".to_string(),
        ))
    }

    pub async fn get_plan(&self, id: Uuid) -> Result<MaintenancePlanResponse, AppError> {
        let plan = self
            .repository
            .find_plan_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Entrada del plan no encontrada".to_string()))?;

        Ok(MaintenancePlanResponse::from(plan))
    }

    pub async fn list_plans_by_model(
        &self,
        model_id: Uuid,
    ) -> Result<Vec<MaintenancePlanResponse>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let plans = self
            .repository
            .find_plans_by_model(&mut conn, model_id)
            .await?;

        Ok(plans
            .into_iter()
            .map(MaintenancePlanResponse::from)
            .collect())
    }

    pub async fn update_plan(
        &self,
        id: Uuid,
        request: UpdateMaintenancePlanRequest,
    ) -> Result<ApiResponse<MaintenancePlanResponse>, AppError> {
        request.validate()?;

        let plan = self
            .repository
            .update_plan(
                id,
                request.interval_km,
                request.interval_days,
                request.remind_before_km,
                request.remind_before_days,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MaintenancePlanResponse::from(plan),
            "Entrada del plan actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete_plan(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete_plan(id).await
    }

    // --- Logs de servicio ---

    /// Registrar un servicio realizado. El kilometraje debe ser positivo y
    /// no inferior al del vehículo; cada línea sin coste toma el coste por
    /// defecto de su tipo de servicio, y los trackers del vehículo quedan
    /// actualizados con este servicio.
    pub async fn create_log(
        &self,
        request: CreateMaintenanceLogRequest,
    ) -> Result<ApiResponse<MaintenanceLogResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        maintenance_service::validate_log_mileage(request.mileage, vehicle.mileage)?;

        let currency = self.resolve_currency(request.currency, &vehicle).await?;
        let date = request.date.unwrap_or_else(|| Utc::now().date_naive());

        let mut tx = self.pool.begin().await?;

        let log = self
            .repository
            .create_log(
                &mut tx,
                vehicle.id,
                date,
                request.mileage,
                request.note,
                currency,
            )
            .await?;

        let service_type_ids: Vec<Uuid> =
            request.lines.iter().map(|l| l.service_type_id).collect();
        let service_types = self
            .service_type_repository
            .find_by_ids(&mut tx, &service_type_ids)
            .await?;

        let mut lines = Vec::with_capacity(request.lines.len());
        for input in &request.lines {
            let service_type = Self::find_service_type(&service_types, input.service_type_id)?;
            let cost =
                maintenance_service::default_line_cost(input.cost, service_type.default_cost);

            let line = self
                .repository
                .create_line(&mut tx, log.id, service_type.id, cost)
                .await?;

            self.repository
                .record_service(&mut tx, vehicle.id, service_type.id, log.mileage, log.date)
                .await?;

            lines.push(line);
        }

        let total_cost = maintenance_service::sum_cost_lines(&lines);
        self.repository
            .update_log_total(&mut tx, log.id, total_cost)
            .await?;

        tx.commit().await?;

        let mut log = log;
        log.total_cost = total_cost;

        Ok(ApiResponse::success_with_message(
            MaintenanceLogResponse::from_log(log, lines),
            "Servicio registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_log(&self, id: Uuid) -> Result<MaintenanceLogResponse, AppError> {
        let log = self
            .repository
            .find_log_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Log de mantenimiento no encontrado".to_string()))?;

        let mut conn = self.pool.acquire().await?;
        let lines = self.repository.find_lines_by_log(&mut conn, log.id).await?;

        Ok(MaintenanceLogResponse::from_log(log, lines))
    }

    pub async fn list_logs_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceLogResponse>, AppError> {
        let logs = self.repository.list_logs_by_vehicle(vehicle_id).await?;

        let mut conn = self.pool.acquire().await?;
        let mut responses = Vec::with_capacity(logs.len());
        for log in logs {
            let lines = self.repository.find_lines_by_log(&mut conn, log.id).await?;
            responses.push(MaintenanceLogResponse::from_log(log, lines));
        }

        Ok(responses)
    }

    /// Modificar fecha, kilometraje o nota de un log. La regla de
    /// kilometraje se vuelve a comprobar contra el vehículo.
    pub async fn update_log(
        &self,
        id: Uuid,
        request: UpdateMaintenanceLogRequest,
    ) -> Result<ApiResponse<MaintenanceLogResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_log_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Log de mantenimiento no encontrado".to_string()))?;

        let vehicle = self
            .vehicle_repository
            .find_by_id(current.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let mileage = request.mileage.unwrap_or(current.mileage);
        maintenance_service::validate_log_mileage(mileage, vehicle.mileage)?;

        // Nota ausente en el request: se conserva; `null` explícito: se borra
        let note = match request.note {
            Some(note) => note,
            None => current.note,
        };

        let mut tx = self.pool.begin().await?;

        let log = self
            .repository
            .update_log(&mut tx, id, request.date.unwrap_or(current.date), mileage, note)
            .await?;

        let lines = self.repository.find_lines_by_log(&mut tx, log.id).await?;

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceLogResponse::from_log(log, lines),
            "Log actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete_log(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete_log(id).await
    }

    // --- Líneas de coste ---

    /// Añadir una línea a un log existente y recalcular el total
    pub async fn add_line(
        &self,
        log_id: Uuid,
        service_type_id: Uuid,
        cost: Option<Decimal>,
    ) -> Result<ApiResponse<CostLineResponse>, AppError> {
        let log = self
            .repository
            .find_log_by_id(log_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Log de mantenimiento no encontrado".to_string()))?;

        let service_type = self
            .service_type_repository
            .find_by_id(service_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de servicio no encontrado".to_string()))?;

        let cost = maintenance_service::default_line_cost(cost, service_type.default_cost);

        let mut tx = self.pool.begin().await?;

        let line = self
            .repository
            .create_line(&mut tx, log.id, service_type.id, cost)
            .await?;

        self.repository
            .record_service(&mut tx, log.vehicle_id, service_type.id, log.mileage, log.date)
            .await?;

        self.recompute_total(&mut tx, log.id).await?;

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            CostLineResponse::from(line),
            "Línea de coste añadida".to_string(),
        ))
    }

    /// Editar el coste de una línea y recalcular el total del log
    pub async fn update_line(
        &self,
        line_id: Uuid,
        request: UpdateCostLineRequest,
    ) -> Result<ApiResponse<CostLineResponse>, AppError> {
        let current = self
            .repository
            .find_line_by_id(line_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Línea de coste no encontrada".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let line = self
            .repository
            .update_line_cost(&mut tx, line_id, request.cost)
            .await?;

        self.recompute_total(&mut tx, current.log_id).await?;

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            CostLineResponse::from(line),
            "Línea de coste actualizada".to_string(),
        ))
    }

    /// Eliminar una línea y recalcular el total del log
    pub async fn delete_line(&self, line_id: Uuid) -> Result<(), AppError> {
        let current = self
            .repository
            .find_line_by_id(line_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Línea de coste no encontrada".to_string()))?;

        let mut tx = self.pool.begin().await?;

        self.repository.delete_line(&mut tx, line_id).await?;
        self.recompute_total(&mut tx, current.log_id).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn recompute_total(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        log_id: Uuid,
    ) -> Result<(), AppError> {
        let lines = self.repository.find_lines_by_log(tx, log_id).await?;
        let total = maintenance_service::sum_cost_lines(&lines);
        self.repository.update_log_total(tx, log_id, total).await
    }

    /// Moneda del log: la indicada o la de la oficina del vehículo
    async fn resolve_currency(
        &self,
        requested: Option<String>,
        vehicle: &Vehicle,
    ) -> Result<String, AppError> {
        if let Some(currency) = requested {
            return Ok(currency);
        }

        let office_id = vehicle.office_id.ok_or_else(|| {
            AppError::BadRequest(
                "Indica la moneda del log: el vehículo no tiene oficina asignada".to_string(),
            )
        })?;

        let office = self
            .office_repository
            .find_by_id(office_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;

        Ok(office.currency)
    }

    fn find_service_type(
        service_types: &[ServiceType],
        id: Uuid,
    ) -> Result<&ServiceType, AppError> {
        service_types
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Tipo de servicio no encontrado".to_string()))
    }
}
