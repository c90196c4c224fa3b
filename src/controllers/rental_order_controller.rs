use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::office_dto::ApiResponse;
use crate::dto::rental_order_dto::{
    BatchOrderActionRequest, BatchOrderEndRequest, CreateRentalOrderRequest, RentalOrderFilters,
    RentalOrderResponse, UpdateRentalOrderRequest,
};
use crate::models::rental_order::{RentalOrder, RentalOrderState};
use crate::models::tarif::Tarif;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::repositories::rental_order_repository::{NewRentalOrder, RentalOrderRepository};
use crate::repositories::tarif_repository::TarifRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::{rental_service, tarif_service};
use crate::utils::errors::AppError;

pub struct RentalOrderController {
    pool: PgPool,
    repository: RentalOrderRepository,
    vehicle_repository: VehicleRepository,
    tarif_repository: TarifRepository,
}

impl RentalOrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RentalOrderRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            tarif_repository: TarifRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(
        &self,
        request: CreateRentalOrderRequest,
    ) -> Result<ApiResponse<RentalOrderResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.status != VehicleStatus::Available {
            return Err(AppError::BadRequest(
                "El vehículo no está disponible para alquiler".to_string(),
            ));
        }

        let office_id = request.office_id.or(vehicle.office_id).ok_or_else(|| {
            AppError::BadRequest("La orden necesita una oficina asignada".to_string())
        })?;

        let rental_days = request.rental_days.unwrap_or(1);
        let start_date = request.start_date.unwrap_or_else(Utc::now);

        let tarif = self
            .resolve_tarif(request.tarif_id, office_id, &vehicle, rental_days)
            .await?;

        // Al seleccionar vehículo, el kilometraje inicial es el suyo actual
        let start_mileage = request.start_mileage.unwrap_or(vehicle.mileage);
        let extra_expenses = request.extra_expenses.unwrap_or(Decimal::ZERO);

        let order = self
            .repository
            .create(NewRentalOrder {
                office_id: Some(office_id),
                vehicle_id: vehicle.id,
                tarif_id: tarif.id,
                customer_name: request.customer_name,
                rental_days,
                start_date,
                end_date: rental_service::compute_end_date(Some(start_date), rental_days),
                extra_expenses,
                start_mileage,
                end_mileage: 0,
                total_amount: rental_service::compute_total_amount(
                    rental_days,
                    tarif.price_per_unit,
                    extra_expenses,
                ),
                deposit_amount: request.deposit_amount.unwrap_or(Decimal::ZERO),
                currency: tarif.currency,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            RentalOrderResponse::from(order),
            "Orden de alquiler creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RentalOrderResponse, AppError> {
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        Ok(RentalOrderResponse::from(order))
    }

    pub async fn list(
        &self,
        filters: RentalOrderFilters,
    ) -> Result<Vec<RentalOrderResponse>, AppError> {
        let limit = filters.limit.unwrap_or(50).min(100);
        let offset = filters.offset.unwrap_or(0);

        let orders = self
            .repository
            .list(filters.state, filters.vehicle_id, limit, offset)
            .await?;

        Ok(orders.into_iter().map(RentalOrderResponse::from).collect())
    }

    /// Modificar una orden en draft. Cambiar vehículo o días de alquiler
    /// reinicia el kilometraje inicial y reselecciona la tarifa; los campos
    /// derivados se recalculan siempre.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRentalOrderRequest,
    ) -> Result<ApiResponse<RentalOrderResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        if current.state != RentalOrderState::Draft {
            return Err(AppError::BadRequest(
                "Solo se puede modificar una orden en estado draft".to_string(),
            ));
        }

        let vehicle_changed =
            request.vehicle_id.is_some() && request.vehicle_id != Some(current.vehicle_id);

        let vehicle = match request.vehicle_id {
            Some(vehicle_id) => {
                let vehicle = self
                    .vehicle_repository
                    .find_by_id(vehicle_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
                if vehicle_changed && vehicle.status != VehicleStatus::Available {
                    return Err(AppError::BadRequest(
                        "El vehículo no está disponible para alquiler".to_string(),
                    ));
                }
                vehicle
            }
            None => self
                .vehicle_repository
                .find_by_id(current.vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?,
        };

        let office_id = current.office_id.or(vehicle.office_id).ok_or_else(|| {
            AppError::BadRequest("La orden necesita una oficina asignada".to_string())
        })?;

        let rental_days = request.rental_days.unwrap_or(current.rental_days);
        let days_changed = rental_days != current.rental_days;

        // Cambiar vehículo o días descarta la tarifa y la reselecciona
        let tarif = if request.tarif_id.is_some() || vehicle_changed || days_changed {
            self.resolve_tarif(request.tarif_id, office_id, &vehicle, rental_days)
                .await?
        } else {
            self.tarif_repository
                .find_by_id(current.tarif_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Tarifa no encontrada".to_string()))?
        };

        let start_mileage = match request.start_mileage {
            Some(mileage) => mileage,
            None if vehicle_changed => vehicle.mileage,
            None => current.start_mileage,
        };

        let start_date = request.start_date.unwrap_or(current.start_date);
        let extra_expenses = request.extra_expenses.unwrap_or(current.extra_expenses);

        let order = self
            .repository
            .update_draft(
                id,
                NewRentalOrder {
                    office_id: Some(office_id),
                    vehicle_id: vehicle.id,
                    tarif_id: tarif.id,
                    customer_name: request.customer_name.unwrap_or(current.customer_name),
                    rental_days,
                    start_date,
                    end_date: rental_service::compute_end_date(Some(start_date), rental_days),
                    extra_expenses,
                    start_mileage,
                    end_mileage: request.end_mileage.unwrap_or(current.end_mileage),
                    total_amount: rental_service::compute_total_amount(
                        rental_days,
                        tarif.price_per_unit,
                        extra_expenses,
                    ),
                    deposit_amount: request.deposit_amount.unwrap_or(current.deposit_amount),
                    currency: tarif.currency,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RentalOrderResponse::from(order),
            "Orden actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        if !matches!(
            order.state,
            RentalOrderState::Draft | RentalOrderState::Cancelled
        ) {
            return Err(AppError::BadRequest(
                "Solo se puede eliminar una orden en draft o cancelada".to_string(),
            ));
        }

        self.repository.delete(id).await
    }

    /// Iniciar un lote de órdenes: todas deben estar en draft. La
    /// comprobación recorre el lote completo antes de mutar nada.
    pub async fn start(
        &self,
        request: BatchOrderActionRequest,
    ) -> Result<ApiResponse<Vec<RentalOrderResponse>>, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;

        let mut orders = self.load_batch(&mut tx, &request.order_ids).await?;
        rental_service::ensure_all_can_start(&orders)?;

        for order in &mut orders {
            self.repository
                .set_state(&mut tx, order.id, RentalOrderState::Active)
                .await?;
            self.vehicle_repository
                .set_status(&mut tx, order.vehicle_id, VehicleStatus::Rented)
                .await?;
            order.state = RentalOrderState::Active;
        }

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            orders.into_iter().map(RentalOrderResponse::from).collect(),
            "Alquiler iniciado".to_string(),
        ))
    }

    /// Finalizar un lote de órdenes activas. Cada orden puede traer la
    /// lectura final del odómetro, que se persiste antes de aplicar la
    /// regla de cierre: el kilometraje del vehículo nunca decrece, queda
    /// en max(kilometraje actual, end_mileage).
    pub async fn end(
        &self,
        request: BatchOrderEndRequest,
    ) -> Result<ApiResponse<Vec<RentalOrderResponse>>, AppError> {
        request.validate()?;
        for item in &request.orders {
            item.validate()?;
        }

        let order_ids: Vec<Uuid> = request.orders.iter().map(|item| item.order_id).collect();

        let mut tx = self.pool.begin().await?;

        let mut orders = self.load_batch(&mut tx, &order_ids).await?;
        rental_service::ensure_all_can_end(&orders)?;

        for order in &mut orders {
            if let Some(end_mileage) = request
                .orders
                .iter()
                .find(|item| item.order_id == order.id)
                .and_then(|item| item.end_mileage)
            {
                self.repository
                    .set_end_mileage(&mut tx, order.id, end_mileage)
                    .await?;
                order.end_mileage = end_mileage;
            }

            let vehicle = self
                .vehicle_repository
                .find_by_id_conn(&mut tx, order.vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

            let mileage =
                rental_service::closing_vehicle_mileage(vehicle.mileage, order.end_mileage);

            self.repository
                .set_state(&mut tx, order.id, RentalOrderState::Done)
                .await?;
            self.vehicle_repository
                .set_status_and_mileage(&mut tx, vehicle.id, VehicleStatus::Available, mileage)
                .await?;
            order.state = RentalOrderState::Done;
        }

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            orders.into_iter().map(RentalOrderResponse::from).collect(),
            "Alquiler finalizado".to_string(),
        ))
    }

    /// Cancelar un lote de órdenes en draft o activas. Las activas liberan
    /// su vehículo.
    pub async fn cancel(
        &self,
        request: BatchOrderActionRequest,
    ) -> Result<ApiResponse<Vec<RentalOrderResponse>>, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;

        let mut orders = self.load_batch(&mut tx, &request.order_ids).await?;
        rental_service::ensure_all_can_cancel(&orders)?;

        for order in &mut orders {
            if order.state == RentalOrderState::Active {
                self.vehicle_repository
                    .set_status(&mut tx, order.vehicle_id, VehicleStatus::Available)
                    .await?;
            }
            self.repository
                .set_state(&mut tx, order.id, RentalOrderState::Cancelled)
                .await?;
            order.state = RentalOrderState::Cancelled;
        }

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            orders.into_iter().map(RentalOrderResponse::from).collect(),
            "Orden cancelada".to_string(),
        ))
    }

    /// Cargar y bloquear el lote, comprobando que no falte ninguna orden
    async fn load_batch(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        order_ids: &[Uuid],
    ) -> Result<Vec<RentalOrder>, AppError> {
        let orders = self
            .repository
            .find_by_ids_for_update(tx, order_ids)
            .await?;

        if orders.len() != order_ids.len() {
            return Err(AppError::NotFound(
                "Alguna de las órdenes del lote no existe".to_string(),
            ));
        }

        Ok(orders)
    }

    /// Resolver la tarifa de la orden: la indicada (validando que su
    /// oficina y modelo coincidan con los de la orden) o el tramo activo
    /// que cubre rental_days.
    async fn resolve_tarif(
        &self,
        tarif_id: Option<Uuid>,
        office_id: Uuid,
        vehicle: &Vehicle,
        rental_days: i32,
    ) -> Result<Tarif, AppError> {
        match tarif_id {
            Some(tarif_id) => {
                let tarif = self
                    .tarif_repository
                    .find_by_id(tarif_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Tarifa no encontrada".to_string()))?;

                if tarif.vehicle_model_id != vehicle.model_id {
                    return Err(AppError::BadRequest(
                        "La tarifa no corresponde al modelo del vehículo".to_string(),
                    ));
                }
                if tarif.office_id != office_id {
                    return Err(AppError::BadRequest(
                        "La tarifa no corresponde a la oficina de la orden".to_string(),
                    ));
                }

                Ok(tarif)
            }
            None => {
                let candidates = self
                    .tarif_repository
                    .find_candidates(office_id, vehicle.model_id)
                    .await?;

                tarif_service::select_bracket(&candidates, rental_days)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::BadRequest(
                            "No hay tarifa aplicable para esos días de alquiler".to_string(),
                        )
                    })
            }
        }
    }
}
