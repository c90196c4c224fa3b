use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::rental_order::{RentalOrder, RentalOrderState};
use crate::utils::errors::AppError;

pub struct RentalOrderRepository {
    pool: PgPool,
}

/// Campos persistidos de una orden; los derivados (end_date, total_amount)
/// llegan ya calculados desde el controller.
pub struct NewRentalOrder {
    pub office_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    pub tarif_id: Uuid,
    pub customer_name: String,
    pub rental_days: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub extra_expenses: Decimal,
    pub start_mileage: i32,
    pub end_mileage: i32,
    pub total_amount: Decimal,
    pub deposit_amount: Decimal,
    pub currency: String,
}

impl RentalOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, order: NewRentalOrder) -> Result<RentalOrder, AppError> {
        let created = sqlx::query_as::<_, RentalOrder>(
            r#"
            INSERT INTO rental_orders (
                id, office_id, vehicle_id, tarif_id, customer_name, rental_days,
                start_date, end_date, extra_expenses, start_mileage, end_mileage,
                total_amount, deposit_amount, currency, state, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, 'draft', $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order.office_id)
        .bind(order.vehicle_id)
        .bind(order.tarif_id)
        .bind(order.customer_name)
        .bind(order.rental_days)
        .bind(order.start_date)
        .bind(order.end_date)
        .bind(order.extra_expenses)
        .bind(order.start_mileage)
        .bind(order.end_mileage)
        .bind(order.total_amount)
        .bind(order.deposit_amount)
        .bind(order.currency)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalOrder>, AppError> {
        let order = sqlx::query_as::<_, RentalOrder>("SELECT * FROM rental_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    /// Cargar un lote de órdenes dentro de una transacción, bloqueándolas
    /// hasta el commit para que la comprobación de precondiciones y la
    /// mutación sean atómicas.
    pub async fn find_by_ids_for_update(
        &self,
        conn: &mut PgConnection,
        ids: &[Uuid],
    ) -> Result<Vec<RentalOrder>, AppError> {
        let orders = sqlx::query_as::<_, RentalOrder>(
            "SELECT * FROM rental_orders WHERE id = ANY($1) FOR UPDATE",
        )
        .bind(ids)
        .fetch_all(conn)
        .await?;

        Ok(orders)
    }

    pub async fn list(
        &self,
        state: Option<RentalOrderState>,
        vehicle_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RentalOrder>, AppError> {
        let orders = sqlx::query_as::<_, RentalOrder>(
            r#"
            SELECT * FROM rental_orders
            WHERE ($1::rental_order_state IS NULL OR state = $1)
            AND ($2::uuid IS NULL OR vehicle_id = $2)
            ORDER BY start_date DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(state)
        .bind(vehicle_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Reescribir los campos editables de una orden en draft, derivados
    /// incluidos
    pub async fn update_draft(
        &self,
        id: Uuid,
        order: NewRentalOrder,
    ) -> Result<RentalOrder, AppError> {
        let updated = sqlx::query_as::<_, RentalOrder>(
            r#"
            UPDATE rental_orders
            SET office_id = $2, vehicle_id = $3, tarif_id = $4, customer_name = $5,
                rental_days = $6, start_date = $7, end_date = $8, extra_expenses = $9,
                start_mileage = $10, end_mileage = $11, total_amount = $12,
                deposit_amount = $13, currency = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(order.office_id)
        .bind(order.vehicle_id)
        .bind(order.tarif_id)
        .bind(order.customer_name)
        .bind(order.rental_days)
        .bind(order.start_date)
        .bind(order.end_date)
        .bind(order.extra_expenses)
        .bind(order.start_mileage)
        .bind(order.end_mileage)
        .bind(order.total_amount)
        .bind(order.deposit_amount)
        .bind(order.currency)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Registrar la lectura final del odómetro dentro de la transacción
    /// de cierre
    pub async fn set_end_mileage(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        end_mileage: i32,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE rental_orders SET end_mileage = $2 WHERE id = $1")
            .bind(id)
            .bind(end_mileage)
            .execute(conn)
            .await?;

        Ok(())
    }

    /// Cambiar el estado de una orden dentro de una transacción
    pub async fn set_state(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        state: RentalOrderState,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE rental_orders SET state = $2 WHERE id = $1")
            .bind(id)
            .bind(state)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rental_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Rental order not found".to_string()));
        }

        Ok(())
    }
}
