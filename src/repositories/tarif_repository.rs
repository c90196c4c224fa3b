use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tarif::{PeriodType, Tarif};
use crate::utils::errors::{map_unique_violation, AppError};

const DUPLICATE_BRACKET_MSG: &str = "Ya existe una tarifa para este modelo y periodo";

pub struct TarifRepository {
    pool: PgPool,
}

impl TarifRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        office_id: Uuid,
        vehicle_model_id: Uuid,
        period_type: PeriodType,
        min_period: i32,
        price_per_unit: rust_decimal::Decimal,
        currency: String,
        active: bool,
    ) -> Result<Tarif, AppError> {
        let tarif = sqlx::query_as::<_, Tarif>(
            r#"
            INSERT INTO tarifs (id, office_id, vehicle_model_id, period_type, min_period, price_per_unit, currency, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(office_id)
        .bind(vehicle_model_id)
        .bind(period_type)
        .bind(min_period)
        .bind(price_per_unit)
        .bind(currency)
        .bind(active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_BRACKET_MSG))?;

        Ok(tarif)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Tarif>, AppError> {
        let tarif = sqlx::query_as::<_, Tarif>("SELECT * FROM tarifs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tarif)
    }

    pub async fn find_all(&self) -> Result<Vec<Tarif>, AppError> {
        let tarifs = sqlx::query_as::<_, Tarif>(
            "SELECT * FROM tarifs ORDER BY vehicle_model_id, period_type, min_period ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tarifs)
    }

    /// Tarifas activas candidatas para una oficina y un modelo, en orden
    /// de min_period ascendente. La selección del tramo la hace el service.
    pub async fn find_candidates(
        &self,
        office_id: Uuid,
        vehicle_model_id: Uuid,
    ) -> Result<Vec<Tarif>, AppError> {
        let tarifs = sqlx::query_as::<_, Tarif>(
            r#"
            SELECT * FROM tarifs
            WHERE office_id = $1 AND vehicle_model_id = $2 AND active = TRUE
            ORDER BY min_period ASC
            "#,
        )
        .bind(office_id)
        .bind(vehicle_model_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tarifs)
    }

    /// Comprobar si ya existe el tramo (modelo, tipo de periodo, min_period)
    pub async fn bracket_exists(
        &self,
        vehicle_model_id: Uuid,
        period_type: PeriodType,
        min_period: i32,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM tarifs
                WHERE vehicle_model_id = $1 AND period_type = $2 AND min_period = $3
                AND ($4::uuid IS NULL OR id != $4)
            )
            "#,
        )
        .bind(vehicle_model_id)
        .bind(period_type)
        .bind(min_period)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        office_id: Option<Uuid>,
        period_type: Option<PeriodType>,
        min_period: Option<i32>,
        price_per_unit: Option<rust_decimal::Decimal>,
        currency: Option<String>,
        active: Option<bool>,
    ) -> Result<Tarif, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarif not found".to_string()))?;

        let tarif = sqlx::query_as::<_, Tarif>(
            r#"
            UPDATE tarifs
            SET office_id = $2, period_type = $3, min_period = $4, price_per_unit = $5, currency = $6, active = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(office_id.unwrap_or(current.office_id))
        .bind(period_type.unwrap_or(current.period_type))
        .bind(min_period.unwrap_or(current.min_period))
        .bind(price_per_unit.unwrap_or(current.price_per_unit))
        .bind(currency.unwrap_or(current.currency))
        .bind(active.unwrap_or(current.active))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_BRACKET_MSG))?;

        Ok(tarif)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tarifs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tarif not found".to_string()));
        }

        Ok(())
    }
}
