use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::service_type::ServiceType;
use crate::utils::errors::AppError;

pub struct ServiceTypeRepository {
    pool: PgPool,
}

impl ServiceTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        default_cost: Decimal,
    ) -> Result<ServiceType, AppError> {
        let service_type = sqlx::query_as::<_, ServiceType>(
            r#"
            INSERT INTO service_types (id, name, default_cost, active, created_at)
            VALUES ($1, $2, $3, TRUE, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(default_cost)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(service_type)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceType>, AppError> {
        let service_type =
            sqlx::query_as::<_, ServiceType>("SELECT * FROM service_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(service_type)
    }

    /// Cargar varios tipos de servicio de una vez (default de costes)
    pub async fn find_by_ids(
        &self,
        conn: &mut PgConnection,
        ids: &[Uuid],
    ) -> Result<Vec<ServiceType>, AppError> {
        let service_types =
            sqlx::query_as::<_, ServiceType>("SELECT * FROM service_types WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(conn)
                .await?;

        Ok(service_types)
    }

    pub async fn find_all(&self) -> Result<Vec<ServiceType>, AppError> {
        let service_types = sqlx::query_as::<_, ServiceType>(
            "SELECT * FROM service_types WHERE active = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(service_types)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        default_cost: Option<Decimal>,
        active: Option<bool>,
    ) -> Result<ServiceType, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service type not found".to_string()))?;

        let service_type = sqlx::query_as::<_, ServiceType>(
            r#"
            UPDATE service_types
            SET name = $2, default_cost = $3, active = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(default_cost.unwrap_or(current.default_cost))
        .bind(active.unwrap_or(current.active))
        .fetch_one(&self.pool)
        .await?;

        Ok(service_type)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM service_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service type not found".to_string()));
        }

        Ok(())
    }
}
