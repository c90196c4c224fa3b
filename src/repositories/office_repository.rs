use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::office::Office;
use crate::utils::errors::AppError;

pub struct OfficeRepository {
    pool: PgPool,
}

impl OfficeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        city: String,
        currency: String,
    ) -> Result<Office, AppError> {
        let office = sqlx::query_as::<_, Office>(
            r#"
            INSERT INTO offices (id, name, city, currency, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(city)
        .bind(currency)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(office)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Office>, AppError> {
        let office = sqlx::query_as::<_, Office>("SELECT * FROM offices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(office)
    }

    pub async fn find_all(&self) -> Result<Vec<Office>, AppError> {
        let offices = sqlx::query_as::<_, Office>("SELECT * FROM offices ORDER BY city, name")
            .fetch_all(&self.pool)
            .await?;

        Ok(offices)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        city: Option<String>,
        currency: Option<String>,
    ) -> Result<Office, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Office not found".to_string()))?;

        let office = sqlx::query_as::<_, Office>(
            r#"
            UPDATE offices
            SET name = $2, city = $3, currency = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(city.unwrap_or(current.city))
        .bind(currency.unwrap_or(current.currency))
        .fetch_one(&self.pool)
        .await?;

        Ok(office)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM offices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Office not found".to_string()));
        }

        Ok(())
    }
}
