use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleModel, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Catálogo de modelos ---

    pub async fn create_model(
        &self,
        name: String,
        brand: Option<String>,
    ) -> Result<VehicleModel, AppError> {
        let model = sqlx::query_as::<_, VehicleModel>(
            r#"
            INSERT INTO vehicle_models (id, name, brand, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(brand)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn find_model_by_id(&self, id: Uuid) -> Result<Option<VehicleModel>, AppError> {
        let model = sqlx::query_as::<_, VehicleModel>("SELECT * FROM vehicle_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(model)
    }

    pub async fn find_all_models(&self) -> Result<Vec<VehicleModel>, AppError> {
        let models =
            sqlx::query_as::<_, VehicleModel>("SELECT * FROM vehicle_models ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(models)
    }

    pub async fn update_model(
        &self,
        id: Uuid,
        name: Option<String>,
        brand: Option<String>,
    ) -> Result<VehicleModel, AppError> {
        let current = self
            .find_model_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle model not found".to_string()))?;

        let model = sqlx::query_as::<_, VehicleModel>(
            r#"
            UPDATE vehicle_models
            SET name = $2, brand = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(brand.or(current.brand))
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn delete_model(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicle_models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle model not found".to_string()));
        }

        Ok(())
    }

    // --- Vehículos ---

    /// Insertar un vehículo dentro de una transacción. El controller crea
    /// los trackers de mantenimiento en la misma transacción.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        name: String,
        model_id: Uuid,
        office_id: Option<Uuid>,
        plate_number: Option<String>,
        serial_number: Option<String>,
        mileage: i32,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, name, model_id, office_id, plate_number, serial_number, mileage, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'available', $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(model_id)
        .bind(office_id)
        .bind(plate_number)
        .bind(serial_number)
        .bind(mileage)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Variante para leer el vehículo dentro de una transacción en curso
    pub async fn find_by_id_conn(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(
        &self,
        status: Option<VehicleStatus>,
        office_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::vehicle_status IS NULL OR status = $1)
            AND ($2::uuid IS NULL OR office_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status)
        .bind(office_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        office_id: Option<Uuid>,
        plate_number: Option<String>,
        serial_number: Option<String>,
        mileage: Option<i32>,
        status: Option<VehicleStatus>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, office_id = $3, plate_number = $4, serial_number = $5, mileage = $6, status = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(office_id.or(current.office_id))
        .bind(plate_number.or(current.plate_number))
        .bind(serial_number.or(current.serial_number))
        .bind(mileage.unwrap_or(current.mileage))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Cambiar el estado del vehículo dentro de una transacción
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: VehicleStatus,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE vehicles SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(conn)
            .await?;

        Ok(())
    }

    /// Cambiar estado y kilometraje a la vez (cierre de orden)
    pub async fn set_status_and_mileage(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: VehicleStatus,
        mileage: i32,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE vehicles SET status = $2, mileage = $3 WHERE id = $1")
            .bind(id)
            .bind(status)
            .bind(mileage)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }
}
