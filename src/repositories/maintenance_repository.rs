use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::maintenance::{
    MaintenanceCostLine, MaintenanceLog, MaintenancePlan, MaintenanceStatus,
};
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Plan de mantenimiento por modelo ---

    pub async fn create_plan(
        &self,
        model_id: Uuid,
        service_type_id: Uuid,
        interval_km: Option<i32>,
        interval_days: Option<i32>,
        remind_before_km: i32,
        remind_before_days: i32,
    ) -> Result<MaintenancePlan, AppError> {
        let plan = sqlx::query_as::<_, MaintenancePlan>(
            r#"
            INSERT INTO maintenance_plans (
                id, model_id, service_type_id, interval_km, interval_days,
                remind_before_km, remind_before_days, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(model_id)
        .bind(service_type_id)
        .bind(interval_km)
        .bind(interval_days)
        .bind(remind_before_km)
        .bind(remind_before_days)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    pub async fn find_plan_by_id(&self, id: Uuid) -> Result<Option<MaintenancePlan>, AppError> {
        let plan =
            sqlx::query_as::<_, MaintenancePlan>("SELECT * FROM maintenance_plans WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(plan)
    }

    /// Entradas del plan de un modelo, leídas dentro de la transacción de
    /// alta del vehículo
    pub async fn find_plans_by_model(
        &self,
        conn: &mut PgConnection,
        model_id: Uuid,
    ) -> Result<Vec<MaintenancePlan>, AppError> {
        let plans = sqlx::query_as::<_, MaintenancePlan>(
            "SELECT * FROM maintenance_plans WHERE model_id = $1 ORDER BY created_at",
        )
        .bind(model_id)
        .fetch_all(conn)
        .await?;

        Ok(plans)
    }

    pub async fn update_plan(
        &self,
        id: Uuid,
        interval_km: Option<i32>,
        interval_days: Option<i32>,
        remind_before_km: Option<i32>,
        remind_before_days: Option<i32>,
    ) -> Result<MaintenancePlan, AppError> {
        let current = self
            .find_plan_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance plan not found".to_string()))?;

        let plan = sqlx::query_as::<_, MaintenancePlan>(
            r#"
            UPDATE maintenance_plans
            SET interval_km = $2, interval_days = $3, remind_before_km = $4, remind_before_days = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(interval_km.or(current.interval_km))
        .bind(interval_days.or(current.interval_days))
        .bind(remind_before_km.unwrap_or(current.remind_before_km))
        .bind(remind_before_days.unwrap_or(current.remind_before_days))
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    pub async fn delete_plan(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM maintenance_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Maintenance plan not found".to_string()));
        }

        Ok(())
    }

    // --- Trackers por vehículo ---

    /// Crear el tracker de un tipo de servicio para un vehículo recién
    /// dado de alta: sin kilometraje ni fecha de servicio previos
    pub async fn create_status(
        &self,
        conn: &mut PgConnection,
        vehicle_id: Uuid,
        service_type_id: Uuid,
    ) -> Result<MaintenanceStatus, AppError> {
        let status = sqlx::query_as::<_, MaintenanceStatus>(
            r#"
            INSERT INTO maintenance_statuses (
                id, vehicle_id, service_type_id, last_service_mileage, last_service_date, created_at
            )
            VALUES ($1, $2, $3, 0, NULL, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(service_type_id)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(status)
    }

    pub async fn find_statuses_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceStatus>, AppError> {
        let statuses = sqlx::query_as::<_, MaintenanceStatus>(
            "SELECT * FROM maintenance_statuses WHERE vehicle_id = $1 ORDER BY created_at",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(statuses)
    }

    /// Registrar el último servicio de un tipo en el tracker del vehículo
    pub async fn record_service(
        &self,
        conn: &mut PgConnection,
        vehicle_id: Uuid,
        service_type_id: Uuid,
        mileage: i32,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE maintenance_statuses
            SET last_service_mileage = $3, last_service_date = $4
            WHERE vehicle_id = $1 AND service_type_id = $2
            "#,
        )
        .bind(vehicle_id)
        .bind(service_type_id)
        .bind(mileage)
        .bind(date)
        .execute(conn)
        .await?;

        Ok(())
    }

    // --- Logs de servicio y líneas de coste ---

    pub async fn create_log(
        &self,
        conn: &mut PgConnection,
        vehicle_id: Uuid,
        date: NaiveDate,
        mileage: i32,
        note: Option<String>,
        currency: String,
    ) -> Result<MaintenanceLog, AppError> {
        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs (id, vehicle_id, date, mileage, note, total_cost, currency, created_at)
            VALUES ($1, $2, $3, $4, $5, 0, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(date)
        .bind(mileage)
        .bind(note)
        .bind(currency)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(log)
    }

    pub async fn find_log_by_id(&self, id: Uuid) -> Result<Option<MaintenanceLog>, AppError> {
        let log = sqlx::query_as::<_, MaintenanceLog>("SELECT * FROM maintenance_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(log)
    }

    pub async fn list_logs_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceLog>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            "SELECT * FROM maintenance_logs WHERE vehicle_id = $1 ORDER BY date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn update_log(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        date: NaiveDate,
        mileage: i32,
        note: Option<String>,
    ) -> Result<MaintenanceLog, AppError> {
        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            UPDATE maintenance_logs
            SET date = $2, mileage = $3, note = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(mileage)
        .bind(note)
        .fetch_one(conn)
        .await?;

        Ok(log)
    }

    /// Reescribir el total derivado tras cualquier cambio en las líneas
    pub async fn update_log_total(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        total_cost: Decimal,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE maintenance_logs SET total_cost = $2 WHERE id = $1")
            .bind(id)
            .bind(total_cost)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn delete_log(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM maintenance_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Maintenance log not found".to_string()));
        }

        Ok(())
    }

    pub async fn create_line(
        &self,
        conn: &mut PgConnection,
        log_id: Uuid,
        service_type_id: Uuid,
        cost: Decimal,
    ) -> Result<MaintenanceCostLine, AppError> {
        let line = sqlx::query_as::<_, MaintenanceCostLine>(
            r#"
            INSERT INTO maintenance_cost_lines (id, log_id, service_type_id, cost, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(log_id)
        .bind(service_type_id)
        .bind(cost)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(line)
    }

    pub async fn find_line_by_id(&self, id: Uuid) -> Result<Option<MaintenanceCostLine>, AppError> {
        let line = sqlx::query_as::<_, MaintenanceCostLine>(
            "SELECT * FROM maintenance_cost_lines WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(line)
    }

    pub async fn find_lines_by_log(
        &self,
        conn: &mut PgConnection,
        log_id: Uuid,
    ) -> Result<Vec<MaintenanceCostLine>, AppError> {
        let lines = sqlx::query_as::<_, MaintenanceCostLine>(
            "SELECT * FROM maintenance_cost_lines WHERE log_id = $1 ORDER BY created_at",
        )
        .bind(log_id)
        .fetch_all(conn)
        .await?;

        Ok(lines)
    }

    pub async fn update_line_cost(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        cost: Decimal,
    ) -> Result<MaintenanceCostLine, AppError> {
        let line = sqlx::query_as::<_, MaintenanceCostLine>(
            r#"
            UPDATE maintenance_cost_lines
            SET cost = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(cost)
        .fetch_one(conn)
        .await?;

        Ok(line)
    }

    pub async fn delete_line(&self, conn: &mut PgConnection, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM maintenance_cost_lines WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Maintenance cost line not found".to_string(),
            ));
        }

        Ok(())
    }
}
