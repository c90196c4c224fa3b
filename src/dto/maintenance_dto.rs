use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{
    MaintenanceCostLine, MaintenanceLog, MaintenancePlan, MaintenanceStatus,
};

// Request para crear una entrada del plan de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenancePlanRequest {
    pub model_id: Uuid,
    pub service_type_id: Uuid,
    #[validate(range(min = 1))]
    pub interval_km: Option<i32>,
    #[validate(range(min = 1))]
    pub interval_days: Option<i32>,
    #[validate(range(min = 0))]
    pub remind_before_km: Option<i32>,
    #[validate(range(min = 0))]
    pub remind_before_days: Option<i32>,
}

// Request para actualizar una entrada del plan
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenancePlanRequest {
    #[validate(range(min = 1))]
    pub interval_km: Option<i32>,
    #[validate(range(min = 1))]
    pub interval_days: Option<i32>,
    #[validate(range(min = 0))]
    pub remind_before_km: Option<i32>,
    #[validate(range(min = 0))]
    pub remind_before_days: Option<i32>,
}

// Response de entrada del plan
#[derive(Debug, Serialize)]
pub struct MaintenancePlanResponse {
    pub id: Uuid,
    pub model_id: Uuid,
    pub service_type_id: Uuid,
    pub interval_km: Option<i32>,
    pub interval_days: Option<i32>,
    pub remind_before_km: i32,
    pub remind_before_days: i32,
    pub created_at: DateTime<Utc>,
}

impl From<MaintenancePlan> for MaintenancePlanResponse {
    fn from(plan: MaintenancePlan) -> Self {
        Self {
            id: plan.id,
            model_id: plan.model_id,
            service_type_id: plan.service_type_id,
            interval_km: plan.interval_km,
            interval_days: plan.interval_days,
            remind_before_km: plan.remind_before_km,
            remind_before_days: plan.remind_before_days,
            created_at: plan.created_at,
        }
    }
}

// Filtro para listar entradas del plan
#[derive(Debug, Deserialize)]
pub struct MaintenancePlanFilters {
    pub model_id: Uuid,
}

// Filtro para listar logs de servicio
#[derive(Debug, Deserialize)]
pub struct MaintenanceLogFilters {
    pub vehicle_id: Uuid,
}

// Línea de coste dentro de un alta o edición de log
#[derive(Debug, Serialize, Deserialize)]
pub struct CostLineInput {
    pub service_type_id: Uuid,
    // Si no se indica se sugiere el coste por defecto del tipo de servicio
    pub cost: Option<Decimal>,
}

// Request para registrar un servicio realizado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceLogRequest {
    pub vehicle_id: Uuid,
    // Por defecto hoy
    pub date: Option<NaiveDate>,
    pub mileage: i32,
    pub note: Option<String>,
    #[validate(custom = "crate::utils::validation::validate_currency_code")]
    pub currency: Option<String>,
    #[validate(length(min = 1))]
    pub lines: Vec<CostLineInput>,
}

// Request para actualizar un log existente. La nota distingue entre campo
// ausente (se conserva) y `null` explícito (se borra).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceLogRequest {
    pub date: Option<NaiveDate>,
    pub mileage: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

// Request para editar el coste de una línea existente
#[derive(Debug, Deserialize)]
pub struct UpdateCostLineRequest {
    pub cost: Decimal,
}

// Response de línea de coste
#[derive(Debug, Serialize)]
pub struct CostLineResponse {
    pub id: Uuid,
    pub log_id: Uuid,
    pub service_type_id: Uuid,
    pub cost: Decimal,
}

impl From<MaintenanceCostLine> for CostLineResponse {
    fn from(line: MaintenanceCostLine) -> Self {
        Self {
            id: line.id,
            log_id: line.log_id,
            service_type_id: line.service_type_id,
            cost: line.cost,
        }
    }
}

// Response de log con sus líneas
#[derive(Debug, Serialize)]
pub struct MaintenanceLogResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub mileage: i32,
    pub note: Option<String>,
    pub total_cost: Decimal,
    pub currency: String,
    pub lines: Vec<CostLineResponse>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceLogResponse {
    pub fn from_log(log: MaintenanceLog, lines: Vec<MaintenanceCostLine>) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            date: log.date,
            mileage: log.mileage,
            note: log.note,
            total_cost: log.total_cost,
            currency: log.currency,
            lines: lines.into_iter().map(CostLineResponse::from).collect(),
            created_at: log.created_at,
        }
    }
}

// Response de tracker de mantenimiento de un vehículo
#[derive(Debug, Serialize)]
pub struct MaintenanceStatusResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_type_id: Uuid,
    pub last_service_mileage: i32,
    pub last_service_date: Option<NaiveDate>,
}

impl From<MaintenanceStatus> for MaintenanceStatusResponse {
    fn from(status: MaintenanceStatus) -> Self {
        Self {
            id: status.id,
            vehicle_id: status.vehicle_id,
            service_type_id: status.service_type_id,
            last_service_mileage: status.last_service_mileage,
            last_service_date: status.last_service_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_log_note_absent_keeps_current() {
        let request: UpdateMaintenanceLogRequest = serde_json::from_str("{}").unwrap();
        assert!(request.note.is_none());
    }

    #[test]
    fn test_update_log_note_null_clears() {
        let request: UpdateMaintenanceLogRequest =
            serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(request.note, Some(None));
    }

    #[test]
    fn test_update_log_note_value_replaces() {
        let request: UpdateMaintenanceLogRequest =
            serde_json::from_str(r#"{"note": "cambio de aceite"}"#).unwrap();
        assert_eq!(request.note, Some(Some("cambio de aceite".to_string())));
    }
}
