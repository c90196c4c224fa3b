use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{
    CostLineInput, CostLineResponse, CreateMaintenanceLogRequest, CreateMaintenancePlanRequest,
    MaintenanceLogFilters, MaintenanceLogResponse, MaintenancePlanFilters,
    MaintenancePlanResponse, UpdateCostLineRequest, UpdateMaintenanceLogRequest,
    UpdateMaintenancePlanRequest,
};
use crate::dto::office_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_maintenance_plan_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_plan))
        .route("/", get(list_plans))
        .route("/:id", get(get_plan))
        .route("/:id", put(update_plan))
        .route("/:id", delete(delete_plan))
}

pub fn create_maintenance_log_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_log))
        .route("/", get(list_logs))
        .route("/:id", get(get_log))
        .route("/:id", put(update_log))
        .route("/:id", delete(delete_log))
        .route("/:id/lines", post(add_line))
        .route("/lines/:line_id", put(update_line))
        .route("/lines/:line_id", delete(delete_line))
}

// --- Plan de mantenimiento ---

async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenancePlanRequest>,
) -> Result<Json<ApiResponse<MaintenancePlanResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create_plan(request).await?;
    Ok(Json(response))
}

async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenancePlanResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.get_plan(id).await?;
    Ok(Json(response))
}

async fn list_plans(
    State(state): State<AppState>,
    Query(filters): Query<MaintenancePlanFilters>,
) -> Result<Json<Vec<MaintenancePlanResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_plans_by_model(filters.model_id).await?;
    Ok(Json(response))
}

async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenancePlanRequest>,
) -> Result<Json<ApiResponse<MaintenancePlanResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.update_plan(id, request).await?;
    Ok(Json(response))
}

async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete_plan(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Entrada del plan eliminada exitosamente"
    })))
}

// --- Logs de servicio ---

async fn create_log(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceLogRequest>,
) -> Result<Json<ApiResponse<MaintenanceLogResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create_log(request).await?;
    Ok(Json(response))
}

async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenanceLogResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.get_log(id).await?;
    Ok(Json(response))
}

async fn list_logs(
    State(state): State<AppState>,
    Query(filters): Query<MaintenanceLogFilters>,
) -> Result<Json<Vec<MaintenanceLogResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_logs_by_vehicle(filters.vehicle_id).await?;
    Ok(Json(response))
}

async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceLogRequest>,
) -> Result<Json<ApiResponse<MaintenanceLogResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.update_log(id, request).await?;
    Ok(Json(response))
}

async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete_log(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Log eliminado exitosamente"
    })))
}

// --- Líneas de coste ---

async fn add_line(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CostLineInput>,
) -> Result<Json<ApiResponse<CostLineResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller
        .add_line(id, request.service_type_id, request.cost)
        .await?;
    Ok(Json(response))
}

async fn update_line(
    State(state): State<AppState>,
    Path(line_id): Path<Uuid>,
    Json(request): Json<UpdateCostLineRequest>,
) -> Result<Json<ApiResponse<CostLineResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.update_line(line_id, request).await?;
    Ok(Json(response))
}

async fn delete_line(
    State(state): State<AppState>,
    Path(line_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete_line(line_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Línea de coste eliminada exitosamente"
    })))
}
