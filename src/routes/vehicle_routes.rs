use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::maintenance_dto::MaintenanceStatusResponse;
use crate::dto::office_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleModelRequest, CreateVehicleRequest, UpdateVehicleModelRequest,
    UpdateVehicleRequest, VehicleFilters, VehicleModelResponse, VehicleResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/maintenance-status", get(get_maintenance_statuses))
}

pub fn create_vehicle_model_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_model))
        .route("/", get(list_models))
        .route("/:id", get(get_model))
        .route("/:id", put(update_model))
        .route("/:id", delete(delete_model))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn get_maintenance_statuses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MaintenanceStatusResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.maintenance_statuses(id).await?;
    Ok(Json(response))
}

async fn create_model(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleModelRequest>,
) -> Result<Json<ApiResponse<VehicleModelResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create_model(request).await?;
    Ok(Json(response))
}

async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleModelResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_model(id).await?;
    Ok(Json(response))
}

async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleModelResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_models().await?;
    Ok(Json(response))
}

async fn update_model(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleModelRequest>,
) -> Result<Json<ApiResponse<VehicleModelResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_model(id, request).await?;
    Ok(Json(response))
}

async fn delete_model(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete_model(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Modelo eliminado exitosamente"
    })))
}
