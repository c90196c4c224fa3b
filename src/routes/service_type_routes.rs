use crate::controllers::service_type_controller::ServiceTypeController;
use crate::dto::office_dto::ApiResponse;
use crate::dto::service_type_dto::{
    CreateServiceTypeRequest, ServiceTypeResponse, UpdateServiceTypeRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_service_type_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_service_type))
        .route("/", get(list_service_types))
        .route("/:id", get(get_service_type))
        .route("/:id", put(update_service_type))
        .route("/:id", delete(delete_service_type))
}

async fn create_service_type(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceTypeRequest>,
) -> Result<Json<ApiResponse<ServiceTypeResponse>>, AppError> {
    let controller = ServiceTypeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_service_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceTypeResponse>, AppError> {
    let controller = ServiceTypeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_service_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceTypeResponse>>, AppError> {
    let controller = ServiceTypeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_service_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceTypeRequest>,
) -> Result<Json<ApiResponse<ServiceTypeResponse>>, AppError> {
    let controller = ServiceTypeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_service_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServiceTypeController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tipo de servicio eliminado exitosamente"
    })))
}
