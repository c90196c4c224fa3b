use crate::controllers::office_controller::OfficeController;
use crate::dto::office_dto::{
    ApiResponse, CreateOfficeRequest, OfficeResponse, UpdateOfficeRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_office_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_office))
        .route("/", get(list_offices))
        .route("/:id", get(get_office))
        .route("/:id", put(update_office))
        .route("/:id", delete(delete_office))
}

async fn create_office(
    State(state): State<AppState>,
    Json(request): Json<CreateOfficeRequest>,
) -> Result<Json<ApiResponse<OfficeResponse>>, AppError> {
    let controller = OfficeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_office(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OfficeResponse>, AppError> {
    let controller = OfficeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_offices(
    State(state): State<AppState>,
) -> Result<Json<Vec<OfficeResponse>>, AppError> {
    let controller = OfficeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_office(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOfficeRequest>,
) -> Result<Json<ApiResponse<OfficeResponse>>, AppError> {
    let controller = OfficeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_office(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = OfficeController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Oficina eliminada exitosamente"
    })))
}
