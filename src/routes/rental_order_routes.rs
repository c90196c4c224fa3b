use crate::controllers::rental_order_controller::RentalOrderController;
use crate::dto::office_dto::ApiResponse;
use crate::dto::rental_order_dto::{
    BatchOrderActionRequest, BatchOrderEndRequest, CreateRentalOrderRequest, RentalOrderFilters,
    RentalOrderResponse, UpdateRentalOrderRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_rental_order_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id", put(update_order))
        .route("/:id", delete(delete_order))
        // Acciones de ciclo de vida por lote
        .route("/actions/start", post(start_orders))
        .route("/actions/end", post(end_orders))
        .route("/actions/cancel", post(cancel_orders))
}

async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalOrderRequest>,
) -> Result<Json<ApiResponse<RentalOrderResponse>>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalOrderResponse>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_orders(
    State(state): State<AppState>,
    Query(filters): Query<RentalOrderFilters>,
) -> Result<Json<Vec<RentalOrderResponse>>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRentalOrderRequest>,
) -> Result<Json<ApiResponse<RentalOrderResponse>>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Orden eliminada exitosamente"
    })))
}

async fn start_orders(
    State(state): State<AppState>,
    Json(request): Json<BatchOrderActionRequest>,
) -> Result<Json<ApiResponse<Vec<RentalOrderResponse>>>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    let response = controller.start(request).await?;
    Ok(Json(response))
}

async fn end_orders(
    State(state): State<AppState>,
    Json(request): Json<BatchOrderEndRequest>,
) -> Result<Json<ApiResponse<Vec<RentalOrderResponse>>>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    let response = controller.end(request).await?;
    Ok(Json(response))
}

async fn cancel_orders(
    State(state): State<AppState>,
    Json(request): Json<BatchOrderActionRequest>,
) -> Result<Json<ApiResponse<Vec<RentalOrderResponse>>>, AppError> {
    let controller = RentalOrderController::new(state.pool.clone());
    let response = controller.cancel(request).await?;
    Ok(Json(response))
}
