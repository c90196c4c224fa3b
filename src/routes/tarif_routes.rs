use crate::controllers::tarif_controller::TarifController;
use crate::dto::office_dto::ApiResponse;
use crate::dto::tarif_dto::{
    CreateTarifRequest, TarifMatchQuery, TarifResponse, UpdateTarifRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_tarif_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tarif))
        .route("/", get(list_tarifs))
        // La consulta de tramo va antes que /:id para no capturarla como UUID
        .route("/match", get(find_match))
        .route("/:id", get(get_tarif))
        .route("/:id", put(update_tarif))
        .route("/:id", delete(delete_tarif))
}

async fn create_tarif(
    State(state): State<AppState>,
    Json(request): Json<CreateTarifRequest>,
) -> Result<Json<ApiResponse<TarifResponse>>, AppError> {
    let controller = TarifController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_tarif(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TarifResponse>, AppError> {
    let controller = TarifController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_tarifs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TarifResponse>>, AppError> {
    let controller = TarifController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_tarif(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTarifRequest>,
) -> Result<Json<ApiResponse<TarifResponse>>, AppError> {
    let controller = TarifController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_tarif(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TarifController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tarifa eliminada exitosamente"
    })))
}

async fn find_match(
    State(state): State<AppState>,
    Query(query): Query<TarifMatchQuery>,
) -> Result<Json<Option<TarifResponse>>, AppError> {
    let controller = TarifController::new(state.pool.clone());
    let response = controller.find_match(query).await?;
    Ok(Json(response))
}
