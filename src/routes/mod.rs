use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

pub mod maintenance_routes;
pub mod office_routes;
pub mod rental_order_routes;
pub mod service_type_routes;
pub mod tarif_routes;
pub mod vehicle_routes;

/// Router completo de la API
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/offices", office_routes::create_office_router())
        .nest(
            "/api/vehicle-models",
            vehicle_routes::create_vehicle_model_router(),
        )
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/tarifs", tarif_routes::create_tarif_router())
        .nest(
            "/api/rental-orders",
            rental_order_routes::create_rental_order_router(),
        )
        .nest(
            "/api/service-types",
            service_type_routes::create_service_type_router(),
        )
        .nest(
            "/api/maintenance-plans",
            maintenance_routes::create_maintenance_plan_router(),
        )
        .nest(
            "/api/maintenance-logs",
            maintenance_routes::create_maintenance_log_router(),
        )
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "vehicle-rental",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
