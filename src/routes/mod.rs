//! Rutas
//!
//! Un router de axum por dominio, montados bajo /api.

pub mod admin_routes;
pub mod billing_routes;
pub mod customer_routes;
pub mod driver_routes;
pub mod ride_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Armar el router completo de la API
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/drivers", driver_routes::create_driver_router())
        .nest("/api/admin", admin_routes::create_admin_router(state.clone()))
        .nest("/api/billing", billing_routes::create_billing_router())
        .nest("/api/rides", ride_routes::create_ride_router())
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "ride-hailing-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
