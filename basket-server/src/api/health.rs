//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    /// False while shopping-list saves are failing
    pub persistence_ok: bool,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let persistence_ok = !state.store.lock().await.is_persistence_degraded();

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "basket-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        persistence_ok,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
