//! Handler for the health check endpoint.

use axum::{extract::State, Json};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness and the active persistence backend.
///
/// # Endpoint
///
/// `GET /api/health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.backend,
    })
}
