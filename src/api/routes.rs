//! API route configuration.

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{health_handler, shorten_handler, stats_handler, stats_list_handler};
use crate::state::AppState;

/// REST API routes.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create shortened URLs (atomic batch)
/// - `GET  /stats`        - Aggregated click statistics
/// - `GET  /stats/{code}` - Detailed statistics for a specific link
/// - `GET  /health`       - Liveness and backend info
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
}
