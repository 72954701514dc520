//! Handler for per-link statistics.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;

use crate::api::dto::stats::StatsDetailResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns detailed statistics for one short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Expired links report normally: expiry disables redirection, not
/// analytics. Clicks come back in insertion order.
///
/// # Errors
///
/// Returns 404 if the code was never registered.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsDetailResponse>, AppError> {
    let details = state.stats.stats_for(&code).await?.ok_or_else(|| {
        AppError::not_found("Short link not found", json!({ "code": code }))
    })?;

    Ok(Json(details.into()))
}
