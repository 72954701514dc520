//! Handler for aggregate statistics.

use axum::{extract::State, Json};

use crate::api::dto::stats::{LinkStatsDto, StatsListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate statistics for every link.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// Links come back in insertion order with per-link click totals; the
/// summary carries overall counts, active/expired tallies, and the average
/// clicks per link.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsListResponse>, AppError> {
    let (summary, overviews) = state.stats.list_links_with_stats().await?;

    Ok(Json(StatsListResponse {
        summary: summary.into(),
        links: overviews.into_iter().map(LinkStatsDto::from).collect(),
    }))
}
