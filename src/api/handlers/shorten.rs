//! Handler for the batch shorten endpoint.

use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::shorten::{
    BatchSummary, CreatedLink, ShortenRequest, ShortenResponse, UrlRow,
};
use crate::application::services::SubmissionRow;
use crate::error::AppError;
use crate::state::AppState;

/// Creates shortened URLs for one or more long URLs.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Batch Semantics
///
/// The batch is all-or-nothing: if any row fails validation, no row is
/// committed and the 400 response details carry one classification per
/// failing row (indexed against the request order). Blank rows are skipped.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     {
///       "url": "https://example.com",
///       "validity": "45",        // optional, minutes, default 30
///       "shortcode": "mylink"    // optional, 3-16 alphanumeric chars
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 with per-row details when validation fails
/// - 409 when a shortcode is taken at commit time
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let total = payload.urls.len();
    let rows: Vec<SubmissionRow> = payload.urls.into_iter().map(to_row).collect();

    let records = state.pipeline.submit(rows).await?;

    let items: Vec<CreatedLink> = records
        .into_iter()
        .map(|record| CreatedLink {
            short_url: state.short_url(&record.shortcode),
            long_url: record.long_url,
            shortcode: record.shortcode,
            created_at: record.created_at,
            expires_at: record.expires_at,
        })
        .collect();

    Ok(Json(ShortenResponse {
        summary: BatchSummary {
            total,
            created: items.len(),
        },
        items,
    }))
}

fn to_row(row: UrlRow) -> SubmissionRow {
    SubmissionRow {
        long_url: row.url,
        validity: row.validity,
        shortcode: row.shortcode,
    }
}
