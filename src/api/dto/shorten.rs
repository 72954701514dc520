//! DTOs for the batch shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten one or more URLs as a single atomic batch.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "at least one row is required"))]
    pub urls: Vec<UrlRow>,
}

/// One submission row. Rows left entirely blank are skipped.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UrlRow {
    /// The URL to shorten. Required unless the whole row is blank.
    #[serde(default)]
    pub url: Option<String>,

    /// Validity window in minutes, as typed (default: 30).
    #[serde(default)]
    pub validity: Option<String>,

    /// Optional custom shortcode (3-16 alphanumeric characters).
    #[serde(default)]
    pub shortcode: Option<String>,
}

/// Response for a committed batch.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub summary: BatchSummary,
    pub items: Vec<CreatedLink>,
}

/// How many rows came in and how many records were created; the difference
/// is rows that were blank and skipped.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub created: usize,
}

/// One created link, in input order.
#[derive(Debug, Serialize)]
pub struct CreatedLink {
    pub long_url: String,
    pub shortcode: String,
    pub short_url: String,
    pub created_at: i64,
    pub expires_at: i64,
}
