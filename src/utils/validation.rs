//! Submission-row validation.
//!
//! Pure, total functions: malformed input never panics, it comes back as a
//! [`RowError`] classification the pipeline collects per row.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::errors::RowError;

/// Validity window applied when a row leaves the field blank.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Compiled regex for shortcode validation.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,16}$").unwrap());

/// Checks that `raw` parses as an absolute URL with both a scheme and a host.
///
/// Scheme-relative input (`example.com`) and host-less schemes
/// (`mailto:x@y.z`) are rejected.
pub fn validate_url(raw: &str) -> Result<(), RowError> {
    let parsed = Url::parse(raw).map_err(|_| RowError::InvalidUrl)?;

    if parsed.host_str().is_none() {
        return Err(RowError::InvalidUrl);
    }

    Ok(())
}

/// Checks that `code` is 3-16 alphanumeric characters.
pub fn validate_shortcode(code: &str) -> Result<(), RowError> {
    if SHORTCODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(RowError::InvalidShortcode)
    }
}

/// Parses a validity string into a number of minutes.
///
/// Empty input falls back to [`DEFAULT_VALIDITY_MINUTES`]. Anything other
/// than a plain unsigned decimal integer is rejected. Zero is rejected too:
/// a record must expire strictly after it is created.
pub fn validate_validity(raw: &str) -> Result<i64, RowError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(DEFAULT_VALIDITY_MINUTES);
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RowError::InvalidValidity);
    }

    let minutes: i64 = trimmed.parse().map_err(|_| RowError::InvalidValidity)?;

    if minutes == 0 {
        return Err(RowError::InvalidValidity);
    }

    Ok(minutes)
}
