//! Domain error taxonomies.
//!
//! Everything here is recoverable by the caller; nothing is fatal to the
//! process. Row errors are collected per submission row and returned together
//! so the caller can surface every issue at once.

use thiserror::Error;

/// Classification of a rejected submission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("long URL is required")]
    MissingUrl,
    #[error("invalid URL format")]
    InvalidUrl,
    #[error("validity must be a positive integer number of minutes")]
    InvalidValidity,
    #[error("shortcode must be alphanumeric (3-16 chars)")]
    InvalidShortcode,
    #[error("shortcode already exists")]
    ShortcodeCollision,
}

impl RowError {
    /// Stable machine-readable identifier for API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingUrl => "missing_url",
            Self::InvalidUrl => "invalid_url",
            Self::InvalidValidity => "invalid_validity",
            Self::InvalidShortcode => "invalid_shortcode",
            Self::ShortcodeCollision => "shortcode_collision",
        }
    }
}

/// Errors surfaced by the registry store and click ledger.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Commit-time uniqueness violation. This is the authoritative collision
    /// check: it also catches races the pipeline's snapshot cannot see.
    #[error("shortcode already exists: {code}")]
    DuplicateShortcode { code: String },

    #[error("storage backend error: {0}")]
    Backend(String),
}
