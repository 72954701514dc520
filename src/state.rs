//! Shared application state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::services::{RedirectResolver, StatsService, SubmissionPipeline};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SubmissionPipeline>,
    pub resolver: Arc<RedirectResolver>,
    pub stats: Arc<StatsService>,
    /// Prefix for the short URLs handed back to callers.
    pub base_url: String,
    /// Name of the persistence backend, reported by the health endpoint.
    pub backend: &'static str,
}

impl AppState {
    /// Builds the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
