//! Best-effort geolocation collaborator.
//!
//! Country lookup is a side observation, never a dependency: every
//! implementation degrades to [`UNKNOWN_LOCATION`] instead of erroring or
//! blocking a resolution.

pub mod http_api;

pub use http_api::HttpGeoProvider;

use async_trait::async_trait;

use crate::domain::entities::UNKNOWN_LOCATION;

/// Client details a lookup may use.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub ip: Option<String>,
}

/// Resolves a country name for a request.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Returns a country name, or [`UNKNOWN_LOCATION`] on any failure,
    /// timeout, or missing data. Never errors to the caller.
    async fn country_for(&self, ctx: &RequestContext) -> String;
}

/// Provider used when no geolocation API is configured.
pub struct NullGeo;

#[async_trait]
impl GeoLookup for NullGeo {
    async fn country_for(&self, _ctx: &RequestContext) -> String {
        UNKNOWN_LOCATION.to_string()
    }
}
