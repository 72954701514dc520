//! External HTTP GeoIP provider.
//!
//! Queries a JSON geolocation API (ip-api.com, ipapi.co, and similar) with
//! the client IP substituted into a `{ip}` URL template.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;
use ureq::Agent;

use super::{GeoLookup, RequestContext};
use crate::domain::entities::UNKNOWN_LOCATION;

/// GeoIP provider backed by an external HTTP API.
pub struct HttpGeoProvider {
    url_template: String,
    agent: Agent,
    timeout: Duration,
}

impl HttpGeoProvider {
    /// Creates a provider for a URL template with an `{ip}` placeholder,
    /// e.g. `http://ip-api.com/json/{ip}?fields=status,country`.
    ///
    /// `timeout_ms` bounds both the HTTP round trip and the overall lookup.
    pub fn new(url_template: &str, timeout_ms: u64) -> Self {
        let timeout = Duration::from_millis(timeout_ms);
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            url_template: url_template.to_string(),
            agent,
            timeout,
        }
    }

    /// Synchronous fetch, run on the blocking pool.
    fn fetch_sync(agent: &Agent, url: &str) -> Option<String> {
        let resp = match agent.get(url).call() {
            Ok(r) => r,
            Err(e) => {
                warn!("GeoIP request to {url} failed: {e}");
                return None;
            }
        };

        let json: serde_json::Value = match resp.into_body().read_json() {
            Ok(j) => j,
            Err(e) => {
                warn!("GeoIP response from {url} parse failed: {e}");
                return None;
            }
        };

        // ip-api.com reports errors as {"status": "fail", ...}
        if json["status"].as_str() == Some("fail") {
            return None;
        }

        json["country_name"]
            .as_str()
            .or_else(|| json["country"].as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
    }
}

#[async_trait]
impl GeoLookup for HttpGeoProvider {
    async fn country_for(&self, ctx: &RequestContext) -> String {
        let Some(ip) = ctx.ip.as_deref() else {
            return UNKNOWN_LOCATION.to_string();
        };

        let url = self.url_template.replace("{ip}", ip);
        let agent = self.agent.clone();

        let lookup = tokio::task::spawn_blocking(move || Self::fetch_sync(&agent, &url));

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(Some(country))) => country,
            _ => UNKNOWN_LOCATION.to_string(),
        }
    }
}
