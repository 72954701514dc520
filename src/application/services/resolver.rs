//! Redirect resolution: lookup, expiry check, click recording, hand-off.

use std::sync::Arc;

use metrics::counter;

use crate::domain::entities::{ClickEvent, DIRECT_SOURCE};
use crate::domain::errors::StoreError;
use crate::domain::stores::{ClickLedger, LinkRegistry};
use crate::infrastructure::geo::{GeoLookup, RequestContext};
use crate::infrastructure::telemetry::{TelemetryLevel, TelemetrySink, TelemetryStack};
use crate::utils::clock::Clock;

/// Terminal outcome of one resolution attempt.
///
/// `NotFound` and `Expired` are states of the registry, not faults; they are
/// terminal for this attempt only and the caller may retry with another code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Expired,
    /// Hand the destination to the caller for navigation. The click has
    /// already been recorded by the time this value exists, so an abandoned
    /// hand-off (or any settling delay the presentation layer inserts) cannot
    /// lose it.
    Redirecting { long_url: String },
}

/// Resolves shortcodes to destinations and records clicks.
pub struct RedirectResolver {
    registry: Arc<dyn LinkRegistry>,
    ledger: Arc<dyn ClickLedger>,
    geo: Arc<dyn GeoLookup>,
    clock: Arc<dyn Clock>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl RedirectResolver {
    pub fn new(
        registry: Arc<dyn LinkRegistry>,
        ledger: Arc<dyn ClickLedger>,
        geo: Arc<dyn GeoLookup>,
        clock: Arc<dyn Clock>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            registry,
            ledger,
            geo,
            clock,
            telemetry,
        }
    }

    /// Resolves one code.
    ///
    /// A live hit appends exactly one [`ClickEvent`] — `source` from the
    /// referrer (or `"Direct"`), `location` from the best-effort country
    /// lookup — before the destination is returned. Expired and unknown codes
    /// record nothing, no matter how often they are retried.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only for storage faults; missing and expired
    /// codes are outcomes, not errors.
    pub async fn resolve(
        &self,
        code: Option<&str>,
        referrer: Option<&str>,
        client: &RequestContext,
    ) -> Result<Resolution, StoreError> {
        let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
            self.outcome("not_found", TelemetryLevel::Error, "no shortcode supplied");
            return Ok(Resolution::NotFound);
        };

        let Some(record) = self.registry.get(code).await? else {
            self.outcome(
                "not_found",
                TelemetryLevel::Error,
                &format!("shortcode not found: {code}"),
            );
            return Ok(Resolution::NotFound);
        };

        if record.is_expired(self.clock.now_ms()) {
            self.outcome(
                "expired",
                TelemetryLevel::Warn,
                &format!("shortcode expired: {code}"),
            );
            return Ok(Resolution::Expired);
        }

        let location = self.geo.country_for(client).await;

        let source = referrer
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DIRECT_SOURCE);

        self.ledger
            .append(ClickEvent {
                shortcode: code.to_string(),
                timestamp: self.clock.now_ms(),
                source: source.to_string(),
                location,
            })
            .await?;

        self.outcome(
            "redirected",
            TelemetryLevel::Info,
            &format!("redirected: {code}"),
        );

        Ok(Resolution::Redirecting {
            long_url: record.long_url,
        })
    }

    fn outcome(&self, outcome: &'static str, level: TelemetryLevel, message: &str) {
        counter!("rocketlink_resolutions_total", "outcome" => outcome).increment(1);
        self.telemetry
            .emit(TelemetryStack::Backend, level, "resolver", message);
    }
}
