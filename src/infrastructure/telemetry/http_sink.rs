//! HTTP telemetry sink.

use std::time::Duration;

use serde::Serialize;
use tracing::trace;
use ureq::Agent;

use super::{TelemetryLevel, TelemetrySink, TelemetryStack};

const HTTP_TIMEOUT_SECS: u64 = 2;

#[derive(Serialize)]
struct LogPayload {
    stack: TelemetryStack,
    level: TelemetryLevel,
    package: String,
    message: String,
}

/// Posts one JSON payload per line to a remote collector.
///
/// Delivery happens on the blocking pool and the result is discarded; a
/// collector outage costs nothing but the dropped line.
pub struct HttpTelemetrySink {
    url: String,
    agent: Agent,
}

impl HttpTelemetrySink {
    pub fn new(url: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            .build()
            .into();

        Self {
            url: url.to_string(),
            agent,
        }
    }
}

impl TelemetrySink for HttpTelemetrySink {
    fn emit(&self, stack: TelemetryStack, level: TelemetryLevel, category: &str, message: &str) {
        let payload = LogPayload {
            stack,
            level,
            package: category.to_string(),
            message: message.to_string(),
        };

        let url = self.url.clone();
        let agent = self.agent.clone();

        tokio::task::spawn_blocking(move || {
            if agent.post(&url).send_json(&payload).is_err() {
                trace!("telemetry line dropped");
            }
        });
    }
}
