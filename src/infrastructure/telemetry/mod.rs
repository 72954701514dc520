//! Fire-and-forget telemetry collaborator.
//!
//! The pipeline and resolver emit one line per notable event (row rejected,
//! batch committed, resolution outcome). Emission is best-effort by contract:
//! no implementation may fail, block, or surface an error into the calling
//! flow.

pub mod http_sink;

pub use http_sink::HttpTelemetrySink;

use serde::Serialize;

/// Which half of the system produced the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryStack {
    Frontend,
    Backend,
}

/// Severity of a telemetry line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Best-effort event sink.
pub trait TelemetrySink: Send + Sync {
    /// Emits one line. Implementations swallow every failure.
    fn emit(&self, stack: TelemetryStack, level: TelemetryLevel, category: &str, message: &str);
}

/// Sink used when no telemetry endpoint is configured.
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn emit(&self, _: TelemetryStack, _: TelemetryLevel, _: &str, _: &str) {}
}
