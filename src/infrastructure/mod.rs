pub mod geo;
pub mod persistence;
pub mod telemetry;
