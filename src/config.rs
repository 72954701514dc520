//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://localhost:3000`)
//! - `DATABASE_URL` - SQLite database, e.g. `sqlite://rocketlink.db?mode=rwc`.
//!   When unset, links live in memory and are lost on restart.
//! - `GEOIP_API_URL` - Geolocation API template with an `{ip}` placeholder,
//!   e.g. `http://ip-api.com/json/{ip}?fields=status,country`. When unset,
//!   click locations are recorded as `Unknown`.
//! - `GEOIP_TIMEOUT_MS` - Upper bound for one lookup (default: 2000)
//! - `TELEMETRY_URL` - Remote collector for fire-and-forget event lines.
//!   When unset, lines are dropped.
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub database_url: Option<String>,
    pub geoip_api_url: Option<String>,
    pub geoip_timeout_ms: u64,
    pub telemetry_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let database_url = env::var("DATABASE_URL").ok();
        let geoip_api_url = env::var("GEOIP_API_URL").ok();
        let telemetry_url = env::var("TELEMETRY_URL").ok();

        let geoip_timeout_ms = env::var("GEOIP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2_000);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            base_url,
            database_url,
            geoip_api_url,
            geoip_timeout_ms,
            telemetry_url,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `DATABASE_URL` is set but not a `sqlite:` URL
    /// - `GEOIP_API_URL` is set but missing its `{ip}` placeholder
    /// - `GEOIP_TIMEOUT_MS` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref url) = self.database_url {
            if !url.starts_with("sqlite:") {
                anyhow::bail!("DATABASE_URL must start with 'sqlite:', got '{}'", url);
            }
        }

        if let Some(ref url) = self.geoip_api_url {
            if !url.contains("{ip}") {
                anyhow::bail!("GEOIP_API_URL must contain an '{{ip}}' placeholder, got '{}'", url);
            }
        }

        if self.geoip_timeout_ms == 0 {
            anyhow::bail!("GEOIP_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);

        match self.database_url {
            Some(ref url) => tracing::info!("  Storage: {url}"),
            None => tracing::info!("  Storage: in-memory"),
        }

        match self.geoip_api_url {
            Some(ref url) => tracing::info!(
                "  GeoIP: {url} (timeout {}ms)",
                self.geoip_timeout_ms
            ),
            None => tracing::info!("  GeoIP: disabled"),
        }

        match self.telemetry_url {
            Some(ref url) => tracing::info!("  Telemetry: {url}"),
            None => tracing::info!("  Telemetry: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
