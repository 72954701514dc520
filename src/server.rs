//! HTTP server initialization and runtime setup.
//!
//! Wires the configured persistence backend, the external collaborators
//! (geolocation, telemetry), and the application services into the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{RedirectResolver, StatsService, SubmissionPipeline};
use crate::config::Config;
use crate::domain::stores::{ClickLedger, LinkRegistry};
use crate::infrastructure::geo::{GeoLookup, HttpGeoProvider, NullGeo};
use crate::infrastructure::persistence::{MemoryStore, SqliteStore};
use crate::infrastructure::telemetry::{HttpTelemetrySink, NullSink, TelemetrySink};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::clock::SystemClock;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Persistence backend (in-memory, or SQLite when `DATABASE_URL` is set)
/// - Geolocation and telemetry collaborators (no-op unless configured)
/// - Application services and the Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the listen address is
/// invalid, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let (registry, ledger, backend): (Arc<dyn LinkRegistry>, Arc<dyn ClickLedger>, &'static str) =
        match &config.database_url {
            Some(url) => {
                let store = Arc::new(SqliteStore::connect(url).await?);
                tracing::info!("Storage: SQLite ({url})");
                (store.clone(), store, "sqlite")
            }
            None => {
                let store = Arc::new(MemoryStore::new());
                tracing::info!("Storage: in-memory");
                (store.clone(), store, "memory")
            }
        };

    let geo: Arc<dyn GeoLookup> = match &config.geoip_api_url {
        Some(url) => {
            tracing::info!("GeoIP: external API enabled");
            Arc::new(HttpGeoProvider::new(url, config.geoip_timeout_ms))
        }
        None => Arc::new(NullGeo),
    };

    let telemetry: Arc<dyn TelemetrySink> = match &config.telemetry_url {
        Some(url) => {
            tracing::info!("Telemetry: remote sink enabled");
            Arc::new(HttpTelemetrySink::new(url))
        }
        None => Arc::new(NullSink),
    };

    let clock = Arc::new(SystemClock);

    let pipeline = Arc::new(SubmissionPipeline::new(
        registry.clone(),
        clock.clone(),
        telemetry.clone(),
    ));
    let resolver = Arc::new(RedirectResolver::new(
        registry.clone(),
        ledger.clone(),
        geo,
        clock.clone(),
        telemetry,
    ));
    let stats = Arc::new(StatsService::new(registry, ledger, clock));

    let state = AppState {
        pipeline,
        resolver,
        stats,
        base_url: config.base_url.clone(),
        backend,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
