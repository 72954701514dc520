#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::routing::get;
use axum::Router;
use tower::Layer;

use rocketlink::api::handlers::redirect_handler;
use rocketlink::application::services::{RedirectResolver, StatsService, SubmissionPipeline};
use rocketlink::domain::entities::{ClickEvent, LinkRecord};
use rocketlink::domain::stores::{ClickLedger, LinkRegistry};
use rocketlink::infrastructure::geo::NullGeo;
use rocketlink::infrastructure::persistence::MemoryStore;
use rocketlink::infrastructure::telemetry::NullSink;
use rocketlink::state::AppState;
use rocketlink::utils::clock::ManualClock;

/// Fixed test epoch so expiry arithmetic is exact.
pub const NOW_MS: i64 = 1_700_000_000_000;

pub fn create_test_state() -> (AppState, Arc<MemoryStore>, Arc<ManualClock>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let telemetry = Arc::new(NullSink);

    let pipeline = Arc::new(SubmissionPipeline::new(
        store.clone(),
        clock.clone(),
        telemetry.clone(),
    ));
    let resolver = Arc::new(RedirectResolver::new(
        store.clone(),
        store.clone(),
        Arc::new(NullGeo),
        clock.clone(),
        telemetry,
    ));
    let stats = Arc::new(StatsService::new(store.clone(), store.clone(), clock.clone()));

    let state = AppState {
        pipeline,
        resolver,
        stats,
        base_url: "http://localhost:3000".to_string(),
        backend: "memory",
    };

    (state, store, clock)
}

/// Full application router with a fake peer address injected, since
/// `TestServer` requests never carry real `ConnectInfo`.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", rocketlink::api::routes::api_routes())
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

pub async fn seed_link(
    store: &MemoryStore,
    code: &str,
    url: &str,
    created_at: i64,
    expires_at: i64,
) {
    store
        .insert_all(vec![LinkRecord {
            long_url: url.to_string(),
            shortcode: code.to_string(),
            created_at,
            expires_at,
        }])
        .await
        .unwrap();
}

pub async fn seed_click(store: &MemoryStore, code: &str, timestamp: i64) {
    store
        .append(ClickEvent {
            shortcode: code.to_string(),
            timestamp,
            source: "Direct".to_string(),
            location: "Unknown".to_string(),
        })
        .await
        .unwrap();
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
