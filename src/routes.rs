//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{code}` - Short link redirect (public)
//! - `/api/*`      - REST API (shorten, stats, health)
//!
//! Every request is traced via `tower-http`.

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
