//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use std::net::SocketAddr;

use crate::application::services::Resolution;
use crate::error::AppError;
use crate::infrastructure::geo::RequestContext;
use crate::state::AppState;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code against the registry
/// 2. For a live hit, record the click (referrer + best-effort country)
///    before responding — a client that disconnects mid-redirect still counts
/// 3. Return 307 Temporary Redirect to the stored destination
///
/// # Errors
///
/// - 404 if the code was never registered
/// - 410 if the code's validity window has passed
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok());

    let client = RequestContext {
        ip: Some(addr.ip().to_string()),
    };

    match state.resolver.resolve(Some(&code), referrer, &client).await? {
        Resolution::Redirecting { long_url } => Ok(Redirect::temporary(&long_url)),
        Resolution::NotFound => Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        )),
        Resolution::Expired => Err(AppError::gone(
            "Short link has expired",
            json!({ "code": code }),
        )),
    }
}
