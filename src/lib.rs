//! # Rocketlink
//!
//! A batch-capable URL shortening service with expiring links and click
//! analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and store traits
//! - **Application Layer** ([`application`]) - Submission pipeline, redirect
//!   resolution, and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - Persistence backends and
//!   external collaborators (geolocation, telemetry)
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and routes
//!
//! ## Features
//!
//! - Batch link creation with all-or-nothing commit semantics
//! - Custom or randomly generated short codes with collision avoidance
//! - Per-link validity windows; expired links stay queryable for analytics
//! - Append-only click ledger with referrer and best-effort country capture
//! - Pluggable persistence: in-memory by default, SQLite when configured
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: persist links across restarts
//! export DATABASE_URL="sqlite://rocketlink.db?mode=rwc"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        RedirectResolver, Resolution, StatsService, SubmissionPipeline, SubmissionRow,
    };
    pub use crate::domain::entities::{ClickEvent, LinkRecord};
    pub use crate::domain::stores::{ClickLedger, LinkRegistry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::clock::{Clock, ManualClock, SystemClock};
}
