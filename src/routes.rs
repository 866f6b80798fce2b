//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Liveness text
//! - `GET  /health`      - Health check
//! - `/shorturls/*`      - Short URL registry API and redirects
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, applied in [`crate::server`]

use crate::api;
use crate::api::handlers::{health_handler, index_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/shorturls", api::routes::shorturl_routes())
        .with_state(state)
        .layer(tracing::layer())
}
