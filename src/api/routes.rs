//! Short URL route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler, stats_handler, stats_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Registry routes, nested under `/shorturls` by the top-level router.
///
/// # Endpoints
///
/// - `POST /`              - Create a short link
/// - `GET  /allurls`       - List all links with aggregate counts
/// - `GET  /stats/{code}`  - Statistics for one active link
/// - `GET  /{code}`        - Redirect to the original URL
///
/// The static `/allurls` segment takes precedence over `/{code}`, so `allurls`
/// is a reserved code. `/stats/{code}` has two segments and never shadows a
/// code, including `stats` itself.
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/allurls", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
}
