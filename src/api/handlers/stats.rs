//! Handler for detailed link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::UrlSummaryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/stats/{code}`
///
/// # Response
///
/// Link metadata, total click count, every recorded click and the remaining
/// validity in seconds.
///
/// # Errors
///
/// - 404 Not Found if the short code doesn't exist
/// - 410 Gone if the link has expired
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<UrlSummaryResponse>, AppError> {
    let summary = state.stats_service.get_stats(&code).await?;

    Ok(Json(UrlSummaryResponse::from_summary(summary, None)))
}
