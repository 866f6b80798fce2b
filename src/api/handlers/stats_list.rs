//! Handler for the link listing.

use axum::{Json, extract::State};

use crate::api::dto::stats::UrlSummaryResponse;
use crate::api::dto::stats_list::UrlListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short link, newest first.
///
/// # Endpoint
///
/// `GET /shorturls/allurls`
///
/// # Response
///
/// ```json
/// {
///   "urls": [ { "shortcode": "abcd", "shortLink": "...", "isExpired": false, ... } ],
///   "totalUrls": 1,
///   "activeUrls": 1,
///   "expiredUrls": 0
/// }
/// ```
///
/// Expired links are included and flagged with `isExpired`.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<UrlListResponse>, AppError> {
    let listing = state.stats_service.list_all().await?;

    let urls = listing
        .items
        .into_iter()
        .map(|summary| {
            let short_link = state.link_service.short_link(&summary.link.code);
            UrlSummaryResponse::from_summary(summary, Some(short_link))
        })
        .collect();

    Ok(Json(UrlListResponse {
        urls,
        total_urls: listing.total,
        active_urls: listing.active,
        expired_urls: listing.expired,
    }))
}
