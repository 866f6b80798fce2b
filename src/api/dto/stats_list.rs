//! DTOs for the link listing.

use serde::Serialize;

use super::stats::UrlSummaryResponse;

/// All links, newest first, with aggregate counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListResponse {
    pub urls: Vec<UrlSummaryResponse>,
    pub total_urls: usize,
    pub active_urls: usize,
    pub expired_urls: usize,
}
