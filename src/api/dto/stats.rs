//! DTOs for per-link statistics.

use serde::Serialize;

use super::clicks::ClickInfo;
use super::to_iso_string;
use crate::application::services::UrlSummary;

/// Statistics for a single short link.
///
/// `shortLink` is only present in listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlSummaryResponse {
    pub shortcode: String,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_link: Option<String>,
    pub created_at: String,
    pub expiry_date: String,
    pub total_clicks: usize,
    pub click_data: Vec<ClickInfo>,
    pub is_expired: bool,
    /// Seconds until expiry.
    pub time_remaining: i64,
}

impl UrlSummaryResponse {
    pub fn from_summary(summary: UrlSummary, short_link: Option<String>) -> Self {
        let link = summary.link;

        Self {
            total_clicks: link.click_count(),
            click_data: link.clicks.iter().map(ClickInfo::from).collect(),
            created_at: to_iso_string(link.created_at),
            expiry_date: to_iso_string(link.expires_at),
            shortcode: link.code,
            original_url: link.original_url,
            short_link,
            is_expired: summary.is_expired,
            time_remaining: summary.time_remaining,
        }
    }
}
