//! DTOs for click event data.

use serde::Serialize;

use crate::domain::entities::Click;

/// Individual click event information.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub source: String,
    pub location: String,
}

impl From<&Click> for ClickInfo {
    fn from(click: &Click) -> Self {
        Self {
            timestamp: click.clicked_at.timestamp(),
            source: click.source.clone(),
            location: click.location.clone(),
        }
    }
}
