//! Click entity representing a single resolution of a short code.

use chrono::{DateTime, Utc};

/// Source recorded when the request carries no `Referer` header.
pub const DIRECT_SOURCE: &str = "Direct";

/// Location recorded for every click; no geolocation is performed.
pub const WEB_LOCATION: &str = "Web";

/// A click recorded when a short link is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl Click {
    /// Creates a click at `clicked_at`.
    ///
    /// A missing or empty referer is recorded as [`DIRECT_SOURCE`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = Click::new(Utc::now(), Some("https://google.com"));
    /// assert_eq!(click.source, "https://google.com");
    /// assert_eq!(click.location, "Web");
    /// ```
    pub fn new(clicked_at: DateTime<Utc>, referer: Option<&str>) -> Self {
        let source = referer
            .filter(|r| !r.is_empty())
            .unwrap_or(DIRECT_SOURCE)
            .to_string();

        Self {
            clicked_at,
            source,
            location: WEB_LOCATION.to_string(),
        }
    }
}
