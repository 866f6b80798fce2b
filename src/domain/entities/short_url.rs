//! Short URL entity: one registry record per short code.

use chrono::{DateTime, Utc};

use super::click::Click;

/// A shortened URL together with its click history.
///
/// `created_at` and `expires_at` are fixed at creation. The click count is
/// derived from `clicks`, so it always equals the number of recorded events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: Vec<Click>,
}

impl ShortUrl {
    /// Creates a record with no clicks.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            clicks: Vec::new(),
        }
    }

    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }

    /// Returns true once `now` is strictly past the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Seconds left until expiry, never negative.
    pub fn time_remaining_at(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

/// Input for creating a short URL.
///
/// `validity_minutes` and `custom_code` fall back to the configured default
/// and a generated code when `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortUrl {
    pub url: String,
    pub validity_minutes: Option<f64>,
    pub custom_code: Option<String>,
}

impl NewShortUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            validity_minutes: None,
            custom_code: None,
        }
    }

    pub fn with_validity(mut self, minutes: f64) -> Self {
        self.validity_minutes = Some(minutes);
        self
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }
}
