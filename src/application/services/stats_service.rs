//! Link listing and statistics service.

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::clock::Clock;
use crate::domain::entities::ShortUrl;
use crate::domain::errors::RegistryError;
use crate::domain::repositories::LinkRepository;

/// A record snapshot together with its expiry status at query time.
#[derive(Debug, Clone)]
pub struct UrlSummary {
    pub link: ShortUrl,
    pub is_expired: bool,
    /// Seconds until expiry, `0` once expired.
    pub time_remaining: i64,
}

impl UrlSummary {
    fn at(link: ShortUrl, now: DateTime<Utc>) -> Self {
        Self {
            is_expired: link.is_expired_at(now),
            time_remaining: link.time_remaining_at(now),
            link,
        }
    }
}

/// All records, newest first, with aggregate counts.
#[derive(Debug, Clone)]
pub struct UrlListing {
    pub items: Vec<UrlSummary>,
    pub total: usize,
    pub active: usize,
    pub expired: usize,
}

/// Service for listing links and reading per-link statistics.
///
/// Expiry is evaluated against the clock on every call; expired records stay
/// in the registry and keep showing up in listings.
pub struct StatsService<L: LinkRepository> {
    repository: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<L: LinkRepository> StatsService<L> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Lists every record sorted by creation time, newest first.
    ///
    /// Records created within the same second are ordered by insertion,
    /// latest first.
    pub async fn list_all(&self) -> Result<UrlListing, RegistryError> {
        let now = self.clock.now();

        let mut links = self.repository.list().await?;
        links.reverse();
        links.sort_by_key(|link| Reverse(link.created_at));

        let items: Vec<UrlSummary> = links
            .into_iter()
            .map(|link| UrlSummary::at(link, now))
            .collect();

        let expired = items.iter().filter(|item| item.is_expired).count();

        Ok(UrlListing {
            total: items.len(),
            active: items.len() - expired,
            expired,
            items,
        })
    }

    /// Retrieves statistics for a single active link.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is unknown
    /// - [`RegistryError::Gone`] if the link has expired
    pub async fn get_stats(&self, code: &str) -> Result<UrlSummary, RegistryError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| RegistryError::not_found(code))?;

        let summary = UrlSummary::at(link, self.clock.now());
        if summary.is_expired {
            return Err(RegistryError::gone(code));
        }

        Ok(summary)
    }

    /// Counts all stored links, expired ones included.
    pub async fn count_links(&self) -> Result<usize, RegistryError> {
        self.repository.count().await
    }
}
