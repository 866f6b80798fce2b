//! Repository trait for short URL records.

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::entities::ShortUrl;
use crate::domain::errors::RegistryError;
use async_trait::async_trait;

/// Storage contract for the short-URL registry.
///
/// Implementations must make [`insert`](LinkRepository::insert) and
/// [`record_click`](LinkRepository::record_click) atomic with respect to each
/// other and to concurrent readers. Reads return owned snapshots.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new record keyed by its code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ShortcodeTaken`] if the code is already present.
    /// The existing record is left unchanged.
    async fn insert(&self, link: ShortUrl) -> Result<ShortUrl, RegistryError>;

    /// Returns true if a record with this code exists.
    async fn exists(&self, code: &str) -> Result<bool, RegistryError>;

    /// Returns a snapshot of the record, or `None` if the code is unknown.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, RegistryError>;

    /// Returns snapshots of all records in insertion order.
    async fn list(&self) -> Result<Vec<ShortUrl>, RegistryError>;

    /// Number of stored records, expired ones included.
    async fn count(&self) -> Result<usize, RegistryError>;

    /// Appends a click to the record and returns its original URL.
    ///
    /// The click time is read from `clock` while the record is locked, so
    /// clicks are stored in timestamp order and expiry is checked against
    /// the same instant.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is unknown
    /// - [`RegistryError::Gone`] if the record has expired; no click is
    ///   recorded in that case
    async fn record_click(
        &self,
        code: &str,
        referer: Option<String>,
        clock: &Arc<dyn Clock>,
    ) -> Result<String, RegistryError>;
}
