//! In-memory implementation of the link repository.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, ShortUrl};
use crate::domain::errors::RegistryError;
use crate::domain::repositories::LinkRepository;

/// A stored record plus its insertion sequence number.
#[derive(Debug)]
struct Entry {
    seq: u64,
    link: ShortUrl,
}

#[derive(Debug, Default)]
struct Registry {
    links: HashMap<String, Entry>,
    next_seq: u64,
}

/// Process-memory registry guarded by a single read-write lock.
///
/// Insertions and click recording take the write lock, so the uniqueness check
/// and the insert happen as one step and concurrent resolves never lose a click.
/// Readers clone records under the read lock, which keeps the click count and
/// the click list of a snapshot consistent. The lock is never held across an
/// `.await`.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Registry>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: ShortUrl) -> Result<ShortUrl, RegistryError> {
        let mut registry = self.inner.write();

        if registry.links.contains_key(&link.code) {
            return Err(RegistryError::ShortcodeTaken { code: link.code });
        }

        let seq = registry.next_seq;
        registry.next_seq += 1;
        registry.links.insert(
            link.code.clone(),
            Entry {
                seq,
                link: link.clone(),
            },
        );

        debug!(code = %link.code, seq, "Inserted short URL");
        Ok(link)
    }

    async fn exists(&self, code: &str) -> Result<bool, RegistryError> {
        Ok(self.inner.read().links.contains_key(code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, RegistryError> {
        Ok(self
            .inner
            .read()
            .links
            .get(code)
            .map(|entry| entry.link.clone()))
    }

    async fn list(&self) -> Result<Vec<ShortUrl>, RegistryError> {
        let registry = self.inner.read();

        let mut entries: Vec<&Entry> = registry.links.values().collect();
        entries.sort_by_key(|entry| entry.seq);

        Ok(entries.into_iter().map(|entry| entry.link.clone()).collect())
    }

    async fn count(&self) -> Result<usize, RegistryError> {
        Ok(self.inner.read().links.len())
    }

    async fn record_click(
        &self,
        code: &str,
        referer: Option<String>,
        clock: &Arc<dyn Clock>,
    ) -> Result<String, RegistryError> {
        let mut registry = self.inner.write();

        let entry = registry
            .links
            .get_mut(code)
            .ok_or_else(|| RegistryError::not_found(code))?;

        let click = Click::new(clock.now(), referer.as_deref());
        if entry.link.is_expired_at(click.clicked_at) {
            return Err(RegistryError::gone(code));
        }

        entry.link.clicks.push(click);
        Ok(entry.link.original_url.clone())
    }
}
