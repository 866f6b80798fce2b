//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, LinkSettings, StatsService};
use crate::domain::clock::Clock;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Handles to the registry services.
///
/// Both services share one [`InMemoryLinkRepository`] and one clock; cloning
/// the state only clones the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
}

impl AppState {
    /// Builds the services over a shared repository and clock.
    pub fn new(
        repository: Arc<InMemoryLinkRepository>,
        clock: Arc<dyn Clock>,
        settings: LinkSettings,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(
                repository.clone(),
                clock.clone(),
                settings,
            )),
            stats_service: Arc::new(StatsService::new(repository, clock)),
        }
    }
}
