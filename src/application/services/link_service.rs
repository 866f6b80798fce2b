//! Short link creation and resolution service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{DIRECT_SOURCE, NewShortUrl, ShortUrl};
use crate::domain::errors::RegistryError;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_code};
use crate::utils::validity::{DEFAULT_VALIDITY_MINUTES, validity_duration};

/// Default number of generation attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Tunables for link creation.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Prefix of every short link, e.g. `http://localhost:5000`.
    pub base_url: String,
    pub default_validity_minutes: f64,
    pub code_length: usize,
    pub max_attempts: usize,
}

impl LinkSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Service for creating and resolving short links.
///
/// Validates input in a fixed order (URL, custom code, code availability,
/// validity) and only touches the repository once everything has passed, so
/// a failed call never leaves a partial record behind.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    clock: Arc<dyn Clock>,
    settings: LinkSettings,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, clock: Arc<dyn Clock>, settings: LinkSettings) -> Self {
        Self {
            link_repository,
            clock,
            settings,
        }
    }

    /// Creates a short link.
    ///
    /// # Code Selection
    ///
    /// - A non-empty `custom_code` is validated and used verbatim
    /// - Otherwise a random code is generated, retrying on collision up to
    ///   `max_attempts` times
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidUrl`] if the URL is empty
    /// - [`RegistryError::InvalidShortcode`] if the custom code breaks the code rules
    /// - [`RegistryError::ShortcodeTaken`] if the custom code is already registered
    /// - [`RegistryError::InvalidValidity`] if the validity is not a positive number
    /// - [`RegistryError::CodeGenerationExhausted`] if every generated code collided
    pub async fn create_short_link(&self, new_link: NewShortUrl) -> Result<ShortUrl, RegistryError> {
        if new_link.url.is_empty() {
            return Err(RegistryError::InvalidUrl);
        }

        let custom_code = new_link.custom_code.filter(|code| !code.is_empty());

        if let Some(code) = &custom_code {
            validate_custom_code(code)?;

            if self.link_repository.exists(code).await? {
                return Err(RegistryError::ShortcodeTaken { code: code.clone() });
            }
        }

        let minutes = new_link
            .validity_minutes
            .unwrap_or(self.settings.default_validity_minutes);
        let validity = validity_duration(minutes)?;

        let created_at = self.clock.now();
        let expires_at = created_at
            .checked_add_signed(validity)
            .ok_or(RegistryError::InvalidValidity)?;

        let link = match custom_code {
            Some(code) => {
                self.link_repository
                    .insert(ShortUrl::new(code, new_link.url, created_at, expires_at))
                    .await?
            }
            None => {
                self.insert_with_generated_code(new_link.url, created_at, expires_at)
                    .await?
            }
        };

        metrics::counter!("shorturls_created_total").increment(1);
        info!(code = %link.code, expires_at = %link.expires_at, "Short URL created");

        Ok(link)
    }

    /// Resolves a code to its original URL and records the click.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is unknown
    /// - [`RegistryError::Gone`] if the link has expired
    ///
    /// No click is recorded on failure.
    pub async fn resolve(&self, code: &str, referer: Option<&str>) -> Result<String, RegistryError> {
        let referer = referer.filter(|r| !r.is_empty());

        match self
            .link_repository
            .record_click(code, referer.map(str::to_string), &self.clock)
            .await
        {
            Ok(url) => {
                metrics::counter!("shorturl_clicks_total").increment(1);
                debug!(code, source = referer.unwrap_or(DIRECT_SOURCE), "Click recorded");
                Ok(url)
            }
            Err(err) => {
                metrics::counter!("shorturl_resolve_failures_total", "reason" => err.kind())
                    .increment(1);
                debug!(code, reason = err.kind(), "Resolve refused");
                Err(err)
            }
        }
    }

    /// Builds the public short link for a code.
    pub fn short_link(&self, code: &str) -> String {
        format!(
            "{}/shorturls/{}",
            self.settings.base_url.trim_end_matches('/'),
            code
        )
    }

    /// Inserts a record under a freshly generated code, retrying on collision.
    async fn insert_with_generated_code(
        &self,
        url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<ShortUrl, RegistryError> {
        let attempts = self.settings.max_attempts;

        for attempt in 1..=attempts {
            let code = generate_code(self.settings.code_length);
            let candidate = ShortUrl::new(code, url.clone(), created_at, expires_at);

            match self.link_repository.insert(candidate).await {
                Ok(link) => return Ok(link),
                Err(RegistryError::ShortcodeTaken { code }) => {
                    debug!(code = %code, attempt, "Generated code collided, retrying");
                }
                Err(err) => return Err(err),
            }
        }

        warn!(attempts, "Failed to generate a unique short code");
        Err(RegistryError::CodeGenerationExhausted { attempts })
    }
}
