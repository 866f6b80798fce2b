//! Failure taxonomy of the short-URL registry.

use thiserror::Error;

/// Typed failures returned by registry operations.
///
/// Every variant is recoverable: a failed operation leaves the registry untouched.
/// The HTTP layer maps each kind to a status code in [`crate::error::AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid URL parameter. URL is required and must be a string.")]
    InvalidUrl,

    #[error("Shortcode must be a string between 4-10 characters: {reason}")]
    InvalidShortcode { reason: String },

    #[error("Validity must be a positive number of minutes")]
    InvalidValidity,

    #[error("Shortcode '{code}' already exists. Please choose a different one.")]
    ShortcodeTaken { code: String },

    #[error("Unable to generate unique short code after {attempts} attempts, please try again")]
    CodeGenerationExhausted { attempts: usize },

    #[error("Short URL '{code}' not found")]
    NotFound { code: String },

    #[error("Short URL '{code}' has expired")]
    Gone { code: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    pub fn invalid_shortcode(reason: impl Into<String>) -> Self {
        Self::InvalidShortcode {
            reason: reason.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn gone(code: impl Into<String>) -> Self {
        Self::Gone { code: code.into() }
    }

    /// Stable label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid_url",
            Self::InvalidShortcode { .. } => "invalid_shortcode",
            Self::InvalidValidity => "invalid_validity",
            Self::ShortcodeTaken { .. } => "shortcode_taken",
            Self::CodeGenerationExhausted { .. } => "code_generation_exhausted",
            Self::NotFound { .. } => "not_found",
            Self::Gone { .. } => "gone",
            Self::Internal(_) => "internal_error",
        }
    }
}
