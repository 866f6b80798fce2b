//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by command
//! line flags, and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:5000"
//! export BASE_URL="https://sho.rt"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `BASE_URL` - Prefix of generated short links (default: `http://localhost:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when a request omits it (default: 30)
//! - `CODE_LENGTH` - Length of generated codes, 4-10 (default: 6)
//! - `CODE_MAX_ATTEMPTS` - Generation attempts before giving up (default: 10)

use anyhow::Result;
use std::env;

use crate::application::services::LinkSettings;
use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH};
use crate::utils::validity::DEFAULT_VALIDITY_MINUTES;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Scheme and host used to build `{base_url}/shorturls/{code}`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: f64,
    pub code_length: usize,
    pub code_max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            base_url: "http://localhost:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            code_length: DEFAULT_CODE_LENGTH,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults; range
    /// checks happen in [`Config::validate`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            default_validity_minutes: parse_var("DEFAULT_VALIDITY_MINUTES")
                .unwrap_or(defaults.default_validity_minutes),
            code_length: parse_var("CODE_LENGTH").unwrap_or(defaults.code_length),
            code_max_attempts: parse_var("CODE_MAX_ATTEMPTS").unwrap_or(defaults.code_max_attempts),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `default_validity_minutes` is not positive
    /// - `code_length` is outside 4-10
    /// - `code_max_attempts` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.default_validity_minutes.is_finite() || self.default_validity_minutes <= 0.0 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be a positive number, got {}",
                self.default_validity_minutes
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.code_max_attempts == 0 {
            anyhow::bail!("CODE_MAX_ATTEMPTS must be at least 1");
        }

        Ok(())
    }

    /// Link creation settings derived from this configuration.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            default_validity_minutes: self.default_validity_minutes,
            code_length: self.code_length,
            max_attempts: self.code_max_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!(
            "  Generated codes: {} chars, {} attempts",
            self.code_length,
            self.code_max_attempts
        );
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:5000".to_string();

        config.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://sho.rt".to_string();

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.default_validity_minutes = 0.0;
        assert!(config.validate().is_err());
        config.default_validity_minutes = 5.0;

        config.code_length = 3;
        assert!(config.validate().is_err());
        config.code_length = 11;
        assert!(config.validate().is_err());
        config.code_length = 8;

        config.code_max_attempts = 0;
        assert!(config.validate().is_err());
        config.code_max_attempts = 3;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_link_settings_trims_trailing_slash() {
        let config = Config {
            base_url: "https://sho.rt/".to_string(),
            ..Config::default()
        };

        let settings = config.link_settings();

        assert_eq!(settings.base_url, "https://sho.rt");
        assert_eq!(settings.code_length, DEFAULT_CODE_LENGTH);
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "15");
            env::set_var("CODE_LENGTH", "8");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.default_validity_minutes, 15.0);
        assert_eq!(config.code_length, 8);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
            env::remove_var("CODE_LENGTH");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparsable_numbers() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CODE_MAX_ATTEMPTS", "many");
        }

        let config = Config::from_env();
        assert_eq!(config.code_max_attempts, DEFAULT_MAX_ATTEMPTS);

        unsafe {
            env::remove_var("CODE_MAX_ATTEMPTS");
        }
    }
}
