//! Core domain entities.
//!
//! - [`ShortUrl`] - A short code mapped to its target URL and click history
//! - [`Click`] - A single resolution of a short code
//!
//! `NewShortUrl` carries creation input; records are never updated except by
//! appending clicks.

pub mod click;
pub mod short_url;

pub use click::{Click, DIRECT_SOURCE, WEB_LOCATION};
pub use short_url::{NewShortUrl, ShortUrl};
