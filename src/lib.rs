//! # shorturls
//!
//! A minimal URL shortener built with Axum: clients submit a long URL and get a
//! short code that redirects to it until its validity window ends, with click
//! analytics per code.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the repository trait, clock and error kinds
//! - **Application Layer** ([`application`]) - Creation, resolution and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Custom or generated short codes (4-10 characters)
//! - Per-link validity in minutes, evaluated lazily on every read
//! - Click tracking with referrer and timestamp
//! - Listing with active/expired counts
//!
//! State lives in process memory and is lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:5000"
//! cargo run
//!
//! curl -X POST localhost:5000/shorturls \
//!   -H 'content-type: application/json' \
//!   -d '{"url": "https://example.com", "validity": 10, "shortcode": "abcd"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSettings, StatsService};
    pub use crate::domain::clock::{Clock, MockClock, SystemClock};
    pub use crate::domain::entities::{Click, NewShortUrl, ShortUrl};
    pub use crate::domain::errors::RegistryError;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
