//! Application layer services implementing the registry operations.
//!
//! Services consume the repository trait and a clock, and expose the
//! operations HTTP handlers call into.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation and resolution
//! - [`services::stats_service::StatsService`] - Listings and per-link statistics

pub mod services;
