//! Domain layer containing the registry's entities, contracts and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Short URL records and click events
//! - [`repositories`] - Storage trait for the registry
//! - [`clock`] - Time source used for creation, expiry and click timestamps
//! - [`errors`] - Typed registry failures
//!
//! # Record Lifecycle
//!
//! A record is `Active` while `now <= expires_at` and `Expired` afterwards.
//! The transition is a pure function of the clock; records are never removed.
//! Resolving an active record is the only mutation after creation.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod repositories;
