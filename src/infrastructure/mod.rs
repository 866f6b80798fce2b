//! Infrastructure layer implementing the storage contracts of the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
