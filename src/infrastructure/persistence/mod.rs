//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Process-memory short URL registry

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
