//! Helper functions shared by the registry services.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`validity`] - Validity window conversion

pub mod code_generator;
pub mod validity;
