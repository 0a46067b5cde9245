//! Shared types and transforms for the confeitaria management platform
//!
//! This crate holds the pure logic used by the gateway and, via WASM, by the
//! mobile/desktop client: stock status classification and report chart shaping.

pub mod models;
pub mod reporting;
pub mod types;
pub mod validation;

pub use models::*;
pub use reporting::*;
pub use types::*;
pub use validation::*;
