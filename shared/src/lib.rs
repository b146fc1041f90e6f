//! Shared domain types for the retail engine
//!
//! Entity models and id aliases used across the workspace. Reference data
//! (customers, sellers, products, categories) arrives pre-validated and
//! deduplicated from the upstream catalog collaborator.

pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};
