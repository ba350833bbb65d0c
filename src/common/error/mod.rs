//! Unified error type for the crate.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
