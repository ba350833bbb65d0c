//! Error types for slider assembly and lookup.
use thiserror::Error;

/// Main error type for slider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The declaration holds no slides
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// No slide with the requested id
    #[error("Slide \"{0}\" does not exist in current slider")]
    SlideNotFound(String),

    /// A resolved slider could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for slider operations.
pub type Result<T> = std::result::Result<T, Error>;
