//! Error types for Grove.

use thiserror::Error;

/// Grove error type.
#[derive(Error, Debug)]
pub enum Error {
    /// No approved package exists in the requested group
    #[error("No approved model package found for model package group: {0}")]
    NoApprovedPackage(String),

    /// The registry reported a failure for a list call
    #[error("{0}")]
    Registry(String),
}

/// Result type alias for Grove operations.
pub type Result<T> = std::result::Result<T, Error>;
