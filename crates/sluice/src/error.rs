//! Error types for sluice CLI operations.

use std::io;
use thiserror::Error;

/// The error type for sluice CLI operations.
///
/// The analysis itself is infallible; errors can only arise while
/// loading and deserializing a pipeline document at the boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading a pipeline document.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The pipeline document was not valid JSON or was missing
    /// required identifier fields.
    #[error("Invalid pipeline document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sluice operations.
pub type Result<T> = std::result::Result<T, Error>;
