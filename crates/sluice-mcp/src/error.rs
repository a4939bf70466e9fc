//! Error types for the sluice MCP server.

use thiserror::Error;

/// Errors that can occur in the sluice MCP server.
///
/// The analysis itself cannot fail; errors are confined to
/// serialization and protocol handling.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// MCP protocol error.
    #[error("MCP error: {0}")]
    Mcp(String),
}

/// Result type for sluice MCP operations.
pub type Result<T> = std::result::Result<T, Error>;
