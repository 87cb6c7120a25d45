//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

/// Errors raised while dispatching or preparing a tool call.
///
/// Only `NotFound` reaches the client as a protocol error. Argument
/// problems are rendered into flagged tool results by the handler, and
/// upstream fetch failures never become a `ToolError` at all.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) => McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None),
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            ToolError::Internal(msg) => McpError::internal_error(msg, None),
        }
    }
}
