//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool lookup and invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found in the catalog.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The descriptor exists but carries no executable handler.
    #[error("Tool handler not found: {0}")]
    HandlerMissing(String),

    /// The invocation arguments do not satisfy the tool's schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool's own logic raised a domain failure. The message is the
    /// handler's original failure text, surfaced verbatim.
    #[error("{0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "handler missing" error.
    pub fn handler_missing(name: impl Into<String>) -> Self {
        Self::HandlerMissing(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}
