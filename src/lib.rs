//! MCP Tool Server Library
//!
//! This crate provides an MCP-style tool server: a static catalog of named
//! tools (each with a JSON-Schema-like parameter description) dispatched by
//! name over a small HTTP surface.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the HTTP surface, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool catalog, the invocation dispatcher, and the
//!     per-category tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_tool_server::core::{Config, ToolServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ToolServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolServer};
