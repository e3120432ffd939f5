//! Tools domain module.
//!
//! This module handles all tool-related functionality: the immutable tool
//! catalog, the invocation dispatcher, and the per-category tool
//! definitions.
//!
//! ## Architecture
//!
//! - `schema.rs` - JSON-Schema-like parameter descriptions
//! - `descriptor.rs` - `ToolDescriptor` and the `ToolHandler` capability trait
//! - `catalog.rs` - the immutable, ordered tool catalog
//! - `dispatcher.rs` - lookup, argument validation, and handler execution
//! - `definitions/` - individual tool implementations (one file per category)
//! - `error.rs` - tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Define a handler struct and its descriptor in the matching category
//!    file under `definitions/` (or add a new category file)
//! 2. If you added a category, register it in `ToolCatalog::new()`
//!
//! The dispatcher and the HTTP surface need no changes.

pub mod catalog;
pub mod definitions;
pub mod descriptor;
pub mod dispatcher;
mod error;
pub mod schema;

pub use catalog::ToolCatalog;
pub use descriptor::{ToolDescriptor, ToolHandler, ToolInfo};
pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
