//! Tool server implementation and lifecycle management.
//!
//! The server owns the immutable tool catalog and the dispatcher built
//! over it, and exposes the operations the HTTP surface needs: listing
//! the registered tools and invoking one by name.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolCatalog, ToolDispatcher, ToolError, ToolInfo};

/// The main tool server.
///
/// Cheap to clone; the catalog is built once at construction and shared
/// behind an `Arc`, so clones dispatch against the same registry.
#[derive(Clone)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The immutable tool registry.
    catalog: Arc<ToolCatalog>,

    /// Dispatcher routing invocations into the catalog.
    dispatcher: ToolDispatcher,
}

impl ToolServer {
    /// Create a new tool server with the given configuration.
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(ToolCatalog::new());
        info!("Registered {} tools", catalog.len());

        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(catalog.clone()),
            catalog,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all registered tools, in registration order.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.catalog.list()
    }

    /// Invoke a tool by name.
    pub async fn invoke_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        self.dispatcher.invoke(name, arguments).await
    }
}
