//! Tool descriptors and the handler capability trait.
//!
//! A `ToolDescriptor` binds a stable name and declarative parameter schema
//! to an executable `ToolHandler`. Handlers are late-bound through trait
//! objects: one concrete implementing type per tool, looked up by name at
//! invocation time.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::error::ToolError;
use super::schema::ParameterSchema;

/// Capability trait for executing one tool.
///
/// Implementations must be stateless with respect to the catalog: each
/// call receives the full argument record and returns a result record or
/// a domain failure. Handlers are responsible for defaulting their own
/// optional arguments.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with the given arguments.
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError>;
}

/// One invocable capability in the catalog.
pub struct ToolDescriptor {
    /// Unique dispatch key, stable for the process lifetime.
    pub name: &'static str,

    /// Human-readable summary, no behavioral effect.
    pub description: &'static str,

    /// Declarative description of the accepted argument record.
    pub parameters: ParameterSchema,

    handler: Option<Arc<dyn ToolHandler>>,
}

impl ToolDescriptor {
    /// Create a descriptor with an executable handler.
    pub fn new(
        name: &'static str,
        description: &'static str,
        parameters: ParameterSchema,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        Self {
            name,
            description,
            parameters,
            handler: Some(Arc::new(handler)),
        }
    }

    /// Create a metadata-only descriptor without a handler.
    ///
    /// Invoking such a tool fails with `ToolError::HandlerMissing`.
    pub fn metadata_only(
        name: &'static str,
        description: &'static str,
        parameters: ParameterSchema,
    ) -> Self {
        Self {
            name,
            description,
            parameters,
            handler: None,
        }
    }

    /// The executable handler, if one is registered.
    pub fn handler(&self) -> Option<&Arc<dyn ToolHandler>> {
        self.handler.as_ref()
    }

    /// The public metadata projection of this descriptor.
    pub fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name.to_string(),
            description: self.description.to_string(),
            parameters: self.parameters.clone(),
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("handler", &self.handler.as_ref().map(|_| "<dyn ToolHandler>"))
            .finish()
    }
}

/// Public metadata for one tool: everything a client may see.
///
/// The handler reference is deliberately excluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::PropertySchema;
    use serde_json::json;

    struct Echo;

    #[async_trait::async_trait]
    impl ToolHandler for Echo {
        async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
            Ok(arguments)
        }
    }

    fn sample_schema() -> ParameterSchema {
        ParameterSchema::object().required("text", PropertySchema::string("Text to echo"))
    }

    #[test]
    fn test_info_excludes_handler() {
        let descriptor = ToolDescriptor::new("echo", "Echo arguments back", sample_schema(), Echo);
        let info = descriptor.info();
        assert_eq!(info.name, "echo");

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("handler").is_none());
        assert_eq!(value["parameters"]["type"], "object");
    }

    #[test]
    fn test_metadata_only_has_no_handler() {
        let descriptor = ToolDescriptor::metadata_only("doc", "Metadata only", sample_schema());
        assert!(descriptor.handler().is_none());
    }

    #[test]
    fn test_handler_executes() {
        let descriptor = ToolDescriptor::new("echo", "Echo arguments back", sample_schema(), Echo);
        let handler = descriptor.handler().unwrap().clone();
        let result = tokio_test::block_on(handler.execute(json!({"text": "hi"}))).unwrap();
        assert_eq!(result, json!({"text": "hi"}));
    }
}
