//! The invocation dispatcher.
//!
//! Translates a `(name, arguments)` pair into a result record or a
//! classified `ToolError`, uniformly for every tool. Each invocation is a
//! single stateless transaction; the catalog is immutable, so any number
//! of invocations may run concurrently without coordination.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::catalog::ToolCatalog;
use super::error::ToolError;
use super::schema::ParameterSchema;

/// Dispatches invocations against an immutable catalog.
#[derive(Clone)]
pub struct ToolDispatcher {
    catalog: Arc<ToolCatalog>,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given catalog.
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        Self { catalog }
    }

    /// Invoke a tool by name.
    ///
    /// Lookup failure, a metadata-only descriptor, and schema violations
    /// are reported without executing any handler. A handler failure is
    /// converted to `ToolError::ExecutionFailed`; it never escapes as a
    /// panic and is never retried.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let descriptor = self.catalog.find(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;

        let handler = descriptor
            .handler()
            .ok_or_else(|| ToolError::handler_missing(name))?
            .clone();

        validate_arguments(&descriptor.parameters, &arguments)?;

        debug!("Invoking tool: {}", name);
        handler.execute(arguments).await
    }
}

/// Check the argument record against the schema's `required` list.
///
/// Required properties must be present and type-tag-compatible. Optional
/// properties are left to the handler, which defaults them.
fn validate_arguments(schema: &ParameterSchema, arguments: &Value) -> Result<(), ToolError> {
    let record = arguments
        .as_object()
        .ok_or_else(|| ToolError::invalid_arguments("arguments must be an object"))?;

    for name in schema.required_names() {
        let value = record
            .get(name)
            .ok_or_else(|| ToolError::invalid_arguments(format!("missing required argument '{name}'")))?;

        if let Some(property) = schema.property(name) {
            if !property.accepts(value) {
                return Err(ToolError::invalid_arguments(format!(
                    "argument '{name}' has the wrong type"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
    use crate::domains::tools::schema::PropertySchema;
    use serde_json::json;

    fn dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(Arc::new(ToolCatalog::new()))
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool() {
        let result = dispatcher().invoke("no_such_tool", json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_invoke_metadata_only_tool() {
        let catalog = ToolCatalog::from_tools(vec![ToolDescriptor::metadata_only(
            "doc_only",
            "No handler",
            ParameterSchema::object(),
        )]);
        let dispatcher = ToolDispatcher::new(Arc::new(catalog));
        let result = dispatcher.invoke("doc_only", json!({})).await;
        assert!(matches!(result, Err(ToolError::HandlerMissing(_))));
    }

    #[tokio::test]
    async fn test_invoke_math_add() {
        let result = dispatcher()
            .invoke("math_add", json!({"a": 12, "b": 30}))
            .await
            .unwrap();
        assert_eq!(result["result"], json!(42.0));
    }

    #[tokio::test]
    async fn test_invoke_divide_by_zero_is_execution_error() {
        let result = dispatcher().invoke("math_divide", json!({"a": 5, "b": 0})).await;
        match result {
            Err(ToolError::ExecutionFailed(msg)) => assert_eq!(msg, "Division by zero"),
            other => panic!("expected execution failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invoke_string_reverse() {
        let result = dispatcher()
            .invoke("string_reverse", json!({"text": "MCP"}))
            .await
            .unwrap();
        assert_eq!(result["reversed"], "PCM");
    }

    #[tokio::test]
    async fn test_missing_required_argument_rejected_before_execution() {
        let result = dispatcher().invoke("math_add", json!({"a": 12})).await;
        match result {
            Err(ToolError::InvalidArguments(msg)) => assert!(msg.contains("'b'")),
            other => panic!("expected invalid arguments, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_argument_type_rejected() {
        let result = dispatcher()
            .invoke("math_add", json!({"a": 12, "b": "thirty"}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_non_object_arguments_rejected() {
        let result = dispatcher().invoke("math_add", json!([12, 30])).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    struct NeverCalled;

    #[async_trait::async_trait]
    impl ToolHandler for NeverCalled {
        async fn execute(&self, _arguments: Value) -> Result<Value, ToolError> {
            panic!("handler must not run for an invalid invocation");
        }
    }

    #[tokio::test]
    async fn test_validation_failure_never_executes_handler() {
        let catalog = ToolCatalog::from_tools(vec![ToolDescriptor::new(
            "guarded",
            "Never runs without its argument",
            ParameterSchema::object().required("key", PropertySchema::string("Required key")),
            NeverCalled,
        )]);
        let dispatcher = ToolDispatcher::new(Arc::new(catalog));
        let result = dispatcher.invoke("guarded", json!({})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_concurrent_invocations_do_not_interfere() {
        let dispatcher = dispatcher();
        let add = dispatcher.invoke("math_add", json!({"a": 1, "b": 2}));
        let reverse = dispatcher.invoke("string_reverse", json!({"text": "abc"}));

        let (add, reverse) = tokio::join!(add, reverse);
        assert_eq!(add.unwrap()["result"], json!(3.0));
        assert_eq!(reverse.unwrap()["reversed"], "cba");
    }
}
