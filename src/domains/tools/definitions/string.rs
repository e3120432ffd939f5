//! String tools - case conversion and simple transformations.

use serde_json::{Value, json};

use super::common::str_arg;
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

fn text_param(description: &str) -> ParameterSchema {
    ParameterSchema::object().required("text", PropertySchema::string(description))
}

/// All string tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "string_reverse",
            "Reverse the characters of a string",
            text_param("Text to reverse"),
            StringReverse,
        ),
        ToolDescriptor::new(
            "string_uppercase",
            "Convert a string to uppercase",
            text_param("Text to convert"),
            StringUppercase,
        ),
        ToolDescriptor::new(
            "string_lowercase",
            "Convert a string to lowercase",
            text_param("Text to convert"),
            StringLowercase,
        ),
        ToolDescriptor::new(
            "string_length",
            "Count the characters in a string",
            text_param("Text to measure"),
            StringLength,
        ),
        ToolDescriptor::new(
            "string_trim",
            "Remove leading and trailing whitespace",
            text_param("Text to trim"),
            StringTrim,
        ),
    ]
}

struct StringReverse;

#[async_trait::async_trait]
impl ToolHandler for StringReverse {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        let reversed: String = text.chars().rev().collect();
        Ok(json!({ "reversed": reversed }))
    }
}

struct StringUppercase;

#[async_trait::async_trait]
impl ToolHandler for StringUppercase {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        Ok(json!({ "uppercase": text.to_uppercase() }))
    }
}

struct StringLowercase;

#[async_trait::async_trait]
impl ToolHandler for StringLowercase {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        Ok(json!({ "lowercase": text.to_lowercase() }))
    }
}

struct StringLength;

#[async_trait::async_trait]
impl ToolHandler for StringLength {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        // Unicode scalar values, not bytes
        Ok(json!({ "length": text.chars().count() }))
    }
}

struct StringTrim;

#[async_trait::async_trait]
impl ToolHandler for StringTrim {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        Ok(json!({ "trimmed": text.trim() }))
    }
}
