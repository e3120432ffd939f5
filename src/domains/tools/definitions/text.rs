//! Text tools - word statistics and title casing.

use serde_json::{Value, json};

use super::common::str_arg;
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

/// All text tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "count_words",
            "Count words and characters in a text",
            ParameterSchema::object()
                .required("text", PropertySchema::string("Text to analyze")),
            CountWords,
        ),
        ToolDescriptor::new(
            "to_title_case",
            "Convert a text to Title Case (capitalize the first letter of each word)",
            ParameterSchema::object()
                .required("text", PropertySchema::string("Text to convert")),
            ToTitleCase,
        ),
    ]
}

struct CountWords;

#[async_trait::async_trait]
impl ToolHandler for CountWords {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");

        let word_count = text.split_whitespace().count();
        let character_count = text.chars().count();
        let character_count_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

        Ok(json!({
            "word_count": word_count,
            "character_count": character_count,
            "character_count_no_spaces": character_count_no_spaces,
        }))
    }
}

struct ToTitleCase;

#[async_trait::async_trait]
impl ToolHandler for ToTitleCase {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");

        let title_case = text
            .to_lowercase()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        Ok(json!({ "result": title_case }))
    }
}
