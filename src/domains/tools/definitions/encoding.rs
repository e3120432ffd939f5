//! Encoding tools - Base64, URL encoding, and JSON formatting.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value, json};

use super::common::{int_arg, str_arg};
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

fn text_param(description: &str) -> ParameterSchema {
    ParameterSchema::object().required("text", PropertySchema::string(description))
}

/// All encoding tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "base64_encode",
            "Encode text to Base64",
            text_param("Text to encode"),
            Base64Encode,
        ),
        ToolDescriptor::new(
            "base64_decode",
            "Decode Base64 back to text",
            text_param("Base64 input to decode"),
            Base64Decode,
        ),
        ToolDescriptor::new(
            "url_encode",
            "Percent-encode text for use in a URL",
            text_param("Text to encode"),
            UrlEncode,
        ),
        ToolDescriptor::new(
            "url_decode",
            "Decode percent-encoded text",
            text_param("Text to decode"),
            UrlDecode,
        ),
        ToolDescriptor::new(
            "html_encode",
            "Escape special characters for HTML",
            text_param("Text to encode"),
            HtmlEncode,
        ),
        ToolDescriptor::new(
            "html_decode",
            "Decode HTML entities back to text",
            text_param("HTML-encoded text to decode"),
            HtmlDecode,
        ),
        ToolDescriptor::new(
            "json_format",
            "Pretty-print a JSON document",
            ParameterSchema::object()
                .required("text", PropertySchema::string("JSON document to format"))
                .optional("indent", PropertySchema::number("Spaces per indent level (default: 2)")),
            JsonFormat,
        ),
        ToolDescriptor::new(
            "json_minify",
            "Minify a JSON document",
            text_param("JSON document to minify"),
            JsonMinify,
        ),
    ]
}

struct Base64Encode;

#[async_trait::async_trait]
impl ToolHandler for Base64Encode {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        Ok(json!({ "encoded": STANDARD.encode(text.as_bytes()) }))
    }
}

struct Base64Decode;

#[async_trait::async_trait]
impl ToolHandler for Base64Decode {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");

        let bytes = STANDARD
            .decode(text.as_bytes())
            .map_err(|e| ToolError::execution_failed(format!("Invalid base64 input: {e}")))?;
        let decoded = String::from_utf8(bytes)
            .map_err(|e| ToolError::execution_failed(format!("Decoded data is not UTF-8: {e}")))?;

        Ok(json!({ "decoded": decoded }))
    }
}

struct UrlEncode;

#[async_trait::async_trait]
impl ToolHandler for UrlEncode {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        Ok(json!({ "encoded": urlencoding::encode(&text).into_owned() }))
    }
}

struct UrlDecode;

#[async_trait::async_trait]
impl ToolHandler for UrlDecode {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        let decoded = urlencoding::decode(&text)
            .map_err(|e| ToolError::execution_failed(format!("Invalid percent-encoding: {e}")))?;
        Ok(json!({ "decoded": decoded.into_owned() }))
    }
}

struct HtmlEncode;

#[async_trait::async_trait]
impl ToolHandler for HtmlEncode {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");

        let mut encoded = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => encoded.push_str("&amp;"),
                '<' => encoded.push_str("&lt;"),
                '>' => encoded.push_str("&gt;"),
                '"' => encoded.push_str("&quot;"),
                '\'' => encoded.push_str("&#x27;"),
                other => encoded.push(other),
            }
        }

        Ok(json!({ "encoded": encoded }))
    }
}

struct HtmlDecode;

#[async_trait::async_trait]
impl ToolHandler for HtmlDecode {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        Ok(json!({ "decoded": decode_entities(&text) }))
    }
}

/// Decode the named entities `html_encode` emits plus numeric character
/// references. Unknown or malformed entities pass through untouched.
fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let end = match rest.find(';') {
            Some(end) => end,
            None => break,
        };
        let entity = &rest[1..end];

        let replacement = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => parse_numeric_entity(entity),
        };

        match replacement {
            Some(c) => {
                decoded.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

/// `#NN` (decimal) or `#xHH` (hex) character reference.
fn parse_numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

struct JsonFormat;

#[async_trait::async_trait]
impl ToolHandler for JsonFormat {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        let indent = int_arg(&arguments, "indent", 2).clamp(0, 8) as usize;

        let parsed: Value = serde_json::from_str(&text)
            .map_err(|e| ToolError::execution_failed(format!("Invalid JSON: {e}")))?;

        let indent_str = " ".repeat(indent);
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent_str.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut out, formatter);
        serde::Serialize::serialize(&parsed, &mut serializer)
            .map_err(|e| ToolError::execution_failed(format!("Failed to format JSON: {e}")))?;

        let formatted = String::from_utf8(out)
            .map_err(|e| ToolError::execution_failed(format!("Failed to format JSON: {e}")))?;

        Ok(json!({ "formatted": formatted }))
    }
}

struct JsonMinify;

#[async_trait::async_trait]
impl ToolHandler for JsonMinify {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");

        let parsed: Value = serde_json::from_str(&text)
            .map_err(|e| ToolError::execution_failed(format!("Invalid JSON: {e}")))?;
        let minified = serde_json::to_string(&parsed)
            .map_err(|e| ToolError::execution_failed(format!("Failed to minify JSON: {e}")))?;

        Ok(json!({ "minified": minified }))
    }
}
