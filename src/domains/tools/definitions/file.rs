//! File tools - path string helpers and byte-size formatting.
//!
//! These operate on path strings only; nothing here touches the
//! filesystem.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use super::common::{num_arg, str_arg};
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// All file tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "file_get_extension",
            "Get the extension of a file name",
            ParameterSchema::object()
                .required("filename", PropertySchema::string("File name")),
            FileGetExtension,
        ),
        ToolDescriptor::new(
            "file_get_basename",
            "Get the file name without its directory path",
            ParameterSchema::object()
                .required("path", PropertySchema::string("Full file path")),
            FileGetBasename,
        ),
        ToolDescriptor::new(
            "file_format_bytes",
            "Format a byte count into a human-readable size (KB, MB, GB, ...)",
            ParameterSchema::object()
                .required("bytes", PropertySchema::number("Size in bytes")),
            FileFormatBytes,
        ),
        ToolDescriptor::new(
            "get_mime_type",
            "Guess the MIME type of a file name from its extension",
            ParameterSchema::object()
                .required("filename", PropertySchema::string("File name")),
            GetMimeType,
        ),
        ToolDescriptor::new(
            "parse_path",
            "Parse a path into its components",
            ParameterSchema::object()
                .required("path", PropertySchema::string("Path to parse")),
            ParsePath,
        ),
        ToolDescriptor::new(
            "join_path",
            "Join path segments into a single path",
            ParameterSchema::object()
                .required("parts", PropertySchema::array("Path segments to join")),
            JoinPath,
        ),
        ToolDescriptor::new(
            "normalize_path",
            "Normalize a path (collapse separators, resolve '.' and '..')",
            ParameterSchema::object()
                .required("path", PropertySchema::string("Path to normalize")),
            NormalizePath,
        ),
    ]
}

struct FileGetExtension;

#[async_trait::async_trait]
impl ToolHandler for FileGetExtension {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let filename = str_arg(&arguments, "filename");
        let extension = Path::new(&filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Ok(json!({ "extension": extension }))
    }
}

struct FileGetBasename;

#[async_trait::async_trait]
impl ToolHandler for FileGetBasename {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let path = str_arg(&arguments, "path");
        let basename = Path::new(&path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Ok(json!({ "basename": basename }))
    }
}

struct FileFormatBytes;

#[async_trait::async_trait]
impl ToolHandler for FileFormatBytes {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let bytes = num_arg(&arguments, "bytes");

        if bytes < 0.0 {
            return Err(ToolError::execution_failed("bytes must be >= 0"));
        }

        let mut value = bytes;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }

        Ok(json!({
            "formatted": format!("{:.2} {}", value, UNITS[unit]),
            "value": (value * 100.0).round() / 100.0,
            "unit": UNITS[unit],
        }))
    }
}

struct GetMimeType;

#[async_trait::async_trait]
impl ToolHandler for GetMimeType {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let filename = str_arg(&arguments, "filename");
        let extension = Path::new(&filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        Ok(json!({ "mime_type": mime_type_for(&extension) }))
    }
}

fn mime_type_for(extension: &str) -> &'static str {
    match extension {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/vnd.microsoft.icon",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => "unknown",
    }
}

struct ParsePath;

#[async_trait::async_trait]
impl ToolHandler for ParsePath {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let path = str_arg(&arguments, "path");
        let p = Path::new(&path);

        let basename = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let filename = p.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let extension = p.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let dirname = p
            .parent()
            .and_then(|d| d.to_str())
            .unwrap_or_default();

        Ok(json!({
            "dirname": dirname,
            "basename": basename,
            "filename": filename,
            "extension": extension,
            "is_absolute": p.is_absolute(),
        }))
    }
}

struct JoinPath;

#[async_trait::async_trait]
impl ToolHandler for JoinPath {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let parts: Vec<&str> = arguments
            .get("parts")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .map(|v| {
                        v.as_str().ok_or_else(|| {
                            ToolError::execution_failed("Parts array must contain only strings")
                        })
                    })
                    .collect::<Result<_, _>>()
            })
            .unwrap_or_else(|| Ok(Vec::new()))?;

        if parts.is_empty() {
            return Err(ToolError::execution_failed("Parts array cannot be empty"));
        }

        // An absolute segment restarts the path.
        let mut joined = PathBuf::new();
        for part in parts {
            joined.push(part);
        }

        Ok(json!({ "path": joined.to_string_lossy() }))
    }
}

struct NormalizePath;

#[async_trait::async_trait]
impl ToolHandler for NormalizePath {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let path = str_arg(&arguments, "path");
        Ok(json!({ "normalized": normalize(&path) }))
    }
}

/// Lexical normalization: collapse separators, drop `.`, resolve `..`
/// without touching the filesystem. Empty input normalizes to `.`.
fn normalize(path: &str) -> String {
    let is_absolute = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.last().is_some_and(|s| *s != "..") {
                    stack.pop();
                } else if !is_absolute {
                    stack.push("..");
                }
            }
            other => stack.push(other),
        }
    }

    let joined = stack.join("/");
    match (is_absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
