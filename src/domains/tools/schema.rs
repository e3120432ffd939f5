//! JSON-Schema-like parameter descriptions for tools.
//!
//! A `ParameterSchema` is declarative metadata: it describes the argument
//! record a tool accepts and which properties are required. The dispatcher
//! checks required properties for presence and type-tag compatibility
//! before invoking a handler; optional properties are defaulted by the
//! handler itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The type tag of a single parameter property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

/// Schema for one property of a tool's argument record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// The expected JSON type of the property.
    #[serde(rename = "type")]
    pub param_type: ParameterType,

    /// Human-readable description, no behavioral effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Allowed values, if the property is an enumeration.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

impl PropertySchema {
    fn new(param_type: ParameterType, description: &str) -> Self {
        Self {
            param_type,
            description: Some(description.to_string()),
            allowed_values: None,
        }
    }

    /// A string property.
    pub fn string(description: &str) -> Self {
        Self::new(ParameterType::String, description)
    }

    /// A numeric property.
    pub fn number(description: &str) -> Self {
        Self::new(ParameterType::Number, description)
    }

    /// A boolean property.
    pub fn boolean(description: &str) -> Self {
        Self::new(ParameterType::Boolean, description)
    }

    /// An array property.
    pub fn array(description: &str) -> Self {
        Self::new(ParameterType::Array, description)
    }

    /// An object property.
    pub fn object(description: &str) -> Self {
        Self::new(ParameterType::Object, description)
    }

    /// Restrict the property to an enumeration of allowed values.
    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.allowed_values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Check whether a JSON value is compatible with this property's type
    /// tag. Any JSON number satisfies `number`; no coercion is performed.
    pub fn accepts(&self, value: &Value) -> bool {
        match self.param_type {
            ParameterType::String => value.is_string(),
            ParameterType::Number => value.is_number(),
            ParameterType::Boolean => value.is_boolean(),
            ParameterType::Array => value.is_array(),
            ParameterType::Object => value.is_object(),
        }
    }
}

/// Structural description of a tool's argument record.
///
/// Serializes to the external descriptor shape:
/// `{ "type": "object", "properties": {...}, "required": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    schema_type: String,

    /// Property name to property schema.
    pub properties: BTreeMap<String, PropertySchema>,

    /// Names of properties that must be present on invocation.
    pub required: Vec<String>,
}

impl ParameterSchema {
    /// Start an empty object schema.
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a required property.
    pub fn required(mut self, name: &str, property: PropertySchema) -> Self {
        self.properties.insert(name.to_string(), property);
        self.required.push(name.to_string());
        self
    }

    /// Add an optional property.
    pub fn optional(mut self, name: &str, property: PropertySchema) -> Self {
        self.properties.insert(name.to_string(), property);
        self
    }

    /// Names of the required properties.
    pub fn required_names(&self) -> &[String] {
        &self.required
    }

    /// Look up the schema of a single property.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }
}
