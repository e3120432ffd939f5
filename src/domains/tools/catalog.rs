//! The immutable tool catalog.
//!
//! Built once at startup by concatenating per-category descriptor lists in
//! a fixed order, then never mutated. Lookup is a linear scan by exact
//! name; the first match wins, so a duplicate name registered later is
//! unreachable.

use super::definitions;
use super::descriptor::{ToolDescriptor, ToolInfo};

/// Ordered, immutable collection of tool descriptors.
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Build the catalog from all built-in categories.
    ///
    /// Registration order: math, string, text, datetime, converter,
    /// random, network, file, encoding, hash, weather.
    pub fn new() -> Self {
        let mut tools = Vec::new();
        tools.extend(definitions::math::tools());
        tools.extend(definitions::string::tools());
        tools.extend(definitions::text::tools());
        tools.extend(definitions::datetime::tools());
        tools.extend(definitions::converter::tools());
        tools.extend(definitions::random::tools());
        tools.extend(definitions::network::tools());
        tools.extend(definitions::file::tools());
        tools.extend(definitions::encoding::tools());
        tools.extend(definitions::hash::tools());
        tools.extend(definitions::weather::tools());
        Self { tools }
    }

    /// Build a catalog from an explicit descriptor list.
    pub fn from_tools(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// Public metadata of every tool, in registration order.
    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools.iter().map(ToolDescriptor::info).collect()
    }

    /// Find the first descriptor with an exactly matching name.
    pub fn find(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}
