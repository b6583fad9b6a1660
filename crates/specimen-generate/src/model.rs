use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use specimen_core::TypeDescriptor;

/// One batch call: which type, how many values, and the raw options the
/// caller sent alongside. Unrecognized body keys are collected into
/// `options`, so a JSON request body deserializes straight into this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    #[serde(rename = "type")]
    pub type_id: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

fn default_count() -> usize {
    5
}

impl BatchRequest {
    pub fn new(type_id: impl Into<String>, count: usize) -> Self {
        Self {
            type_id: type_id.into(),
            count,
            prefix: None,
            suffix: None,
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Catalog row for type listings.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeSummary {
    #[serde(rename = "type")]
    pub type_id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

impl From<&TypeDescriptor> for TypeSummary {
    fn from(descriptor: &TypeDescriptor) -> Self {
        Self {
            type_id: descriptor.type_id,
            name: descriptor.name,
            icon: descriptor.icon,
            category: descriptor.category,
        }
    }
}

/// One category with its types, for grouped navigation.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub types: Vec<TypeSummary>,
}
