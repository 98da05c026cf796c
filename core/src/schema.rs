#![deny(missing_docs)]

//! # Schema Fragments
//!
//! The part of a resolved document describing a response body.
//! Fragments are plain data: a tagged tree of objects, arrays and scalars.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A response schema extracted from a resolved document.
///
/// Wraps a `serde_json::Value` so callers can pattern-match on the node kind
/// (object / array / string / number / boolean / null).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaFragment(Value);

impl SchemaFragment {
    /// Wraps a value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The underlying tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// True for a schema declared as an explicit `null`.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// True for `null` or `{}`: a declared schema that constrains nothing.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// The `type` keyword when it is a single string.
    pub fn type_name(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Names listed under `required`.
    pub fn required(&self) -> Vec<&str> {
        self.0
            .get("required")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for SchemaFragment {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl AsRef<Value> for SchemaFragment {
    fn as_ref(&self) -> &Value {
        &self.0
    }
}

/// Selects the most appropriate media type entry of an OpenAPI 3 `content` mapping.
///
/// Preference order:
/// 1. `application/json`
/// 2. Any `+json` media type (e.g. `application/vnd.api+json`)
/// 3. `application/*`
/// 4. `*/*`
/// 5. First available entry
pub(crate) fn select_media(content: &Map<String, Value>) -> Option<&Value> {
    if let Some(media) = content.get("application/json") {
        return Some(media);
    }

    if let Some((_, media)) = content.iter().find(|(k, _)| k.ends_with("+json")) {
        return Some(media);
    }

    if let Some(media) = content.get("application/*") {
        return Some(media);
    }

    if let Some(media) = content.get("*/*") {
        return Some(media);
    }

    content.values().next()
}
