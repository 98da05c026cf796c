#![deny(missing_docs)]

//! # Payload Validation
//!
//! Checks a payload against a resolved response schema with the `jsonschema`
//! crate. Diagnostics are collapsed into plain messages; instance and schema
//! paths are not kept.

use crate::schema::SchemaFragment;
use serde_json::Value;
use std::fmt;

/// A payload that does not conform to its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    messages: Vec<String>,
}

impl ValidationFailure {
    /// Builds a failure from individual messages.
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Every violation message, in validator order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// True if any message mentions `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Validates `instance` against `schema`.
///
/// The draft is taken from the schema's `$schema` keyword (2020-12 otherwise).
/// A schema that does not compile is reported as a failure with a single
/// `invalid schema:` message.
pub fn validate_instance(
    instance: &Value,
    schema: &SchemaFragment,
) -> Result<(), ValidationFailure> {
    let validator = jsonschema::validator_for(schema.as_value()).map_err(|e| {
        ValidationFailure::new(vec![format!("invalid schema: {}", e)])
    })?;

    let messages: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        tracing::debug!(violations = messages.len(), "payload failed validation");
        Err(ValidationFailure::new(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: Value) -> SchemaFragment {
        SchemaFragment::new(value)
    }

    #[test]
    fn test_missing_required_property() {
        let s = schema(json!({"type": "object", "required": ["foo"]}));
        let failure = validate_instance(&json!({}), &s).unwrap_err();
        assert!(failure.mentions("foo"), "{failure}");
    }

    #[test]
    fn test_conforming_instance() {
        let s = schema(json!({
            "type": "object",
            "required": ["id"],
            "properties": {"id": {"type": "integer"}, "tags": {"type": "array", "items": {"type": "string"}}}
        }));
        assert!(validate_instance(&json!({"id": 1, "tags": ["a"]}), &s).is_ok());
    }

    #[test]
    fn test_collects_every_violation() {
        let s = schema(json!({
            "type": "object",
            "required": ["a", "b"],
            "properties": {"c": {"type": "string"}}
        }));
        let failure = validate_instance(&json!({"c": 5}), &s).unwrap_err();
        assert_eq!(failure.messages().len(), 3);
        assert!(failure.mentions("\"a\""));
        assert!(failure.mentions("\"b\""));
        assert_eq!(failure.to_string(), failure.messages().join("; "));
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        for instance in [json!(null), json!(1), json!({"x": [1, 2]})] {
            assert!(validate_instance(&instance, &schema(json!({}))).is_ok());
        }
    }

    #[test]
    fn test_invalid_schema_is_reported() {
        let failure = validate_instance(&json!({}), &schema(json!({"type": 12}))).unwrap_err();
        assert_eq!(failure.messages().len(), 1);
        assert!(failure.messages()[0].starts_with("invalid schema:"));
    }
}
