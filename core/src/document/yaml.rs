//! YAML loading.
//!
//! YAML text is read straight into a `serde_json::Value`; scalar mapping keys
//! such as unquoted status codes (`200:`) come out as strings. Two keys of one
//! mapping that only differ in their YAML type (`200:` and `'200':`) would then
//! land on the same JSON key, so they are rejected before conversion.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use serde_yaml::Value as Yaml;
use std::collections::HashSet;

/// Parses YAML text into a JSON value tree.
pub(crate) fn parse_yaml(content: &str) -> AppResult<Value> {
    let yaml: Yaml = serde_yaml::from_str(content).map_err(parse_error)?;
    reject_colliding_keys(&yaml, "")?;
    serde_yaml::from_str(content).map_err(parse_error)
}

fn parse_error(e: serde_yaml::Error) -> AppError {
    AppError::Document(format!("Failed to parse YAML: {}", e))
}

/// Errors when two keys of one mapping share the same string form.
fn reject_colliding_keys(value: &Yaml, pointer: &str) -> AppResult<()> {
    match value {
        Yaml::Mapping(mapping) => {
            let mut seen = HashSet::with_capacity(mapping.len());
            for (key, child) in mapping {
                let Some(name) = scalar_key(key) else {
                    continue;
                };
                if !seen.insert(name.clone()) {
                    return Err(AppError::Document(format!(
                        "Duplicate mapping key '{}' at '{}'",
                        name, pointer
                    )));
                }
                reject_colliding_keys(child, &format!("{}/{}", pointer, name))?;
            }
            Ok(())
        }
        Yaml::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| reject_colliding_keys(item, &format!("{}/{}", pointer, i))),
        Yaml::Tagged(tagged) => reject_colliding_keys(&tagged.value, pointer),
        _ => Ok(()),
    }
}

fn scalar_key(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Tagged(tagged) => scalar_key(&tagged.value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_keys_become_strings() {
        let v = parse_yaml("responses:\n  200:\n    description: OK\n  '404':\n    description: NF\n")
            .unwrap();
        assert_eq!(
            v,
            json!({"responses": {"200": {"description": "OK"}, "404": {"description": "NF"}}})
        );
    }

    #[test]
    fn test_key_order_preserved() {
        let v = parse_yaml("b: 1\na: 2\nc: 3\n").unwrap();
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scalars() {
        let v = parse_yaml("[1, -2, 1.5, true, ~, text]").unwrap();
        assert_eq!(v, json!([1, -2, 1.5, true, null, "text"]));
    }

    #[test]
    fn test_quoted_and_unquoted_status_collide() {
        let err = parse_yaml(
            "paths:\n  /a:\n    get:\n      responses:\n        200: {description: A}\n        '200': {description: B}\n",
        )
        .unwrap_err();
        match err {
            AppError::Document(msg) => {
                assert!(msg.contains("'200'"), "{msg}");
                assert!(msg.contains("/paths//a/get/responses"), "{msg}");
            }
            other => panic!("expected document error, got {:?}", other),
        }
    }

    #[test]
    fn test_same_key_in_sibling_mappings_is_fine() {
        let v = parse_yaml("- {200: a}\n- {'200': b}\n").unwrap();
        assert_eq!(v, json!([{"200": "a"}, {"200": "b"}]));
    }

    #[test]
    fn test_sequence_key_rejected() {
        let err = parse_yaml("? [a, b]\n: value\n").unwrap_err();
        assert!(matches!(err, AppError::Document(_)));
    }
}
