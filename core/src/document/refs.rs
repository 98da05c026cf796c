//! # Leftover References
//!
//! A resolved document should not contain `$ref` objects anymore. These helpers
//! only locate them (as JSON Pointers) so that a half-resolved input can be
//! reported; they never follow a reference.

use serde_json::Value;

/// Encodes a JSON Pointer segment (handles `~` and `/`).
pub(crate) fn encode_pointer_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Collects the pointer of every object holding a string `$ref`, in document order.
pub(crate) fn find_unresolved_refs(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    walk(value, &mut String::new(), &mut found);
    found
}

fn walk(value: &Value, pointer: &mut String, found: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if matches!(map.get("$ref"), Some(Value::String(_))) {
                found.push(pointer.clone());
            }
            for (key, child) in map {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&encode_pointer_segment(key));
                walk(child, pointer, found);
                pointer.truncate(len);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&i.to_string());
                walk(child, pointer, found);
                pointer.truncate(len);
            }
        }
        _ => {}
    }
}
