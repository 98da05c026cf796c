#![deny(missing_docs)]

//! # Fragment Export
//!
//! Renders schema fragments as JSON or YAML fixtures and derives fixture file names.

use crate::error::{AppError, AppResult};
use crate::resolver::ResponseKey;
use crate::schema::SchemaFragment;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Text encoding of an exported fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixtureFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML block style.
    Yaml,
}

impl FixtureFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            FixtureFormat::Json => "json",
            FixtureFormat::Yaml => "yaml",
        }
    }

    /// Guesses the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }
}

impl FromStr for FixtureFormat {
    type Err = AppError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "json" => Ok(FixtureFormat::Json),
            "yaml" | "yml" => Ok(FixtureFormat::Yaml),
            other => Err(AppError::General(format!(
                "Unknown fixture format '{}' (expected json or yaml)",
                other
            ))),
        }
    }
}

impl fmt::Display for FixtureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serializes a fragment in the requested format.
pub fn render_fragment(fragment: &SchemaFragment, format: FixtureFormat) -> AppResult<String> {
    match format {
        FixtureFormat::Json => serde_json::to_string_pretty(fragment)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| AppError::General(format!("JSON serialization failed: {}", e))),
        FixtureFormat::Yaml => serde_yaml::to_string(fragment)
            .map_err(|e| AppError::General(format!("YAML serialization failed: {}", e))),
    }
}

/// Derives a fixture file name from a response key.
///
/// e.g. `get 200 /users/{id}` -> `get_200_users_id.json`
pub fn fixture_file_name(key: &ResponseKey<'_>, format: FixtureFormat) -> String {
    let clean_path = key.template.replace(['{', '}'], "").replace('/', "_");
    let clean_path = clean_path.trim_matches('_');
    let stem = if clean_path.is_empty() { "root" } else { clean_path };
    format!(
        "{}_{}_{}.{}",
        key.method.to_lowercase(),
        key.status,
        stem,
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_tags() {
        assert_eq!("json".parse::<FixtureFormat>().unwrap(), FixtureFormat::Json);
        assert_eq!("YAML".parse::<FixtureFormat>().unwrap(), FixtureFormat::Yaml);
        assert_eq!("yml".parse::<FixtureFormat>().unwrap(), FixtureFormat::Yaml);
        assert!("toml".parse::<FixtureFormat>().is_err());
        assert_eq!(
            FixtureFormat::from_path(Path::new("out/schema.yml")),
            Some(FixtureFormat::Yaml)
        );
        assert_eq!(FixtureFormat::from_path(Path::new("out/schema")), None);
    }

    #[test]
    fn test_render_json() {
        let f = SchemaFragment::new(json!({"type": "object", "required": ["foo"]}));
        let out = render_fragment(&f, FixtureFormat::Json).unwrap();
        assert!(out.contains("\"type\": \"object\""));
        assert!(out.ends_with("}\n"));
        let back: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(&back, f.as_value());
    }

    #[test]
    fn test_render_yaml_keeps_key_order() {
        let f = SchemaFragment::new(json!({"type": "object", "properties": {"b": {}, "a": {}}}));
        let out = render_fragment(&f, FixtureFormat::Yaml).unwrap();
        assert!(out.starts_with("type: object\n"));
        assert!(out.find("b:").unwrap() < out.find("a:").unwrap());
    }

    #[test]
    fn test_fixture_file_name() {
        let key = ResponseKey::new("/users/{id}/posts", "GET", "200");
        assert_eq!(
            fixture_file_name(&key, FixtureFormat::Json),
            "get_200_users_id_posts.json"
        );
        let root = ResponseKey::new("/", "get", "404");
        assert_eq!(fixture_file_name(&root, FixtureFormat::Yaml), "get_404_root.yaml");
    }
}
