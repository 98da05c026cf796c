#![deny(missing_docs)]

//! # Resolved Documents
//!
//! Read-only view of a fully dereferenced API description:
//! template → method → status → response (and its schema).
//!
//! Both Swagger 2 (`responses.<status>.schema`) and OpenAPI 3
//! (`responses.<status>.content.<media>.schema`) response shapes are read.
//! Reference resolution is the loader's job; leftover `$ref`s are only reported.

pub(crate) mod refs;
pub(crate) mod yaml;

use crate::error::{AppError, AppResult};
use crate::schema::{select_media, SchemaFragment};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One declared response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseEntry {
    schema: Option<SchemaFragment>,
}

impl ResponseEntry {
    /// The response schema. `None` when the response declares no schema at all;
    /// `Some` holding `null` when the schema is declared as an explicit `null`.
    pub fn schema(&self) -> Option<&SchemaFragment> {
        self.schema.as_ref()
    }
}

/// One operation (HTTP method) under a path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Operation {
    responses: IndexMap<String, ResponseEntry>,
}

impl Operation {
    /// Looks up a response by status key (`"200"`, `"default"`, ...).
    pub fn response(&self, status: &str) -> Option<&ResponseEntry> {
        self.responses.get(status)
    }

    /// Declared status keys, in order.
    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.responses.keys().map(String::as_str)
    }
}

/// All operations declared under one path template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    operations: IndexMap<String, Operation>,
}

impl PathItem {
    /// Looks up an operation by its declared (case-sensitive) method name.
    pub fn operation(&self, method: &str) -> Option<&Operation> {
        self.operations.get(method)
    }

    /// Declared method names, in order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }
}

/// A fully dereferenced API description.
///
/// Loaded once and never mutated, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedDocument {
    paths: IndexMap<String, PathItem>,
    unresolved_refs: Vec<String>,
}

impl ResolvedDocument {
    /// Builds a document from an in-memory value tree.
    ///
    /// Fails with `AppError::Document` when a node that must be a mapping is not.
    pub fn from_value(root: Value) -> AppResult<Self> {
        let unresolved_refs = refs::find_unresolved_refs(&root);
        if !unresolved_refs.is_empty() {
            tracing::warn!(
                count = unresolved_refs.len(),
                first = unresolved_refs[0].as_str(),
                "document still contains $ref nodes; they will not be followed"
            );
        }

        let root = expect_object(root, "document root")?;
        let paths = match root.get("paths") {
            None => IndexMap::new(),
            Some(paths) => parse_paths(paths)?,
        };

        tracing::debug!(templates = paths.len(), "loaded resolved document");
        Ok(Self {
            paths,
            unresolved_refs,
        })
    }

    /// Parses JSON text.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| AppError::Document(format!("Failed to parse JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Parses YAML text.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Self::from_value(yaml::parse_yaml(content)?)
    }

    /// Reads a document from disk. `.json` files use the JSON parser, everything else YAML.
    pub fn load(path: &Path) -> AppResult<Self> {
        let value = read_value_file(path)?;
        Self::from_value(value)
    }

    /// Declared path templates, in declared order.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// Looks up a path item by its template exactly as declared.
    pub fn path_item(&self, template: &str) -> Option<&PathItem> {
        self.paths.get(template)
    }

    /// JSON Pointers of `$ref` nodes that survived dereferencing.
    pub fn unresolved_refs(&self) -> &[String] {
        &self.unresolved_refs
    }
}

/// Reads a JSON or YAML file (chosen by extension) into a value tree.
pub fn read_value_file(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content).map_err(|e| {
            AppError::Document(format!("Failed to parse JSON {}: {}", path.display(), e))
        })
    } else {
        yaml::parse_yaml(&content)
    }
}

fn parse_paths(paths: &Value) -> AppResult<IndexMap<String, PathItem>> {
    let paths = as_object(paths, "paths")?;
    let mut out = IndexMap::with_capacity(paths.len());
    for (template, item) in paths {
        let item = as_object(item, &format!("paths.\"{}\"", template))?;
        out.insert(template.clone(), parse_path_item(template, item)?);
    }
    Ok(out)
}

fn parse_path_item(template: &str, item: &Map<String, Value>) -> AppResult<PathItem> {
    let mut operations = IndexMap::new();
    // `parameters`, `summary`, `servers` and friends are not mappings and are skipped.
    for (method, op) in item {
        if let Value::Object(op) = op {
            let where_ = format!("paths.\"{}\".{}", template, method);
            operations.insert(method.clone(), parse_operation(&where_, op)?);
        }
    }
    Ok(PathItem { operations })
}

fn parse_operation(where_: &str, op: &Map<String, Value>) -> AppResult<Operation> {
    let Some(responses) = op.get("responses") else {
        return Ok(Operation::default());
    };
    let responses = as_object(responses, &format!("{}.responses", where_))?;

    let mut out = IndexMap::with_capacity(responses.len());
    for (status, response) in responses {
        let response = as_object(response, &format!("{}.responses.\"{}\"", where_, status))?;
        out.insert(status.clone(), parse_response(response));
    }
    Ok(Operation { responses: out })
}

fn parse_response(response: &Map<String, Value>) -> ResponseEntry {
    if let Some(schema) = response.get("schema") {
        return ResponseEntry {
            schema: Some(SchemaFragment::new(schema.clone())),
        };
    }

    let schema = response
        .get("content")
        .and_then(Value::as_object)
        .and_then(select_media)
        .and_then(|media| media.get("schema").cloned())
        .map(SchemaFragment::new);

    ResponseEntry { schema }
}

fn expect_object(value: Value, what: &str) -> AppResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(not_a_mapping(what, &other)),
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> AppResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| not_a_mapping(what, value))
}

fn not_a_mapping(what: &str, value: &Value) -> AppError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    };
    AppError::Document(format!("{} must be a mapping, found {}", what, kind))
}
