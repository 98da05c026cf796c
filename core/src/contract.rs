#![deny(missing_docs)]

//! # Contract Resolution
//!
//! The full flow for one request: concrete path → matched template →
//! response schema → (optionally) payload validation.
//! Case tables (path / method / status triples) drive batch runs.

use crate::document::{read_value_file, ResolvedDocument};
use crate::error::{AppError, AppResult};
use crate::resolver::{require_response_schema, MissingEntry, ResponseKey};
use crate::routing::{find_matching_template, ConcretePath, PathTemplate};
use crate::schema::SchemaFragment;
use crate::validation::validate_instance;
use derive_more::{Display, From};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// One row of a case table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCase {
    /// Concrete request path, e.g. `/users/42`.
    pub path: String,
    /// Method as declared in the document.
    pub method: String,
    /// Status in string form. Integers are accepted when deserializing.
    #[serde(deserialize_with = "status_code")]
    pub status: String,
}

impl ContractCase {
    /// Builds a case.
    pub fn new(path: impl Into<String>, method: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            status: status.into(),
        }
    }
}

fn status_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Status {
        Text(String),
        Code(u64),
    }

    Ok(match Status::deserialize(deserializer)? {
        Status::Text(s) => s,
        Status::Code(n) => n.to_string(),
    })
}

/// Why a case could not be resolved to a schema.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum Unresolved {
    /// No declared template matches the request path.
    #[from(ignore)]
    #[display("no path template matches `{path}`")]
    NoMatch {
        /// The request path as given.
        path: String,
    },
    /// The template matched but a method/status/schema step is absent.
    #[display("{_0}")]
    Missing(MissingEntry),
}

impl std::error::Error for Unresolved {}

/// A case resolved down to its schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContract<'d> {
    /// The matched template as declared.
    pub template: &'d str,
    /// Placeholder values taken from the request path.
    pub params: IndexMap<String, String>,
    /// The response schema.
    pub schema: &'d SchemaFragment,
}

/// Resolves a case against the document.
///
/// Template selection is [`find_matching_template`] over the declared templates.
pub fn resolve_case<'d>(
    document: &'d ResolvedDocument,
    case: &ContractCase,
) -> Result<ResolvedContract<'d>, Unresolved> {
    let template = find_matching_template(document.templates(), &case.path).ok_or_else(|| {
        Unresolved::NoMatch {
            path: case.path.clone(),
        }
    })?;
    let params = PathTemplate::parse(template)
        .captures(&ConcretePath::parse(&case.path))
        .unwrap_or_default();

    let key = ResponseKey::new(template, &case.method, &case.status);
    let schema = require_response_schema(document, key)?;

    Ok(ResolvedContract {
        template,
        params,
        schema,
    })
}

/// Resolves a case and validates `instance` against its schema.
pub fn check_case<'d>(
    document: &'d ResolvedDocument,
    case: &ContractCase,
    instance: &Value,
) -> AppResult<ResolvedContract<'d>> {
    let resolved = resolve_case(document, case)?;
    validate_instance(instance, resolved.schema)?;
    Ok(resolved)
}

/// Reads a case table: a YAML or JSON list of `{path, method, status}` rows.
pub fn load_cases(path: &Path) -> AppResult<Vec<ContractCase>> {
    let value = read_value_file(path)?;
    serde_json::from_value(value).map_err(|e| {
        AppError::General(format!("Invalid case table {}: {}", path.display(), e))
    })
}
