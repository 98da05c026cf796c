#![deny(missing_docs)]

//! # Response Resolution
//!
//! Looks up the schema of one response (template / method / status) in a
//! resolved document. Every level short-circuits on a missing key; absence is
//! a value, not an error.

use crate::document::{ResolvedDocument, ResponseEntry};
use crate::schema::SchemaFragment;
use derive_more::Display;
use std::fmt;

/// Coordinates of a response inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseKey<'a> {
    /// Path template exactly as declared.
    pub template: &'a str,
    /// Method name as declared (typically a lowercase HTTP verb).
    pub method: &'a str,
    /// Status key in string form, e.g. `"200"`.
    pub status: &'a str,
}

impl<'a> ResponseKey<'a> {
    /// Bundles the three lookup keys.
    pub fn new(template: &'a str, method: &'a str, status: &'a str) -> Self {
        Self {
            template,
            method,
            status,
        }
    }
}

/// Renders the structural query form, e.g. `paths."/a/{id}".get.responses."200".schema`.
impl fmt::Display for ResponseKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "paths.\"{}\".{}.responses.\"{}\".schema",
            self.template, self.method, self.status
        )
    }
}

/// The first lookup step that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MissingEntry {
    /// The template is not declared under `paths`.
    #[display("no path template `{_0}`")]
    Template(String),
    /// The template has no such method.
    #[display("no `{method}` operation under `{template}`")]
    Method {
        /// Template that was found.
        template: String,
        /// Method that was not.
        method: String,
    },
    /// The operation declares no such status.
    #[display("no `{status}` response for `{method} {template}`")]
    Status {
        /// Template that was found.
        template: String,
        /// Method that was found.
        method: String,
        /// Status that was not.
        status: String,
    },
    /// The response exists but declares no schema.
    #[display("response `{status}` of `{method} {template}` declares no schema")]
    Schema {
        /// Template that was found.
        template: String,
        /// Method that was found.
        method: String,
        /// Status that was found.
        status: String,
    },
}

/// Finds the response entry for `key`, reporting the first level that is absent.
pub fn locate_response<'d>(
    document: &'d ResolvedDocument,
    key: ResponseKey<'_>,
) -> Result<&'d ResponseEntry, MissingEntry> {
    let item = document
        .path_item(key.template)
        .ok_or_else(|| MissingEntry::Template(key.template.to_string()))?;

    let operation = item
        .operation(key.method)
        .ok_or_else(|| MissingEntry::Method {
            template: key.template.to_string(),
            method: key.method.to_string(),
        })?;

    operation
        .response(key.status)
        .ok_or_else(|| MissingEntry::Status {
            template: key.template.to_string(),
            method: key.method.to_string(),
            status: key.status.to_string(),
        })
}

/// Like [`get_response_schema`], but says which step came up empty.
pub fn require_response_schema<'d>(
    document: &'d ResolvedDocument,
    key: ResponseKey<'_>,
) -> Result<&'d SchemaFragment, MissingEntry> {
    let entry = locate_response(document, key)?;
    let schema = entry.schema().ok_or_else(|| MissingEntry::Schema {
        template: key.template.to_string(),
        method: key.method.to_string(),
        status: key.status.to_string(),
    });
    match &schema {
        Ok(_) => tracing::debug!(query = %key, "resolved response schema"),
        Err(missing) => tracing::debug!(query = %key, %missing, "response schema missing"),
    }
    schema
}

/// Returns the schema of one response, or `None` if any step is missing.
///
/// A response whose `schema` is declared as `null` yields `Some` holding a null
/// fragment, which is not the same as a response without a `schema` key.
pub fn get_response_schema<'d>(
    document: &'d ResolvedDocument,
    template: &str,
    method: &str,
    status: &str,
) -> Option<&'d SchemaFragment> {
    require_response_schema(document, ResponseKey::new(template, method, status)).ok()
}
