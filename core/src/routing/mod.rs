#![deny(missing_docs)]

//! # Routing
//!
//! - **matcher**: string-level normalization and template selection.
//! - **template**: parsed templates, concrete paths and parameter capture.
//!
//! `RouteTable` ties both together for a whole document.

pub mod matcher;
pub mod template;

pub use matcher::{
    find_matching_template, is_placeholder, normalize, normalize_to_string, segments_match,
};
pub use template::{ConcretePath, PathTemplate, Segment};

use crate::document::ResolvedDocument;
use indexmap::IndexMap;

/// A successful lookup: the declared template plus the captured parameter values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'t> {
    /// The template as declared.
    pub template: &'t PathTemplate,
    /// Placeholder name to concrete value.
    pub params: IndexMap<String, String>,
}

/// Templates parsed once, kept in declared order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    templates: Vec<PathTemplate>,
}

impl RouteTable {
    /// Builds a table from templates in the order supplied.
    pub fn from_templates<'a, I>(templates: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            templates: templates.into_iter().map(PathTemplate::parse).collect(),
        }
    }

    /// Builds a table from every path declared in the document.
    pub fn from_document(document: &ResolvedDocument) -> Self {
        Self::from_templates(document.templates())
    }

    /// Parsed templates.
    pub fn templates(&self) -> &[PathTemplate] {
        &self.templates
    }

    /// First template matching `path`, with its parameters.
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_>> {
        let concrete = ConcretePath::parse(path);
        let found = self.templates.iter().find_map(|template| {
            template
                .captures(&concrete)
                .map(|params| RouteMatch { template, params })
        });
        match &found {
            Some(m) => tracing::debug!(path, template = m.template.as_str(), "route found"),
            None => tracing::debug!(path, "no route found"),
        }
        found
    }
}
