//! # Path Templates
//!
//! Parsed forms of declared route templates and concrete request paths.

use super::matcher::{is_placeholder, normalize, normalize_to_string, segments_match};
use indexmap::IndexMap;
use std::fmt;

/// One segment of a declared route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matched by exact string equality.
    Literal(String),
    /// Matches any single segment. Holds the name between the braces.
    Placeholder(String),
}

impl Segment {
    /// Classifies a raw segment.
    pub fn parse(raw: &str) -> Self {
        if is_placeholder(raw) {
            Segment::Placeholder(raw[1..raw.len() - 1].to_string())
        } else {
            Segment::Literal(raw.to_string())
        }
    }

    /// Raw text as it appears in the template (braces included for placeholders).
    pub fn raw(&self) -> String {
        match self {
            Segment::Literal(s) => s.clone(),
            Segment::Placeholder(name) => format!("{{{}}}", name),
        }
    }
}

/// A declared route such as `/users/{id}/posts`, split into segments.
///
/// The original string is kept verbatim so that it can be used as a key
/// into the document again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a declared route.
    pub fn parse(raw: &str) -> Self {
        let segments = normalize(raw).iter().map(|s| Segment::parse(s)).collect();
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The template exactly as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of non-empty segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root template `/`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Names of all placeholders, in order.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Length gate followed by a pairwise segment check.
    pub fn matches(&self, path: &ConcretePath) -> bool {
        self.segments.len() == path.len()
            && self
                .segments
                .iter()
                .zip(path.segments())
                .all(|(t, c)| segment_accepts(t, c))
    }

    /// Placeholder name to concrete value, or `None` if the path does not match.
    ///
    /// A placeholder name that appears twice keeps the later value.
    pub fn captures(&self, path: &ConcretePath) -> Option<IndexMap<String, String>> {
        if !self.matches(path) {
            return None;
        }
        let params = self
            .segments
            .iter()
            .zip(path.segments())
            .filter_map(|(t, c)| match t {
                Segment::Placeholder(name) => Some((name.clone(), c.clone())),
                Segment::Literal(_) => None,
            })
            .collect();
        Some(params)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn segment_accepts(template: &Segment, concrete: &str) -> bool {
    match template {
        Segment::Placeholder(_) => true,
        Segment::Literal(lit) => segments_match(lit, concrete),
    }
}

/// A runtime request path, normalized into literal segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConcretePath {
    segments: Vec<String>,
}

impl ConcretePath {
    /// Normalizes a raw request path.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: normalize(raw),
        }
    }

    /// Normalized segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ConcretePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&normalize_to_string(&self.segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_segments() {
        let t = PathTemplate::parse("/users/{id}/posts/");
        assert_eq!(
            t.segments(),
            &[
                Segment::Literal("users".into()),
                Segment::Placeholder("id".into()),
                Segment::Literal("posts".into()),
            ]
        );
        assert_eq!(t.as_str(), "/users/{id}/posts/");
        assert_eq!(t.placeholder_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_segment_raw_round_trip() {
        for raw in ["{id}", "{}", "users", "{half"] {
            assert_eq!(Segment::parse(raw).raw(), raw);
        }
    }

    #[test]
    fn test_captures() {
        let t = PathTemplate::parse("/resources/tenants/{tenantId}/cpes/{cpeId}");
        let p = ConcretePath::parse("/resources/tenants/123/cpes/456");
        let params = t.captures(&p).unwrap();
        assert_eq!(params.get("tenantId").map(String::as_str), Some("123"));
        assert_eq!(params.get("cpeId").map(String::as_str), Some("456"));
        let keys: Vec<_> = params.keys().cloned().collect();
        assert_eq!(keys, vec!["tenantId", "cpeId"]);
    }

    #[test]
    fn test_captures_none_on_mismatch() {
        let t = PathTemplate::parse("/a/{x}");
        assert!(t.captures(&ConcretePath::parse("/b/1")).is_none());
        assert!(t.captures(&ConcretePath::parse("/a")).is_none());
    }

    #[test]
    fn test_repeated_placeholder_keeps_last() {
        let t = PathTemplate::parse("/{id}/{id}");
        let params = t.captures(&ConcretePath::parse("/1/2")).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["id"], "2");
    }

    #[test]
    fn test_concrete_path_display() {
        assert_eq!(ConcretePath::parse("a//b/").to_string(), "/a/b");
        assert_eq!(ConcretePath::parse("").to_string(), "/");
    }
}
