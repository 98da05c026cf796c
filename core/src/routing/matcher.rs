//! # Path Matching
//!
//! Normalization of request paths and route templates, and selection of the
//! declared template that structurally matches a concrete path.
//!
//! Normalization splits on `/` and drops every empty segment. This also means
//! `/a//b` collapses to `/a/b`, so an empty path-parameter value cannot be told
//! apart from a shorter path. Matching keeps that behavior as-is.

/// Segment separator for both templates and concrete paths.
pub const SEPARATOR: char = '/';

/// Opening marker of a placeholder segment.
pub const PLACEHOLDER_OPEN: char = '{';

/// Closing marker of a placeholder segment.
pub const PLACEHOLDER_CLOSE: char = '}';

/// Splits a path on `/` and discards empty segments.
///
/// Leading, trailing and repeated separators are absorbed. Never fails;
/// an empty input yields an empty sequence.
pub fn normalize(path: &str) -> Vec<String> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins normalized segments back into a rooted path string (`/a/b`).
///
/// The empty sequence renders as `/`.
pub fn normalize_to_string<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push(SEPARATOR);
        out.push_str(segment.as_ref());
    }
    if out.is_empty() {
        out.push(SEPARATOR);
    }
    out
}

/// True when the segment is delimited by `{` and `}`.
pub fn is_placeholder(segment: &str) -> bool {
    segment.starts_with(PLACEHOLDER_OPEN) && segment.ends_with(PLACEHOLDER_CLOSE)
}

/// Compares one template segment against one concrete segment.
///
/// A placeholder accepts anything; a literal requires exact, case-sensitive equality.
pub fn segments_match(template_segment: &str, concrete_segment: &str) -> bool {
    is_placeholder(template_segment) || template_segment == concrete_segment
}

/// Returns the first template (in iteration order) that structurally matches `path`.
///
/// Candidates with a different segment count are skipped outright. When several
/// templates match, the first one supplied wins, so callers should pass templates
/// in declared order.
pub fn find_matching_template<'t, I>(templates: I, path: &str) -> Option<&'t str>
where
    I: IntoIterator<Item = &'t str>,
{
    let concrete = normalize(path);

    let found = templates.into_iter().find(|template| {
        let template_segments = normalize(template);
        template_segments.len() == concrete.len()
            && template_segments
                .iter()
                .zip(&concrete)
                .all(|(t, c)| segments_match(t, c))
    });

    match found {
        Some(template) => tracing::debug!(path, template, "path matched template"),
        None => tracing::debug!(path, "no template matched path"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const WPS: &str = "/resources/tenants/{tenantId}/cpes/{cpeId}/management/wps";

    #[test]
    fn test_normalize_drops_empty_segments() {
        assert_eq!(normalize("/a/b/"), vec!["a", "b"]);
        assert_eq!(normalize("a//b"), vec!["a", "b"]);
        assert_eq!(normalize("///"), Vec::<String>::new());
        assert!(normalize("").is_empty());
    }

    #[test]
    fn test_normalize_to_string() {
        assert_eq!(normalize_to_string(&normalize("a//b/")), "/a/b");
        assert_eq!(normalize_to_string::<&str>(&[]), "/");
    }

    #[test]
    fn test_segments_match() {
        assert!(segments_match("{id}", "42"));
        assert!(segments_match("{}", "anything"));
        assert!(segments_match("users", "users"));
        assert!(!segments_match("users", "Users"));
        assert!(!segments_match("users", " users"));
        // Half-delimited segments are literals
        assert!(!segments_match("{id", "42"));
        assert!(segments_match("{id", "{id"));
    }

    #[test]
    fn test_exact_template_returned() {
        let templates = [WPS];
        let found =
            find_matching_template(templates, "/resources/tenants/123/cpes/456/management/wps");
        assert_eq!(found, Some(WPS));
    }

    #[test]
    fn test_literal_mismatch_on_last_segment() {
        let found = find_matching_template(
            [WPS],
            "/resources/tenants/123/cpes/456/management/wrong",
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_trailing_slash_is_irrelevant() {
        let with = find_matching_template([WPS], "/resources/tenants/1/cpes/2/management/wps/");
        let without = find_matching_template([WPS], "/resources/tenants/1/cpes/2/management/wps");
        assert_eq!(with, without);
        assert_eq!(with, Some(WPS));
    }

    #[test]
    fn test_length_gate() {
        assert_eq!(find_matching_template(["/a/{x}"], "/a"), None);
        assert_eq!(find_matching_template(["/a/{x}"], "/a/1/2"), None);
    }

    #[test]
    fn test_first_of_indistinguishable_templates_wins() {
        assert_eq!(find_matching_template(["/a/{x}", "/a/{y}"], "/a/1"), Some("/a/{x}"));
        assert_eq!(find_matching_template(["/a/{y}", "/a/{x}"], "/a/1"), Some("/a/{y}"));
    }

    #[test]
    fn test_empty_parameter_collapses_into_shorter_path() {
        // `/a//b` is indistinguishable from `/a/b`: the empty id is not a segment.
        assert_eq!(find_matching_template(["/a/{id}/b"], "/a//b"), None);
        assert_eq!(find_matching_template(["/a/b"], "/a//b"), Some("/a/b"));
    }

    #[test]
    fn test_root_path() {
        assert_eq!(find_matching_template(["/users", "/"], "/"), Some("/"));
        assert_eq!(find_matching_template(["/users", "/"], ""), Some("/"));
    }
}
