//! Query-string codec for search state.
//!
//! Serializes a [`SearchQuery`] to the navigable location's query string and
//! parses it back at boot. The encoding is fixed and documented here so URLs
//! stay shareable across versions:
//!
//! - `text` - the free-text term, percent-encoded
//! - `keywords` - active keywords, comma-separated in one parameter
//! - `kinds` - active package kinds, comma-separated in one parameter
//! - `repos` - active repositories, comma-separated in one parameter
//!
//! Comma-separated values (rather than repeated keys) keep URLs short and
//! readable. The comma is reserved as the separator: facet identifiers are
//! slug-like and never contain one. Serialization iterates ordered sets, so
//! the output is deterministic and `parse(serialize(q))` reproduces `q`'s set
//! contents exactly.
//!
//! Parsing is total. Malformed input degrades to the default query, unknown
//! keys are ignored, and empty list segments are dropped, so a mangled URL
//! can never fail boot.

use crate::domain::SearchQuery;
use std::collections::BTreeSet;

/// Query-string key for the free-text term.
pub const TEXT_PARAM: &str = "text";

/// Query-string key for active keywords.
pub const KEYWORDS_PARAM: &str = "keywords";

/// Query-string key for active package kinds.
pub const KINDS_PARAM: &str = "kinds";

/// Query-string key for active repositories.
pub const REPOS_PARAM: &str = "repos";

/// Serializes a search query to its query-string representation.
///
/// Inactive filters are omitted entirely; the empty query serializes to the
/// empty string, which the bridge uses to clear the location.
///
/// # Examples
///
/// ```
/// use hubstate::domain::SearchQuery;
/// use hubstate::persist::urlquery;
///
/// let mut query = SearchQuery::default();
/// query.text = Some("ingress controller".to_string());
/// query.active_keywords.insert("helm".to_string());
///
/// assert_eq!(urlquery::serialize(&query), "text=ingress+controller&keywords=helm");
/// ```
#[must_use]
pub fn serialize(query: &SearchQuery) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());

    if let Some(text) = &query.text {
        serializer.append_pair(TEXT_PARAM, text);
    }
    if !query.active_keywords.is_empty() {
        serializer.append_pair(KEYWORDS_PARAM, &join_values(&query.active_keywords));
    }
    if !query.active_package_kinds.is_empty() {
        serializer.append_pair(KINDS_PARAM, &join_values(&query.active_package_kinds));
    }
    if !query.active_repositories.is_empty() {
        serializer.append_pair(REPOS_PARAM, &join_values(&query.active_repositories));
    }

    serializer.finish()
}

/// Parses a raw query string back into a search query.
///
/// Accepts input with or without a leading `?`. Never fails: anything that
/// cannot be interpreted is dropped.
#[must_use]
pub fn parse(raw: &str) -> SearchQuery {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut query = SearchQuery::default();

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            TEXT_PARAM => {
                if !value.is_empty() {
                    query.text = Some(value.into_owned());
                }
            }
            KEYWORDS_PARAM => query.active_keywords = split_values(&value),
            KINDS_PARAM => query.active_package_kinds = split_values(&value),
            REPOS_PARAM => query.active_repositories = split_values(&value),
            other => {
                tracing::trace!(key = %other, "ignoring unknown query parameter");
            }
        }
    }

    query
}

/// Joins set members with the reserved comma separator.
fn join_values(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(",")
}

/// Splits a comma-separated list, dropping empty segments.
fn split_values(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_query() -> SearchQuery {
        SearchQuery {
            text: Some("ingress controller".to_string()),
            active_keywords: ["helm", "operator"].iter().map(|s| (*s).to_string()).collect(),
            active_package_kinds: ["0"].iter().map(|s| (*s).to_string()).collect(),
            active_repositories: ["stable", "incubator"].iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn round_trip_reproduces_set_contents() {
        let query = sample_query();
        assert_eq!(parse(&serialize(&query)), query);
    }

    #[test]
    fn empty_query_serializes_to_empty_string() {
        assert_eq!(serialize(&SearchQuery::default()), "");
        assert_eq!(parse(""), SearchQuery::default());
    }

    #[test]
    fn leading_question_mark_is_accepted() {
        let query = sample_query();
        let raw = format!("?{}", serialize(&query));
        assert_eq!(parse(&raw), query);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = parse("keywords=helm&page=3&utm_source=mail");
        assert_eq!(
            query.active_keywords,
            ["helm".to_string()].into_iter().collect()
        );
        assert!(query.active_package_kinds.is_empty());
    }

    #[test]
    fn empty_segments_are_dropped() {
        let query = parse("keywords=helm,,operator,&repos=,");
        assert_eq!(
            query.active_keywords,
            ["helm".to_string(), "operator".to_string()].into_iter().collect()
        );
        assert!(query.active_repositories.is_empty());
    }

    #[test]
    fn garbage_degrades_to_the_default_query() {
        assert_eq!(parse("%%%&&&===;;"), SearchQuery::default());
    }

    #[test]
    fn text_is_percent_decoded() {
        let query = parse("text=ingress%20controller");
        assert_eq!(query.text.as_deref(), Some("ingress controller"));
    }
}
