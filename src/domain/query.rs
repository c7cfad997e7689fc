//! Search query model and facet reconciliation.
//!
//! This module defines [`SearchQuery`], the active search filters a user has
//! applied, and [`FacetCatalog`], the lists of filterable values the data layer
//! has published. The two are kept consistent by reconciliation: an active
//! filter set only ever contains values present in the corresponding published
//! list, so stale values from an old URL or an outdated catalog are dropped
//! rather than silently kept.
//!
//! # Set Semantics
//!
//! Active facet sets use [`BTreeSet`] rather than a hash set so that iteration
//! order (and therefore query-string serialization) is deterministic. Updates
//! to a set *replace* its contents; the patch semantics are "set the filters to
//! exactly these values", not additive.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Active search filters, as applied by the user.
///
/// This is the shareable slice of application state: the persistence bridge
/// mirrors it to the navigable location's query string so a search can be
/// bookmarked or sent to someone else.
///
/// Field names serialize in the wire format the data layer expects
/// (`activeKeywords`, `activePackageKinds`, `activeRepositories`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    /// Free-text search term, `None` when no text filter is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Keywords the results are filtered to.
    pub active_keywords: BTreeSet<String>,

    /// Package kinds the results are filtered to.
    pub active_package_kinds: BTreeSet<String>,

    /// Repositories the results are filtered to.
    pub active_repositories: BTreeSet<String>,
}

impl SearchQuery {
    /// Returns `true` if no filter of any kind is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.active_keywords.is_empty()
            && self.active_package_kinds.is_empty()
            && self.active_repositories.is_empty()
    }
}

/// Partial update to a [`SearchQuery`].
///
/// Each `Some` field replaces the corresponding query field wholesale; `None`
/// fields are left untouched. An empty string in `text` clears the text filter
/// (normalized to `None` by the reducer).
///
/// # Examples
///
/// ```
/// use hubstate::domain::SearchQueryPatch;
///
/// let patch = SearchQueryPatch {
///     keywords: Some(vec!["helm".to_string()]),
///     ..Default::default()
/// };
/// assert!(patch.text.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQueryPatch {
    /// Replacement text filter; empty string clears it.
    pub text: Option<String>,
    /// Replacement keyword set.
    pub keywords: Option<Vec<String>>,
    /// Replacement package-kind set.
    pub package_kinds: Option<Vec<String>>,
    /// Replacement repository set.
    pub repositories: Option<Vec<String>>,
}

/// Facet values the data layer has published as available.
///
/// A dimension with an empty list has not been published yet and imposes no
/// membership restriction; once a list is non-empty it acts as a whitelist for
/// the corresponding active set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetCatalog {
    /// Known keyword values.
    pub keywords: Vec<String>,
    /// Known package-kind values.
    pub package_kinds: Vec<String>,
    /// Known repository names.
    pub repositories: Vec<String>,
}

impl FacetCatalog {
    /// Keeps only values present in `known`, treating an empty list as unrestricted.
    fn filter_dimension<I>(known: &[String], values: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = String>,
    {
        if known.is_empty() {
            values.into_iter().collect()
        } else {
            values.into_iter().filter(|v| known.contains(v)).collect()
        }
    }

    /// Filters candidate keyword values down to published ones.
    #[must_use]
    pub fn known_keywords<I: IntoIterator<Item = String>>(&self, values: I) -> BTreeSet<String> {
        Self::filter_dimension(&self.keywords, values)
    }

    /// Filters candidate package-kind values down to published ones.
    #[must_use]
    pub fn known_package_kinds<I: IntoIterator<Item = String>>(&self, values: I) -> BTreeSet<String> {
        Self::filter_dimension(&self.package_kinds, values)
    }

    /// Filters candidate repository values down to published ones.
    #[must_use]
    pub fn known_repositories<I: IntoIterator<Item = String>>(&self, values: I) -> BTreeSet<String> {
        Self::filter_dimension(&self.repositories, values)
    }

    /// Reconciles an existing query against this catalog.
    ///
    /// Returns a new query whose active sets contain only values this catalog
    /// still publishes. The text filter is unaffected; it is not a facet.
    /// Dropped values are counted and logged at debug level.
    #[must_use]
    pub fn reconcile(&self, query: &SearchQuery) -> SearchQuery {
        let reconciled = SearchQuery {
            text: query.text.clone(),
            active_keywords: self.known_keywords(query.active_keywords.iter().cloned()),
            active_package_kinds: self.known_package_kinds(query.active_package_kinds.iter().cloned()),
            active_repositories: self.known_repositories(query.active_repositories.iter().cloned()),
        };

        let dropped = (query.active_keywords.len() - reconciled.active_keywords.len())
            + (query.active_package_kinds.len() - reconciled.active_package_kinds.len())
            + (query.active_repositories.len() - reconciled.active_repositories.len());
        if dropped > 0 {
            tracing::debug!(dropped, "dropped stale facet values during reconciliation");
        }

        reconciled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FacetCatalog {
        FacetCatalog {
            keywords: vec!["helm".to_string(), "operator".to_string()],
            package_kinds: vec!["0".to_string(), "1".to_string()],
            repositories: vec!["stable".to_string()],
        }
    }

    fn query_with_keywords(keywords: &[&str]) -> SearchQuery {
        SearchQuery {
            active_keywords: keywords.iter().map(|s| (*s).to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_query_is_empty() {
        assert!(SearchQuery::default().is_empty());
        assert!(!query_with_keywords(&["helm"]).is_empty());
    }

    #[test]
    fn reconcile_drops_unknown_values() {
        let query = query_with_keywords(&["helm", "ghost"]);
        let reconciled = catalog().reconcile(&query);

        assert_eq!(
            reconciled.active_keywords,
            ["helm".to_string()].into_iter().collect()
        );
    }

    #[test]
    fn reconcile_preserves_text() {
        let mut query = query_with_keywords(&["ghost"]);
        query.text = Some("ingress".to_string());

        let reconciled = catalog().reconcile(&query);
        assert_eq!(reconciled.text.as_deref(), Some("ingress"));
        assert!(reconciled.active_keywords.is_empty());
    }

    #[test]
    fn unpublished_dimension_is_unrestricted() {
        let query = query_with_keywords(&["anything"]);
        let reconciled = FacetCatalog::default().reconcile(&query);
        assert_eq!(reconciled, query);
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let json = serde_json::to_string(&query_with_keywords(&["helm"])).unwrap();
        assert!(json.contains("activeKeywords"));
        assert!(json.contains("activePackageKinds"));
    }
}
