//! Actions describing requested state transitions.
//!
//! This module defines the [`Action`] type, the tagged vocabulary of state
//! changes a view adapter (or the data layer) can request. Actions are
//! constructed by the caller, handed to [`Store::dispatch`](crate::app::Store::dispatch),
//! consumed exactly once by the reducer, and then discarded.
//!
//! Actions carry raw, possibly invalid payloads on purpose: an unknown theme
//! name or a stale facet value is normalized by the reducer rather than
//! rejected at construction time, so dispatch can never fail.

use crate::domain::{FacetCatalog, SearchQueryPatch};

/// A requested state transition.
///
/// # Examples
///
/// ```
/// use hubstate::app::Action;
/// use hubstate::domain::SearchQueryPatch;
///
/// let actions = vec![
///     Action::UpdateTheme("darkTheme".to_string()),
///     Action::UpdateSearchQuery(SearchQueryPatch {
///         text: Some("ingress".to_string()),
///         ..Default::default()
///     }),
///     Action::ResetSearchQuery,
/// ];
/// assert_eq!(actions.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switches the active theme.
    ///
    /// Carries the raw theme name as entered or persisted. Names outside the
    /// closed theme set are substituted with the default theme by the reducer;
    /// the caller is never notified of the substitution.
    UpdateTheme(String),

    /// Merges a partial update into the current search query.
    ///
    /// Set-valued patch fields replace the corresponding set wholesale
    /// ("set the filters to exactly these values"). Facet values the current
    /// catalog does not publish are dropped before the merge commits.
    UpdateSearchQuery(SearchQueryPatch),

    /// Replaces the search query with the empty default.
    ResetSearchQuery,

    /// Installs the facet catalog published by the data layer.
    ///
    /// Also re-reconciles the active search query against the new catalog,
    /// dropping members that are no longer published.
    PublishFacets(FacetCatalog),
}

impl Action {
    /// Short name of the action variant, used for tracing spans.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UpdateTheme(_) => "update_theme",
            Self::UpdateSearchQuery(_) => "update_search_query",
            Self::ResetSearchQuery => "reset_search_query",
            Self::PublishFacets(_) => "publish_facets",
        }
    }
}
