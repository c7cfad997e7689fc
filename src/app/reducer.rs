//! Pure state transition function.
//!
//! This module implements [`reduce`], the single place where state
//! transitions are computed. The reducer is a pure function: it performs no
//! I/O, touches no shared state, and always produces the same output for the
//! same `(state, action)` pair. Side effects (persistence, re-rendering) are
//! downstream reactions to the store's notification, never part of reduction.
//!
//! # No-Op Transitions
//!
//! Reducing an action that changes nothing (for example, updating to the
//! already-active theme) still produces a fresh snapshot and therefore one
//! notification cycle. There is deliberately no equality short-circuit:
//! subscribers are required to be idempotent to redundant notifications, and
//! in exchange the reducer stays trivially predictable.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::domain::{SearchQuery, ThemeName};

/// Computes the successor state for a dispatched action.
///
/// The input snapshot is left untouched; the result is always a newly built
/// value, so reference-equality checks against previous snapshots remain
/// meaningful to callers holding them.
///
/// Malformed payloads are normalized rather than rejected:
/// - unknown theme names fall back to the default theme
/// - facet values outside the published catalog are dropped before a
///   search-query merge commits
/// - an empty `text` patch value clears the text filter
///
/// # Examples
///
/// ```
/// use hubstate::app::{reduce, Action, AppState};
/// use hubstate::domain::ThemeName;
///
/// let state = AppState::default();
/// let next = reduce(&state, &Action::UpdateTheme("darkTheme".to_string()));
/// assert_eq!(next.prefs.theme, ThemeName::Dark);
/// assert_eq!(state.prefs.theme, ThemeName::Default);
/// ```
#[must_use]
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let _span = tracing::debug_span!("reduce", action_kind = action.kind()).entered();

    match action {
        Action::UpdateTheme(name) => {
            let theme = ThemeName::parse_or_default(name);
            tracing::debug!(theme = %theme, "theme updated");

            let mut next = state.clone();
            next.prefs.theme = theme;
            next
        }

        Action::UpdateSearchQuery(patch) => {
            let mut next = state.clone();

            if let Some(text) = &patch.text {
                next.search_query.text = if text.is_empty() {
                    None
                } else {
                    Some(text.clone())
                };
            }
            if let Some(keywords) = &patch.keywords {
                next.search_query.active_keywords =
                    state.facets.known_keywords(keywords.iter().cloned());
            }
            if let Some(kinds) = &patch.package_kinds {
                next.search_query.active_package_kinds =
                    state.facets.known_package_kinds(kinds.iter().cloned());
            }
            if let Some(repositories) = &patch.repositories {
                next.search_query.active_repositories =
                    state.facets.known_repositories(repositories.iter().cloned());
            }

            tracing::debug!(
                keywords = next.search_query.active_keywords.len(),
                kinds = next.search_query.active_package_kinds.len(),
                repositories = next.search_query.active_repositories.len(),
                has_text = next.search_query.text.is_some(),
                "search query updated"
            );
            next
        }

        Action::ResetSearchQuery => {
            tracing::debug!("search query reset");

            let mut next = state.clone();
            next.search_query = SearchQuery::default();
            next
        }

        Action::PublishFacets(catalog) => {
            let mut next = state.clone();
            next.search_query = catalog.reconcile(&state.search_query);
            next.facets = catalog.clone();

            tracing::debug!(
                keywords = next.facets.keywords.len(),
                kinds = next.facets.package_kinds.len(),
                repositories = next.facets.repositories.len(),
                "facet catalog published"
            );
            next
        }
    }
}
