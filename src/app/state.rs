//! Application state snapshot types.
//!
//! This module defines [`AppState`], the single source of truth for the UI
//! session, along with the [`Preferences`] slice it contains. It is a plain
//! value type: the store owns the current snapshot, replaces it wholesale on
//! every committed action, and hands out shared read-only handles. Nothing in
//! the application ever holds a mutable reference to a published snapshot.
//!
//! # State Components
//!
//! - **Preferences**: durable user preferences, currently the active theme
//! - **Search Query**: the in-flight search filters, mirrored to the URL
//! - **Facet Catalog**: the available facet values the data layer has published
//!
//! View adapters read whichever slice they need directly from a snapshot; the
//! snapshot is immutable, so the whole value doubles as the read-only
//! projection the view layer is given.

use crate::domain::{FacetCatalog, SearchQuery, ThemeName};
use serde::{Deserialize, Serialize};

/// Durable user preferences.
///
/// Kept as its own struct so the persistence bridge can mirror the preference
/// slice independently of the shareable search-query slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// The active theme.
    pub theme: ThemeName,
}

/// The complete application state at one instant.
///
/// Created once at boot (hydrated by the persistence bridge), replaced on
/// every dispatched action, and discarded on session teardown. Snapshots are
/// compared by reference (`Rc::ptr_eq`) by view adapters that only want to
/// know whether anything changed, and by value where field-level comparison
/// matters.
///
/// # Examples
///
/// ```
/// use hubstate::app::AppState;
/// use hubstate::domain::ThemeName;
///
/// let state = AppState::default();
/// assert_eq!(state.prefs.theme, ThemeName::Default);
/// assert!(state.search_query.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Durable user preferences.
    pub prefs: Preferences,

    /// Active search filters.
    pub search_query: SearchQuery,

    /// Facet values currently published by the data layer.
    ///
    /// Empty dimensions mean "not yet published" and impose no membership
    /// restriction on the corresponding active set.
    pub facets: FacetCatalog,
}

impl AppState {
    /// Creates a state snapshot from hydrated boot values.
    ///
    /// The facet catalog always starts empty; it is populated later by a
    /// `PublishFacets` action once the data layer has results.
    #[must_use]
    pub fn new(theme: ThemeName, search_query: SearchQuery) -> Self {
        Self {
            prefs: Preferences { theme },
            search_query,
            facets: FacetCatalog::default(),
        }
    }
}
