//! One-way mirror between committed state and the persistence surfaces.
//!
//! The [`PersistenceBridge`] owns the two host surfaces (preference storage
//! and the navigable location) and does two jobs:
//!
//! 1. **Boot reconstruction**: [`PersistenceBridge::restore`] rebuilds the
//!    initial [`AppState`] by reading the theme from storage, then the search
//!    query from the location, falling back to hard defaults when either is
//!    absent or corrupt.
//! 2. **Mirroring**: [`PersistenceBridge::mirror`] writes the relevant slice
//!    of every committed snapshot back out (theme to storage, query to the
//!    location), skipping surfaces whose slice did not change.
//!
//! Persistence is a best-effort side channel, not a correctness dependency:
//! every failure here is logged via `tracing` and swallowed. A state update
//! always succeeds even under total persistence failure, and the store never
//! hears about a failed write.
//!
//! Facet reconciliation is deliberately *not* done here. At boot the facet
//! catalog is still empty (the data layer has not answered yet), so the
//! restored query is taken as-is; stale values are dropped by the reducer
//! when a `PublishFacets` action installs the real catalog.

use crate::app::state::AppState;
use crate::app::store::{Store, Subscription};
use crate::domain::{SearchQuery, ThemeName};
use crate::persist::backend::{Location, PreferenceStore};
use crate::persist::urlquery;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage key the active theme is persisted under.
pub const THEME_KEY: &str = "theme";

/// Mirrors committed state to durable storage and the location, and
/// reconstructs initial state from them at boot.
///
/// # Examples
///
/// ```
/// use hubstate::app::{Action, Store};
/// use hubstate::domain::ThemeName;
/// use hubstate::persist::{MemoryLocation, MemoryStore, PersistenceBridge, PreferenceStore};
///
/// let prefs = MemoryStore::default();
/// let mut bridge = PersistenceBridge::new(prefs.clone(), MemoryLocation::default(), ThemeName::Default);
///
/// let store = Store::new(bridge.restore());
/// let _sub = bridge.attach(&store);
///
/// store.dispatch(Action::UpdateTheme("darkTheme".to_string()));
/// assert_eq!(prefs.read("theme").unwrap().as_deref(), Some("darkTheme"));
/// ```
pub struct PersistenceBridge<S, L> {
    prefs: S,
    location: L,
    default_theme: ThemeName,

    /// Last mirrored theme, to skip redundant storage writes.
    last_theme: Option<ThemeName>,

    /// Last mirrored query, to skip redundant location replacements.
    last_query: Option<SearchQuery>,
}

impl<S: PreferenceStore, L: Location> PersistenceBridge<S, L> {
    /// Creates a bridge over the given host surfaces.
    ///
    /// `default_theme` is what boot falls back to when storage has no usable
    /// theme entry.
    #[must_use]
    pub fn new(prefs: S, location: L, default_theme: ThemeName) -> Self {
        Self {
            prefs,
            location,
            default_theme,
            last_theme: None,
            last_query: None,
        }
    }

    /// Reconstructs the initial application state from the persistence
    /// surfaces.
    ///
    /// Reads storage (theme) first, then the location (search query). Never
    /// fails: an unreadable surface or an unknown persisted theme name is
    /// logged and replaced with the default. The restored values become the
    /// baseline for change detection, so attaching the bridge does not
    /// immediately rewrite surfaces that are already current.
    pub fn restore(&mut self) -> AppState {
        let _span = tracing::debug_span!("restore_state").entered();

        let theme = match self.prefs.read(THEME_KEY) {
            Ok(Some(raw)) => ThemeName::parse_or_default(&raw),
            Ok(None) => self.default_theme,
            Err(e) => {
                tracing::warn!(error = %e, "preference storage unreadable, using default theme");
                self.default_theme
            }
        };

        let search_query = match self.location.read_query() {
            Ok(Some(raw)) => urlquery::parse(&raw),
            Ok(None) => SearchQuery::default(),
            Err(e) => {
                tracing::warn!(error = %e, "location unreadable, using empty search query");
                SearchQuery::default()
            }
        };

        tracing::debug!(
            theme = %theme,
            has_query = !search_query.is_empty(),
            "state restored from persistence"
        );

        self.last_theme = Some(theme);
        self.last_query = Some(search_query.clone());

        AppState::new(theme, search_query)
    }

    /// Mirrors a committed snapshot to the persistence surfaces.
    ///
    /// Each surface is only written when its slice actually changed since the
    /// last mirror (or restore). Failures are logged and swallowed; the next
    /// change retries the write.
    pub fn mirror(&mut self, state: &AppState) {
        let _span = tracing::debug_span!("mirror_state").entered();

        let theme = state.prefs.theme;
        if self.last_theme != Some(theme) {
            match self.prefs.write(THEME_KEY, theme.as_str()) {
                Ok(()) => {
                    tracing::debug!(theme = %theme, "theme mirrored to storage");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to persist theme, continuing");
                }
            }
            self.last_theme = Some(theme);
        }

        if self.last_query.as_ref() != Some(&state.search_query) {
            let raw = urlquery::serialize(&state.search_query);
            match self.location.replace_query(&raw) {
                Ok(()) => {
                    tracing::debug!(query = %raw, "search query mirrored to location");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to update location, continuing");
                }
            }
            self.last_query = Some(state.search_query.clone());
        }
    }

    /// Subscribes the bridge to a store, mirroring every committed snapshot.
    ///
    /// Consumes the bridge; it lives inside the subscription callback for the
    /// rest of the session. The returned [`Subscription`] can cancel
    /// mirroring, though most hosts simply keep it for the session lifetime.
    pub fn attach(self, store: &Store) -> Subscription
    where
        S: 'static,
        L: 'static,
    {
        let bridge = RefCell::new(self);
        store.subscribe(move |snapshot: &Rc<AppState>| {
            bridge.borrow_mut().mirror(snapshot);
        })
    }
}
