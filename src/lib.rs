//! Hubstate: the state core of a package-discovery web UI.
//!
//! Hubstate provides:
//! - A single-writer shared state store with a subscribe/dispatch contract
//! - A pure reducer for theme preference and search-query transitions
//! - A persistence bridge mirroring committed state to durable storage and
//!   the navigable location's query string, and rehydrating it at boot
//! - The shared vocabulary types (packages, repositories, search queries)
//!   the surrounding application is written against
//!
//! # Architecture
//!
//! The crate follows a unidirectional data flow pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  View Adapters (out of scope)                       │  ← read snapshots,
//! └─────────────────────────────────────────────────────┘    dispatch actions
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← single writer
//! │  - Store: snapshot ownership, notification          │
//! │  - Reducer: pure (state, action) -> state           │
//! │  - Actions: tagged transition requests              │
//! └─────────────────────────────────────────────────────┘
//!                        │ committed snapshots
//! ┌─────────────────────────────────────────────────────┐
//! │  Persistence Layer (persist/)                       │  ← best-effort
//! │  - Bridge: boot hydration + mirroring               │    side channel
//! │  - Surfaces: key-value storage, location query      │
//! │  - Codec: documented query-string format            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Observability Layers                      │
//! │  - Vocabulary types (domain/)                       │
//! │  - Error types (domain/error)                       │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Store, reducer, actions, and the state snapshot
//! - [`domain`]: Vocabulary types (themes, queries, packages, errors)
//! - [`persist`]: Persistence surfaces, bridge, and query-string codec
//! - [`observability`]: Optional tracing subscriber setup
//!
//! # Session Lifecycle
//!
//! 1. The host constructs its two persistence surfaces (a
//!    [`JsonFileStore`](persist::JsonFileStore) and an in-memory location,
//!    or browser-backed implementations of the same traits).
//! 2. [`boot`] rehydrates the initial state through the bridge, creates the
//!    store, and attaches the bridge as a subscriber.
//! 3. View adapters subscribe, read snapshots, and dispatch actions for the
//!    rest of the session; every committed change is mirrored back out.
//! 4. When the data layer has results, it dispatches
//!    [`Action::PublishFacets`](app::Action::PublishFacets) so stale
//!    persisted filters are reconciled away.
//!
//! # Example
//!
//! ```
//! use hubstate::persist::{MemoryLocation, MemoryStore};
//! use hubstate::{boot, Action, ThemeName};
//!
//! let location = MemoryLocation::with_query("keywords=helm");
//! let (store, _bridge) = boot(MemoryStore::default(), location, ThemeName::Default);
//!
//! assert_eq!(store.state().search_query.active_keywords.len(), 1);
//!
//! store.dispatch(Action::UpdateTheme("darkTheme".to_string()));
//! assert_eq!(store.state().prefs.theme, ThemeName::Dark);
//! ```

pub mod app;
pub mod domain;
pub mod persist;

pub mod observability;

pub use app::{reduce, Action, AppState, Preferences, Store, Subscription};
pub use domain::{
    FacetCatalog, HubStateError, Result, SearchQuery, SearchQueryPatch, ThemeName,
};
pub use persist::{Location, PersistenceBridge, PreferenceStore};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Host configuration for the state core.
///
/// Hosts that embed the crate directly can fill this in code; native hosts
/// can load it from a TOML file:
///
/// ```toml
/// storage_path = "/home/user/.local/share/hub/preferences.json"
/// default_theme = "theme"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the JSON preference store keeps its file.
    ///
    /// Only used by hosts that persist preferences through
    /// [`JsonFileStore`](persist::JsonFileStore); browser hosts back the
    /// [`PreferenceStore`](persist::PreferenceStore) trait themselves.
    pub storage_path: PathBuf,

    /// Theme used when storage has no usable theme entry. Default: `"theme"`.
    pub default_theme: ThemeName,

    /// Tracing filter for [`observability::init_tracing`].
    ///
    /// Accepts anything `EnvFilter` understands. Default: `"info"` when unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(".hubstate/preferences.json"),
            default_theme: ThemeName::Default,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults, so a partial file is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| HubStateError::Config(format!("failed to parse config: {e}")))
    }
}

/// Boots a UI session: hydrates state, builds the store, attaches the bridge.
///
/// The returned [`Subscription`] keeps the persistence bridge mirroring; most
/// hosts hold it for the session lifetime (dropping it does not cancel).
///
/// # Example
///
/// ```
/// use hubstate::persist::{MemoryLocation, MemoryStore};
/// use hubstate::{boot, ThemeName};
///
/// let (store, _bridge) = boot(MemoryStore::default(), MemoryLocation::default(), ThemeName::Default);
/// assert!(store.state().search_query.is_empty());
/// ```
pub fn boot<S, L>(prefs: S, location: L, default_theme: ThemeName) -> (Store, Subscription)
where
    S: PreferenceStore + 'static,
    L: Location + 'static,
{
    tracing::debug!("booting hubstate session");

    let mut bridge = PersistenceBridge::new(prefs, location, default_theme);
    let store = Store::new(bridge.restore());
    let subscription = bridge.attach(&store);

    (store, subscription)
}
