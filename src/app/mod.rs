//! Application layer: state snapshot, actions, reducer, and store.
//!
//! This module implements the unidirectional data flow at the heart of the
//! crate:
//!
//! ```text
//! View Adapter → dispatch(Action) → Reducer → new snapshot
//!                                                 │
//!          subscribers (view adapters, persistence bridge) ←┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Tagged transition requests dispatched by view adapters
//! - [`reducer`]: Pure `(state, action) -> state` transition function
//! - [`state`]: Snapshot types owned by the store
//! - [`store`]: Single-writer store with the subscribe/dispatch contract
//!
//! # Example
//!
//! ```
//! use hubstate::app::{Action, AppState, Store};
//!
//! let store = Store::new(AppState::default());
//! let _sub = store.subscribe(|snapshot| {
//!     let _ = snapshot.prefs.theme;
//! });
//! store.dispatch(Action::ResetSearchQuery);
//! ```

pub mod actions;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, Preferences};
pub use store::{Store, Subscription};
