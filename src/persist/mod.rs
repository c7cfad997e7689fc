//! Persistence layer mirroring state to durable surfaces.
//!
//! This module implements the bridge between in-memory state and the two
//! durable surfaces the application uses: key-value preference storage (the
//! active theme) and the navigable location's query string (the shareable
//! search filters). It reconstructs initial state from both at boot.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] and [`Location`] traits, the host seam
//! - `bridge`: boot reconstruction and best-effort mirroring
//! - `json`: JSON file-backed preference store with atomic writes
//! - `memory`: in-memory surfaces for tests and embedding
//! - `urlquery`: the documented query-string codec for search state

pub mod backend;
pub mod bridge;
pub mod json;
pub mod memory;
pub mod urlquery;

pub use backend::{Location, PreferenceStore};
pub use bridge::{PersistenceBridge, THEME_KEY};
pub use json::JsonFileStore;
pub use memory::{MemoryLocation, MemoryStore};
