//! Persistence surface abstractions.
//!
//! This module defines the two traits the persistence bridge writes through:
//! [`PreferenceStore`] for durable key-value storage (the browser's local
//! storage, a file, an in-memory map) and [`Location`] for the navigable
//! location's query string. They are the seam between the core and the host
//! environment: a web host backs them with `localStorage` and the history
//! API, tests and native hosts use the file and in-memory implementations
//! shipped in this crate.
//!
//! # Design Philosophy
//!
//! The traits are minimal and focused on what the bridge actually does, not a
//! generic storage API. Both surfaces are best-effort side channels: the
//! bridge logs and swallows their failures, so implementations should report
//! errors honestly rather than papering over them.

use crate::domain::error::Result;

/// Durable string key-value storage.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::persist::JsonFileStore): JSON file with atomic writes
/// - [`MemoryStore`](crate::persist::MemoryStore): in-memory map for tests and embedding
pub trait PreferenceStore {
    /// Reads the value stored under `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage is unavailable or full
    /// (quota exceeded). Callers in this crate treat such failures as
    /// non-fatal.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The navigable location's query-string surface.
///
/// Search state is mirrored here instead of private storage because it is
/// meant to be shareable: the query string is the bookmarkable representation
/// of the current search.
pub trait Location {
    /// Returns the current raw query string, `Ok(None)` when there is none.
    ///
    /// Implementations may include or omit a leading `?`; the parser accepts
    /// both.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be read.
    fn read_query(&self) -> Result<Option<String>>;

    /// Replaces the query string with `query` (no leading `?`).
    ///
    /// An empty `query` clears the query string. This must not trigger a
    /// navigation; hosts typically back it with a history-replace operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be updated.
    fn replace_query(&mut self, query: &str) -> Result<()>;
}
