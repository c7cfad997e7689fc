//! In-memory persistence surfaces.
//!
//! Shared-handle implementations of [`PreferenceStore`] and [`Location`] for
//! tests and for hosts without durable storage. Cloning a handle shares the
//! underlying data, so a host can move one clone into the persistence bridge
//! and keep another for inspection.

use crate::domain::error::Result;
use crate::persist::backend::{Location, PreferenceStore};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory key-value store.
///
/// # Examples
///
/// ```
/// use hubstate::persist::{MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::default();
/// store.write("theme", "darkTheme").unwrap();
/// assert_eq!(store.read("theme").unwrap().as_deref(), Some("darkTheme"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// In-memory query-string holder.
///
/// Stands in for the browser location in tests and native embeddings.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    query: Rc<RefCell<Option<String>>>,
}

impl MemoryLocation {
    /// Creates a location already carrying a query string, as if the session
    /// were opened from a shared URL.
    #[must_use]
    pub fn with_query(raw: impl Into<String>) -> Self {
        Self {
            query: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Returns the current query string, if any.
    #[must_use]
    pub fn query(&self) -> Option<String> {
        self.query.borrow().clone()
    }
}

impl Location for MemoryLocation {
    fn read_query(&self) -> Result<Option<String>> {
        Ok(self.query.borrow().clone())
    }

    fn replace_query(&mut self, query: &str) -> Result<()> {
        *self.query.borrow_mut() = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_entries() {
        let mut store = MemoryStore::default();
        let observer = store.clone();

        store.write("theme", "darkTheme").unwrap();
        assert_eq!(observer.read("theme").unwrap().as_deref(), Some("darkTheme"));
    }

    #[test]
    fn replacing_with_empty_clears_the_query() {
        let mut location = MemoryLocation::with_query("text=ingress");
        location.replace_query("").unwrap();
        assert_eq!(location.query(), None);
    }
}
