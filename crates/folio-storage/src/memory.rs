//! In-memory storage implementations
//!
//! This module provides in-memory implementations of [`KeyValueStore`],
//! suitable for testing and for sessions that should not outlive the process.

use std::collections::BTreeMap;

use dashmap::DashMap;
use folio_core::{KeyValueStore, StorageError};
use tracing::trace;

/// In-memory implementation of KeyValueStore
///
/// Uses `DashMap` for concurrent access.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with entries, as if left by a prior session
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (key, value) in entries {
            store.entries.insert(key.into(), value.into());
        }
        store
    }

    /// Get the number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of all entries, ordered by key
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|value| value.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        trace!(key, value, "Storing value");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose every operation fails
///
/// Models a host where storage is disabled (private browsing, quota
/// exhausted, sandboxed desktop).
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::unavailable(self.reason.clone()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("sidebar-collapsed").unwrap(), None);
    }

    #[test]
    fn test_with_entries_snapshot() {
        let store = InMemoryStore::with_entries([("b", "2"), ("a", "1")]);
        let keys: Vec<_> = store.snapshot().into_keys().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_unavailable_store_fails() {
        let store = UnavailableStore::new("storage disabled");
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable(_))));
    }
}
