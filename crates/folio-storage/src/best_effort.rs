//! Best-effort façade over a fallible backend.

use folio_core::{KeyValueStore, PersistenceAdapter};
use tracing::warn;

/// Turns any [`KeyValueStore`] into a [`PersistenceAdapter`]
///
/// Backend failures are logged and swallowed: a failed read is `None`, a
/// failed write is dropped and the caller's in-memory state stays
/// authoritative.
#[derive(Debug, Default)]
pub struct BestEffortStore<S> {
    inner: S,
}

impl<S: KeyValueStore> BestEffortStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Get a reference to the backend
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: KeyValueStore> PersistenceAdapter for BestEffortStore<S> {
    fn get(&self, key: &str) -> Option<String> {
        match self.inner.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to read persisted value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.inner.set(key, value) {
            warn!(key, error = %e, "Failed to persist value");
        }
    }
}
