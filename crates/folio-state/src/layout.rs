//! Layout state: whether the navigation rail is collapsed.

use std::sync::Arc;

use folio_core::PersistenceAdapter;
use tokio::sync::watch;
use tracing::debug;

/// Collapse flag of the navigation rail
///
/// Only the exact stored string `"true"` reads as collapsed; anything else,
/// including a missing value, is expanded.
pub struct LayoutState {
    store: Arc<dyn PersistenceAdapter>,
    key: String,
    collapsed: watch::Sender<bool>,
}

impl LayoutState {
    /// Load the flag persisted under `key`
    pub fn load(store: Arc<dyn PersistenceAdapter>, key: impl Into<String>) -> Self {
        let key = key.into();
        let collapsed = store.get(&key).as_deref() == Some("true");
        debug!(key = %key, collapsed, "Loaded layout state");
        let (collapsed, _) = watch::channel(collapsed);
        Self {
            store,
            key,
            collapsed,
        }
    }

    pub fn collapsed(&self) -> bool {
        *self.collapsed.borrow()
    }

    /// Set the flag, persist it, and notify subscribers
    pub fn set_collapsed(&self, collapsed: bool) {
        self.update(|_| collapsed);
    }

    pub fn toggle_collapse(&self) {
        self.update(|collapsed| !collapsed);
    }

    /// Read, change, and persist under the channel's lock
    fn update(&self, change: impl FnOnce(bool) -> bool) {
        self.collapsed.send_modify(|collapsed| {
            *collapsed = change(*collapsed);
            self.store
                .set(&self.key, if *collapsed { "true" } else { "false" });
            debug!(collapsed = *collapsed, "Layout changed");
        });
    }

    /// Receiver that observes every change
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.collapsed.subscribe()
    }
}
