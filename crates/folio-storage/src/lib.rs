//! # Folio Storage
//!
//! Key-value persistence backends for folio UI state.
//!
//! ## Features
//!
//! - **InMemoryStore**: `DashMap`-backed store for tests and ephemeral sessions
//! - **JsonFileStore**: single JSON file that survives restarts
//! - **UnavailableStore**: always fails, for hosts with storage disabled
//! - **BestEffortStore**: wraps any backend into the infallible
//!   [`PersistenceAdapter`] the state containers consume
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use folio_storage::{BestEffortStore, JsonFileStore};
//!
//! let backend = JsonFileStore::open("state.json")?;
//! let store = Arc::new(BestEffortStore::new(backend));
//!
//! store.set("theme", "light");
//! assert_eq!(store.get("theme").as_deref(), Some("light"));
//! ```

pub mod best_effort;
pub mod file;
pub mod memory;

// Re-exports
pub use best_effort::BestEffortStore;
pub use file::JsonFileStore;
pub use memory::{InMemoryStore, UnavailableStore};

pub use folio_core::{KeyValueStore, PersistenceAdapter, StorageError};
