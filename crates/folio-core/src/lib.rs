//! # Folio Core
//!
//! Core traits, types, and errors for the folio UI-state core.
//!
//! This crate provides the capability seams that let the same state
//! containers run against a browser host, a desktop host, or test doubles.
//!
//! ## Key Traits
//!
//! - [`KeyValueStore`]: Fallible string key-value backend
//! - [`PersistenceAdapter`]: Infallible, best-effort view of a store
//! - [`PresentationSink`]: Where the selected theme is projected
//! - [`ToneSynth`]: Audio cue synthesis
//! - [`Scheduler`]: Deferred one-shot tasks
//! - [`ViewportObserver`]: Region visibility observation
//!
//! ## Key Types
//!
//! - [`Theme`]: Light or dark presentation
//! - [`SoundSettings`]: Cue enablement and volume
//! - [`SectionId`]: Label of an observed content region
//! - [`FolioConfig`]: Keys, defaults, and timings

pub mod config;
pub mod error;
pub mod section;
pub mod sound;
pub mod theme;
pub mod traits;

// Re-export main types
pub use config::{FolioConfig, StorageKeys};
pub use error::*;
pub use section::{IntersectionEntry, SectionId};
pub use sound::{DEFAULT_VOLUME, SoundSettings};
pub use theme::Theme;
pub use traits::*;
