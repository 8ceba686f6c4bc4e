//! # Folio State
//!
//! Persisted UI state for the folio site: the navigation rail's collapse
//! flag, the light/dark theme, and audio cue settings, plus a scroll-spy
//! that tracks which labeled section is in view.
//!
//! Each domain owns its value behind a `tokio::sync::watch` channel:
//! accessors read it, mutators replace it, persist it best-effort, and wake
//! subscribers. Nothing here returns an error; every failure recovers to a
//! safe default locally.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use folio_core::FolioConfig;
//! use folio_state::{Capabilities, Shell, RootAttributeSink, TracingSynth, InlineScheduler};
//! use folio_storage::{BestEffortStore, InMemoryStore};
//!
//! let shell = Shell::open(
//!     FolioConfig::default(),
//!     Capabilities {
//!         store: Arc::new(BestEffortStore::new(InMemoryStore::new())),
//!         sink: Arc::new(RootAttributeSink::new()),
//!         synth: Arc::new(TracingSynth),
//!         scheduler: Arc::new(InlineScheduler),
//!     },
//! );
//! shell.on_theme_toggle();
//! ```

pub mod audio;
pub mod feedback;
pub mod layout;
pub mod navigation;
pub mod preference;
pub mod scheduler;
pub mod scroll_spy;
pub mod shell;
pub mod sink;
pub mod testing;
pub mod viewport;

pub use audio::{Cue, SilentSynth, TracingSynth};
pub use feedback::FeedbackState;
pub use layout::LayoutState;
pub use navigation::{NavItem, NavLink, NavTarget, NavigationView, default_links};
pub use preference::PreferenceState;
pub use scheduler::{InlineScheduler, TokioScheduler};
pub use scroll_spy::{ScrollSpy, SpyPhase};
pub use shell::{Capabilities, Shell};
pub use sink::{NoopSink, RootAttributeSink};
pub use viewport::{UnavailableObserver, ViewportHub, Visibility};
