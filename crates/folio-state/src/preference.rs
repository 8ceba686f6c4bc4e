//! Preference state: light or dark theme.

use std::sync::Arc;

use folio_core::{PersistenceAdapter, PresentationSink, Theme};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Selected theme, persisted and projected onto a [`PresentationSink`]
///
/// The sink is the one global touchpoint of the core; it is applied once at
/// load and again on every change, and never cleared independently.
pub struct PreferenceState {
    store: Arc<dyn PersistenceAdapter>,
    sink: Arc<dyn PresentationSink>,
    key: String,
    theme: watch::Sender<Theme>,
}

impl PreferenceState {
    /// Load the theme persisted under `key`, falling back to `default`
    pub fn load(
        store: Arc<dyn PersistenceAdapter>,
        sink: Arc<dyn PresentationSink>,
        key: impl Into<String>,
        default: Theme,
    ) -> Self {
        let key = key.into();
        let theme = match store.get(&key) {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "Ignoring stored theme");
                default
            }),
            None => default,
        };
        debug!(key = %key, theme = %theme, "Loaded theme preference");
        sink.apply(theme);
        let (theme, _) = watch::channel(theme);
        Self {
            store,
            sink,
            key,
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.borrow()
    }

    /// Select `theme`, persist it, re-skin, and notify subscribers
    pub fn set_theme(&self, theme: Theme) {
        self.update(|_| theme);
    }

    pub fn toggle_theme(&self) {
        self.update(Theme::toggled);
    }

    /// Change, persist, and re-skin under the channel's lock, so the sink
    /// always ends on the stored theme
    fn update(&self, change: impl FnOnce(Theme) -> Theme) {
        self.theme.send_modify(|theme| {
            *theme = change(*theme);
            self.store.set(&self.key, theme.as_str());
            self.sink.apply(*theme);
            debug!(theme = %theme, "Theme changed");
        });
    }

    /// Receiver that observes every change
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.theme.subscribe()
    }
}
