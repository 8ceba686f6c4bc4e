//! Presentation sinks for the selected theme.

use std::sync::Arc;

use folio_core::{PresentationSink, Theme};
use parking_lot::RwLock;
use tracing::trace;

/// Mirrors the `data-theme` attribute a document root would carry
///
/// Cloning shares the attribute, so the host keeps one clone to read from
/// while the preference state holds another.
#[derive(Debug, Clone, Default)]
pub struct RootAttributeSink {
    current: Arc<RwLock<Option<Theme>>>,
}

impl RootAttributeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Theme last applied, if any
    pub fn current(&self) -> Option<Theme> {
        *self.current.read()
    }

    /// Attribute value, e.g. `data-theme="dark"`
    pub fn attribute(&self) -> Option<&'static str> {
        self.current().map(|theme| theme.as_str())
    }
}

impl PresentationSink for RootAttributeSink {
    fn apply(&self, theme: Theme) {
        trace!(theme = %theme, "Applying root theme attribute");
        *self.current.write() = Some(theme);
    }
}

/// Sink for hosts with nothing to re-skin
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl PresentationSink for NoopSink {
    fn apply(&self, _theme: Theme) {}
}
