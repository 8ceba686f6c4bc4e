//! Audio cue settings and their stored form.

use serde::{Deserialize, Serialize};

/// Volume used when nothing valid has been stored.
pub const DEFAULT_VOLUME: f32 = 0.3;

/// Whether cues play, and how loud.
///
/// `volume` is kept in `[0, 1]` by every constructor in this crate; the
/// fields stay public so hosts can build values directly, and
/// [`SoundSettings::clamped`] is applied at every write site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub enabled: bool,
    pub volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl SoundSettings {
    pub fn new(enabled: bool, volume: f32) -> Self {
        Self { enabled, volume }.clamped()
    }

    /// Returns a copy with `volume` forced into `[0, 1]`.
    ///
    /// A non-finite volume is replaced by [`DEFAULT_VOLUME`].
    pub fn clamped(self) -> Self {
        let volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        Self { volume, ..self }
    }

    /// Parse the stored JSON form, e.g. `{"enabled":true,"volume":0.3}`.
    ///
    /// Returns `None` for anything that is not a complete settings object.
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str::<SoundSettings>(raw)
            .ok()
            .map(SoundSettings::clamped)
    }

    /// Encode for storage.
    pub fn to_stored(&self) -> String {
        // Two plain fields; serializing them cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"enabled":{},"volume":{}}}"#, self.enabled, self.volume)
        })
    }
}
