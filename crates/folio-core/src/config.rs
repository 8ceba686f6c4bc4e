//! Configuration types for the state core

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sound::SoundSettings;
use crate::theme::Theme;

/// Main state-core configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Keys the three domains persist under
    pub keys: StorageKeys,

    /// Theme used when nothing valid is stored
    pub default_theme: Theme,

    /// Sound settings used when nothing valid is stored
    pub default_sound: SoundSettings,

    /// Gap between the two tones of a toggle cue, and between enabling
    /// sound and its confirmation cue
    pub toggle_delay_ms: u64,

    /// Visible fraction at which a region counts as intersecting
    pub spy_threshold: f32,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            default_theme: Theme::Dark,
            default_sound: SoundSettings::default(),
            toggle_delay_ms: 50,
            spy_threshold: 0.5,
        }
    }
}

impl FolioConfig {
    /// Create a config for tests (no cue delay)
    pub fn testing() -> Self {
        Self {
            toggle_delay_ms: 0,
            ..Default::default()
        }
    }

    pub fn toggle_delay(&self) -> Duration {
        Duration::from_millis(self.toggle_delay_ms)
    }

    /// Check ranges, returning the config with the default volume clamped
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if !(self.spy_threshold > 0.0 && self.spy_threshold <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "spy_threshold",
                reason: format!("{} is outside (0, 1]", self.spy_threshold),
            });
        }
        for (field, key) in [
            ("keys.layout", &self.keys.layout),
            ("keys.theme", &self.keys.theme),
            ("keys.sound", &self.keys.sound),
        ] {
            if key.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "key must not be empty".to_string(),
                });
            }
        }
        self.default_sound = self.default_sound.clamped();
        Ok(self)
    }
}

/// Storage keys for each persisted domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub layout: String,
    pub theme: String,
    pub sound: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            layout: "sidebar-collapsed".to_string(),
            theme: "theme".to_string(),
            sound: "sound-settings".to_string(),
        }
    }
}
