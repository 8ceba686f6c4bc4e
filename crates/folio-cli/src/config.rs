//! Host configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use folio_core::{ConfigError, FolioConfig};
use folio_logging::LogConfig;
use serde::{Deserialize, Serialize};

/// Everything the `folio` binary reads from its TOML file
///
/// ```toml
/// store_path = "~/.local/share/folio/state.json"
///
/// [state]
/// default_theme = "light"
/// toggle_delay_ms = 50
///
/// [logging]
/// default_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// JSON file the persisted state lives in
    pub store_path: PathBuf,

    pub state: FolioConfig,

    pub logging: LogConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("folio-state.json"),
            state: FolioConfig::default(),
            logging: LogConfig::testing(),
        }
    }
}

impl HostConfig {
    /// Read and validate the file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: HostConfig =
            toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.state = config.state.validated()?;
        Ok(config)
    }
}
