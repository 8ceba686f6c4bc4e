//! Error types for folio

use thiserror::Error;

/// Top-level error type for folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("Observer error: {0}")]
    Observer(#[from] ObserverError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error during storage operations
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// Backend is disabled or missing in this host
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error during deserialization
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl StorageError {
    /// Create a new I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Create a new Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a new Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a new Deserialization error
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            StorageError::Io(err.to_string())
        } else {
            StorageError::Deserialization(err.to_string())
        }
    }
}

/// Errors raised while synthesizing a cue
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio output unavailable: {0}")]
    Unavailable(String),

    #[error("Tone synthesis failed: {0}")]
    Synthesis(String),
}

/// Errors raised when registering regions for observation
#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("Viewport observation unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid intersection threshold: {0}")]
    InvalidThreshold(f32),
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(String),

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
