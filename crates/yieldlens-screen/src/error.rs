//! Error types for screening

use thiserror::Error;

/// Screening errors
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be written as TOML
    #[error("Configuration serialization error: {0}")]
    ConfigSerialization(#[from] toml::ser::Error),

    /// Candidate records could not be parsed
    #[error("Invalid candidate records: {0}")]
    Candidates(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreenError>;
