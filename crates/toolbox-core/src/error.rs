//! # Toolbox Core Errors
//!
//! Crate-wide [`Error`] wrapping the typed errors of each subsystem, for
//! callers that drive several facilities at once.
use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::storage::error::StorageError;
use crate::time_format::error::TimeFormatError;
use crate::value_provider::error::ValueProviderError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Storage dispatch or backend failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Value provider lookup or evaluation failure
    #[error("Value provider error: {0}")]
    ValueProvider(#[from] ValueProviderError),

    /// Date pattern parse or range failure
    #[error("Time format error: {0}")]
    TimeFormat(#[from] TimeFormatError),

    /// Configuration document failure
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
