//! # Toolbox Config Errors
//!
//! Defines [`ConfigError`] for reading and writing settings documents.
use thiserror::Error;

use crate::storage::error::StorageError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported configuration format for '{0}'")]
    UnsupportedFormat(String),

    #[error("Serialization to '{format}' failed: {source}")]
    Serialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Deserialization from '{format}' failed: {source}")]
    Deserialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Failed to read configuration: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
