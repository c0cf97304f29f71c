//! # Toolbox Storage Errors
//!
//! Defines [`StorageError`], covering URL parsing, scheme dispatch,
//! backend construction and the I/O performed by the built-in backends.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid path: '{path}'")]
    InvalidPath { path: String },

    #[error("Failed to lookup url schema '{scheme}' in {url}")]
    SchemeNotFound { scheme: String, url: String },

    #[error("Unsupported scheme {url}")]
    UnsupportedScheme { url: String },

    #[error("Failed to get storage for url {url}: {source}")]
    ProviderFactoryFailed {
        url: String,
        #[source]
        source: Box<StorageError>,
    },

    #[error("Object not found: {url}")]
    ObjectNotFound { url: String },

    #[error("I/O error during operation '{operation}' on '{url}': {source}")]
    Io {
        url: String,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage operation '{operation}' failed for '{url}': {message}")]
    OperationFailed {
        operation: String,
        url: String,
        message: String,
    },

    #[error("Storage lock poisoned in '{0}'")]
    LockPoisoned(String),
}

// Helper for creating Io errors, ensuring the URL is always included.
impl StorageError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return StorageError::ObjectNotFound { url };
        }
        StorageError::Io {
            source,
            operation: operation.into(),
            url,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
