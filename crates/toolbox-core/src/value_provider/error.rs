//! # Toolbox Value Provider Errors
//!
//! Defines [`ValueProviderError`], covering registry lookups, argument
//! contract violations and failures inside the built-in providers.
use thiserror::Error;

use crate::time_format::error::TimeFormatError;

#[derive(Debug, Error)]
pub enum ValueProviderError {
    #[error("Value provider '{name}' is not registered")]
    ProviderNotFound { name: String },

    #[error("Value provider '{provider}' expected {expected} argument(s) but had {actual}")]
    InvalidArgumentCount {
        provider: String,
        expected: String,
        actual: usize,
    },

    #[error("Failed to lookup '{name}' in env")]
    EnvVarNotFound { name: String },

    #[error("Failed to cast to '{target}': unsupported type")]
    UnsupportedCast { target: String },

    #[error("Failed to cast '{value}' to time: {source}")]
    CastFailed {
        value: String,
        #[source]
        source: TimeFormatError,
    },

    #[error("Cannot interpret '{value}' as a time")]
    InvalidTime { value: String },

    #[error("Shifting time by {amount} {unit} is out of range")]
    TimeOutOfRange { amount: i64, unit: String },

    #[error("Failed to lookup: {key}")]
    KeyNotFound { key: String },

    #[error("No dictionary stored in context under '{context_key}'")]
    DictionaryNotFound { context_key: String },
}

impl ValueProviderError {
    pub(crate) fn argument_count(provider: &str, expected: impl Into<String>, actual: usize) -> Self {
        ValueProviderError::InvalidArgumentCount {
            provider: provider.to_string(),
            expected: expected.into(),
            actual,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValueProviderError>;
