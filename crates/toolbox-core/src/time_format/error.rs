//! # Toolbox Time Format Errors
//!
//! Defines [`TimeFormatError`], raised when text does not conform to a
//! translated layout or a timestamp cannot be represented.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeFormatError {
    #[error("Failed to parse '{text}' with date format '{pattern}': {source}")]
    Parse {
        text: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Timestamp out of range: {seconds}s + {nanos}ns")]
    TimestampOutOfRange { seconds: i64, nanos: i64 },
}

pub type Result<T> = std::result::Result<T, TimeFormatError>;
