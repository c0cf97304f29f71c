//! # Toolbox Date-Format Translator
//!
//! Converts the portable date pattern notation (`yyyy-MM-dd HH:mm:ss.SSS ZZ`)
//! into chrono strftime layouts and back, and formats or parses times
//! through those layouts.
//!
//! ## Key Components:
//!
//! - [`to_layout`] / [`to_pattern`]: the token translation in both directions.
//! - [`timestamp_to_string`], [`format_time`] and [`parse_time`]: formatting
//!   and parsing through a translated pattern.
//! - [`get_layout`] / [`has_layout`]: resolve a layout from settings holding
//!   either a `dateLayout` or a `dateFormat` entry.
//! - [`TimeFormatError`]: parse and range failures.
pub mod error;
pub mod layout;
pub mod settings;

pub use error::{Result, TimeFormatError};
pub use layout::{format_time, parse_time, timestamp_to_string, to_layout, to_pattern};
pub use settings::{get_layout, has_layout, LayoutSettings};
