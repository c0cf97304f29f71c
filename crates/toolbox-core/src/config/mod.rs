//! # Toolbox Configuration
//!
//! Flat settings documents in JSON, YAML or TOML. A [`ConfigData`] can carry
//! date layout settings for the time format translator and can seed a
//! dictionary for dictionary-backed value providers.
pub mod data;
pub mod error;

pub use data::{ConfigData, ConfigFormat};
pub use error::{ConfigError, Result};
