//! # Toolbox Core
//!
//! Three independent facilities shared by data-processing tools:
//!
//! - [`storage`]: one [`StorageService`] facade routing URL operations to the
//!   backend registered for the URL's scheme.
//! - [`value_provider`]: named providers of dynamic values (environment,
//!   casts, time arithmetic, dictionaries) behind a [`ValueProviderRegistry`].
//! - [`time_format`]: translation between `yyyy-MM-dd` style date patterns and
//!   strftime layouts.
//!
//! [`config`] reads flat settings documents through any storage backend.
pub mod config;
pub mod constants;
pub mod error;
pub mod storage;
pub mod time_format;
pub mod value_provider;

pub use config::{ConfigData, ConfigFormat};
pub use error::{Error, Result};
pub use storage::{StorageManager, StorageObject, StorageProviderRegistry, StorageService};
pub use time_format::{to_layout, to_pattern};
pub use value_provider::{Value, ValueContext, ValueProvider, ValueProviderRegistry};

#[cfg(test)]
mod tests;
