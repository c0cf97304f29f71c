//! # Toolbox Value Providers
//!
//! Named sources of dynamic values resolved at runtime: environment
//! variables, type casts, the current time, relative time arithmetic,
//! weekday and date, null, and dictionary lookups.
//!
//! ## Key Components:
//!
//! - [`Value`]: the tagged union flowing in and out of providers, with
//!   best-effort conversions.
//! - [`ValueProvider`]: `get(context, arguments) -> Result<Value>`.
//! - [`ValueProviderRegistry`]: name to provider map; unknown names are
//!   reported as [`ValueProviderError::ProviderNotFound`].
//! - [`ValueContext`]: typed shared data visible to providers, used to hand
//!   dictionaries to a [`DictionaryProvider`].
//! - [`Dictionary`] / [`MapDictionary`]: keyed lookup with `get`/`exists`.
pub mod builtin;
pub mod context;
pub mod dictionary;
pub mod error;
pub mod provider;
pub mod registry;
pub mod value;

pub use builtin::{
    CastValueProvider, CurrentDateProvider, CurrentTimeProvider, EnvValueProvider, NilValueProvider,
    TimeDiffProvider, WeekdayProvider,
};
pub use context::ValueContext;
pub use dictionary::{Dictionary, DictionaryProvider, MapDictionary};
pub use error::{Result, ValueProviderError};
pub use provider::ValueProvider;
pub use registry::ValueProviderRegistry;
pub use value::Value;

#[cfg(test)]
mod tests;
