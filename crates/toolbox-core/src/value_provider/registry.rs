use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::constants::{
    CAST_PROVIDER, CURRENT_DATE_PROVIDER, ENV_PROVIDER, NIL_PROVIDER, NOW_PROVIDER, TIME_DIFF_PROVIDER,
    WEEKDAY_PROVIDER,
};
use crate::value_provider::builtin::{
    CastValueProvider, CurrentDateProvider, CurrentTimeProvider, EnvValueProvider, NilValueProvider,
    TimeDiffProvider, WeekdayProvider,
};
use crate::value_provider::context::ValueContext;
use crate::value_provider::error::{Result, ValueProviderError};
use crate::value_provider::provider::ValueProvider;
use crate::value_provider::value::Value;

/// Registry of value providers keyed by name.
///
/// Registering an existing name replaces the previous provider. Looking up
/// an unknown name is an error the caller has to handle; a registry is
/// expected to be fully populated before it is used.
#[derive(Default)]
pub struct ValueProviderRegistry {
    providers: HashMap<String, Arc<dyn ValueProvider>>,
}

impl fmt::Debug for ValueProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

impl ValueProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in provider
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(ENV_PROVIDER, EnvValueProvider);
        registry.register(CAST_PROVIDER, CastValueProvider);
        registry.register(NOW_PROVIDER, CurrentTimeProvider);
        registry.register(TIME_DIFF_PROVIDER, TimeDiffProvider);
        registry.register(WEEKDAY_PROVIDER, WeekdayProvider);
        registry.register(CURRENT_DATE_PROVIDER, CurrentDateProvider);
        registry.register(NIL_PROVIDER, NilValueProvider);
        registry
    }

    /// Register a provider, replacing any provider of the same name
    pub fn register<P: ValueProvider + 'static>(&mut self, name: impl Into<String>, provider: P) {
        let name = name.into();
        log::debug!("Registering value provider '{}'", name);
        self.providers.insert(name, Arc::new(provider));
    }

    /// Check if a provider with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Get all registered provider names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get a provider by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn ValueProvider>> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| ValueProviderError::ProviderNotFound { name: name.to_string() })
    }

    /// Look up a provider and evaluate it in one step
    pub fn evaluate(&self, name: &str, context: &ValueContext, arguments: &[Value]) -> Result<Value> {
        self.get(name)?.get(context, arguments)
    }

    /// Get the number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
