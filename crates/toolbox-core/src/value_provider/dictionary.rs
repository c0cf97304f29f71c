use std::collections::HashMap;

use crate::config::ConfigData;
use crate::value_provider::context::ValueContext;
use crate::value_provider::error::{Result, ValueProviderError};
use crate::value_provider::provider::ValueProvider;
use crate::value_provider::value::Value;

/// Simple keyed lookup
pub trait Dictionary: Send + Sync {
    /// Get the value stored for `key`, or an error if it is absent
    fn get(&self, key: &str) -> Result<Value>;

    /// Check if `key` exists
    fn exists(&self, key: &str) -> bool;
}

/// Dictionary backed by a hash map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapDictionary {
    entries: HashMap<String, Value>,
}

impl MapDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for MapDictionary {
    fn get(&self, key: &str) -> Result<Value> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| ValueProviderError::KeyNotFound { key: key.to_string() })
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl From<HashMap<String, Value>> for MapDictionary {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MapDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<&ConfigData> for MapDictionary {
    fn from(config: &ConfigData) -> Self {
        config.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Provider resolving its first argument in a dictionary taken from the
/// call context.
///
/// With a single argument an absent key yields [`Value::Null`]; with more
/// arguments the dictionary's lookup error is returned instead.
#[derive(Debug, Clone)]
pub struct DictionaryProvider {
    context_key: String,
}

impl DictionaryProvider {
    /// Create a provider reading the dictionary stored under `context_key`
    pub fn new(context_key: impl Into<String>) -> Self {
        Self {
            context_key: context_key.into(),
        }
    }

    pub fn context_key(&self) -> &str {
        &self.context_key
    }
}

impl ValueProvider for DictionaryProvider {
    fn get(&self, context: &ValueContext, arguments: &[Value]) -> Result<Value> {
        let key = arguments
            .first()
            .ok_or_else(|| ValueProviderError::argument_count(&self.context_key, "at least 1", 0))?
            .as_string();

        let dictionary = context.dictionary(&self.context_key).ok_or_else(|| {
            ValueProviderError::DictionaryNotFound {
                context_key: self.context_key.clone(),
            }
        })?;

        if arguments.len() == 1 && !dictionary.exists(&key) {
            return Ok(Value::Null);
        }
        dictionary.get(&key)
    }
}
