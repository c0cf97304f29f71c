use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value_provider::dictionary::Dictionary;

/// Context handed to value providers on every call.
///
/// Holds typed shared data keyed by string, such as the dictionaries read
/// by dictionary-backed providers.
#[derive(Default)]
pub struct ValueContext {
    /// Shared data between the caller and providers
    shared_data: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl ValueContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self {
            shared_data: HashMap::new(),
        }
    }

    /// Set a shared data value
    pub fn set_data<T: 'static + Send + Sync>(&mut self, key: &str, value: T) {
        self.shared_data.insert(key.to_string(), Box::new(value));
    }

    /// Get a shared data value
    pub fn get_data<T: 'static + Send + Sync>(&self, key: &str) -> Option<&T> {
        self.shared_data.get(key).and_then(|data| data.downcast_ref::<T>())
    }

    /// Get a mutable reference to a shared data value
    pub fn get_data_mut<T: 'static + Send + Sync>(&mut self, key: &str) -> Option<&mut T> {
        self.shared_data.get_mut(key).and_then(|data| data.downcast_mut::<T>())
    }

    /// Check whether anything is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.shared_data.contains_key(key)
    }

    /// Remove whatever is stored under `key`
    pub fn remove(&mut self, key: &str) -> bool {
        self.shared_data.remove(key).is_some()
    }

    /// Store a dictionary under `key` for dictionary-backed providers
    pub fn set_dictionary<D: Dictionary + 'static>(&mut self, key: &str, dictionary: D) {
        let dictionary: Arc<dyn Dictionary> = Arc::new(dictionary);
        self.set_data(key, dictionary);
    }

    /// Get the dictionary stored under `key`
    pub fn dictionary(&self, key: &str) -> Option<Arc<dyn Dictionary>> {
        self.get_data::<Arc<dyn Dictionary>>(key).cloned()
    }
}

impl fmt::Debug for ValueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&String> = self.shared_data.keys().collect();
        f.debug_struct("ValueContext")
            .field("shared_data", &keys)
            .finish()
    }
}
