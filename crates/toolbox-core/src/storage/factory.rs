use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::storage::error::Result;
use crate::storage::provider::StorageService;

/// Builds a backend, optionally from a credentials file
pub type StorageFactory = dyn Fn(Option<&Path>) -> Result<Arc<dyn StorageService>> + Send + Sync;

/// Backend factories by URL scheme, used to build a [`StorageManager`]
/// for schemes that need credentials.
///
/// [`StorageManager`]: crate::storage::StorageManager
#[derive(Default)]
pub struct StorageProviderRegistry {
    factories: HashMap<String, Box<StorageFactory>>,
}

impl StorageProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any previous one for the scheme
    pub fn register<F>(&mut self, scheme: impl Into<String>, factory: F)
    where
        F: Fn(Option<&Path>) -> Result<Arc<dyn StorageService>> + Send + Sync + 'static,
    {
        let scheme = scheme.into();
        log::debug!("Registering storage factory for scheme '{}'", scheme);
        self.factories.insert(scheme, Box::new(factory));
    }

    pub fn get(&self, scheme: &str) -> Option<&StorageFactory> {
        self.factories.get(scheme).map(|factory| factory.as_ref())
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.factories.contains_key(scheme)
    }

    /// Registered schemes, sorted
    pub fn schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.factories.keys().cloned().collect();
        schemes.sort();
        schemes
    }
}

impl fmt::Debug for StorageProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageProviderRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}
