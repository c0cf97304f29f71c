use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::constants::{FILE_SCHEME, MEMORY_SCHEME};
use crate::storage::error::{Result, StorageError};
use crate::storage::factory::StorageProviderRegistry;
use crate::storage::local::LocalStorageService;
use crate::storage::location;
use crate::storage::memory::MemoryStorageService;
use crate::storage::object::StorageObject;
use crate::storage::provider::StorageService;

/// Routes every storage operation to the backend registered for the URL's
/// scheme.
///
/// The manager is itself a [`StorageService`], so callers never need to
/// know which backend serves a URL. Registration takes `&mut self`; once
/// built the manager can be shared across threads.
#[derive(Clone)]
pub struct StorageManager {
    services: BTreeMap<String, Arc<dyn StorageService>>,
}

impl StorageManager {
    /// A manager with the `file` and `mem` backends registered
    pub fn new() -> Self {
        let mut manager = Self::empty();
        manager.register(FILE_SCHEME, Arc::new(LocalStorageService::new()));
        manager.register(MEMORY_SCHEME, Arc::new(MemoryStorageService::new()));
        manager
    }

    /// A manager with no backends
    pub fn empty() -> Self {
        Self {
            services: BTreeMap::new(),
        }
    }

    /// Build a manager able to serve `url`.
    ///
    /// When `providers` has a factory for the URL's scheme it is called
    /// with the credentials file and the result is registered. Without a
    /// factory only `file` URLs are accepted.
    pub fn for_url(url: &str, credential_file: Option<&Path>, providers: &StorageProviderRegistry) -> Result<Self> {
        let scheme = location::scheme_of(url)?;
        let mut manager = Self::new();

        match providers.get(&scheme) {
            Some(factory) => {
                let service = factory(credential_file).map_err(|source| StorageError::ProviderFactoryFailed {
                    url: url.to_string(),
                    source: Box::new(source),
                })?;
                manager.register(scheme, service);
            }
            None if scheme == FILE_SCHEME => {}
            None => return Err(StorageError::UnsupportedScheme { url: url.to_string() }),
        }
        Ok(manager)
    }

    /// Register a backend, replacing any previous one for the scheme
    pub fn register(&mut self, scheme: impl Into<String>, service: Arc<dyn StorageService>) {
        let scheme = scheme.into();
        log::debug!("Registering storage backend '{}' for scheme '{}'", service.name(), scheme);
        self.services.insert(scheme, service);
    }

    /// Registered schemes, sorted
    pub fn schemes(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }

    /// The backend serving `url`
    pub fn service_for(&self, url: &str) -> Result<Arc<dyn StorageService>> {
        let scheme = location::scheme_of(url)?;
        log::debug!("Dispatching {} to scheme '{}'", url, scheme);
        self.services
            .get(&scheme)
            .cloned()
            .ok_or_else(|| StorageError::SchemeNotFound {
                scheme,
                url: url.to_string(),
            })
    }
}

impl Default for StorageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageService for StorageManager {
    fn name(&self) -> &str {
        "StorageManager"
    }

    fn list(&self, url: &str) -> Result<Vec<StorageObject>> {
        self.service_for(url)?.list(url)
    }

    fn exists(&self, url: &str) -> Result<bool> {
        self.service_for(url)?.exists(url)
    }

    fn storage_object(&self, url: &str) -> Result<StorageObject> {
        self.service_for(url)?.storage_object(url)
    }

    fn download(&self, object: &StorageObject) -> Result<Box<dyn Read + Send>> {
        self.service_for(object.url())?.download(object)
    }

    fn upload(&self, url: &str, reader: &mut dyn Read) -> Result<()> {
        self.service_for(url)?.upload(url, reader)
    }

    fn delete(&self, object: &StorageObject) -> Result<()> {
        self.service_for(object.url())?.delete(object)
    }

    /// Close every backend in scheme order, stopping at the first failure.
    /// A backend registered under several schemes is closed once.
    fn close(&self) -> Result<()> {
        let mut closed: Vec<*const ()> = Vec::with_capacity(self.services.len());
        for (scheme, service) in &self.services {
            let identity = Arc::as_ptr(service) as *const ();
            if closed.contains(&identity) {
                continue;
            }
            closed.push(identity);

            log::debug!("Closing storage backend for scheme '{}'", scheme);
            if let Err(e) = service.close() {
                log::warn!("Failed to close storage backend for scheme '{}': {}", scheme, e);
                return Err(e);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for StorageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageManager")
            .field("schemes", &self.schemes())
            .finish()
    }
}
