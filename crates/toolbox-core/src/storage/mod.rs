pub mod error;
pub mod factory;
pub mod local;
pub mod location;
pub mod manager;
pub mod memory;
pub mod object;
pub mod provider;

pub use error::{Result, StorageError};
pub use factory::{StorageFactory, StorageProviderRegistry};
pub use local::LocalStorageService;
pub use location::{parse_url, scheme_of};
pub use manager::StorageManager;
pub use memory::MemoryStorageService;
pub use object::{ObjectKind, StorageObject};
pub use provider::StorageService;

#[cfg(test)]
mod tests;
