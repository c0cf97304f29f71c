use std::sync::Arc;

use crate::storage::{MemoryStorageService, StorageManager, StorageService};

pub const DICTIONARY_URL: &str = "mem://fixtures/dictionary.json";
pub const SETTINGS_URL: &str = "mem://fixtures/settings.json";

/// A manager whose `mem` backend is pre-loaded with fixture documents
pub fn setup_test_storage() -> StorageManager {
    let memory = Arc::new(MemoryStorageService::new());
    memory
        .upload_bytes(
            DICTIONARY_URL,
            br#"{"region": "eu-west-1", "retries": 3, "verbose": true, "tags": ["a", "b"]}"#,
        )
        .expect("Failed to seed dictionary fixture");
    memory
        .upload_bytes(SETTINGS_URL, br#"{"dateFormat": "yyyy-MM-dd'T'HH:mm:ss"}"#)
        .expect("Failed to seed settings fixture");

    let mut manager = StorageManager::new();
    manager.register("mem", memory);
    manager
}
