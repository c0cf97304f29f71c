#![cfg(test)]

use crate::config::ConfigData;
use crate::error::{Error, Result};
use crate::storage::{StorageError, StorageManager, StorageService};
use crate::time_format::parse_time;
use crate::value_provider::{Value, ValueContext, ValueProviderRegistry};

fn resolve_and_store(storage: &StorageManager, url: &str, provider: &str) -> Result<String> {
    let registry = ValueProviderRegistry::with_builtins();
    let value = registry.evaluate(provider, &ValueContext::new(), &[])?;
    storage.upload_bytes(url, value.to_string().as_bytes())?;
    Ok(value.to_string())
}

#[test]
fn test_subsystem_errors_convert() {
    let storage = StorageManager::new();

    let stored = resolve_and_store(&storage, "mem://out/nil", "nil").expect("nil resolves");
    assert_eq!(stored, "null");
    assert_eq!(storage.download_bytes("mem://out/nil").expect("stored"), b"null");

    let missing_provider = resolve_and_store(&storage, "mem://out/x", "no_such_provider");
    assert!(matches!(missing_provider, Err(Error::ValueProvider(_))));

    let bad_scheme = resolve_and_store(&storage, "ftp://host/x", "nil");
    assert!(matches!(
        bad_scheme,
        Err(Error::Storage(StorageError::SchemeNotFound { .. }))
    ));
}

#[test]
fn test_time_and_config_errors_convert() {
    let parse = || -> Result<i64> { Ok(parse_time("yyyy-MM-dd", "not a date")?.timestamp()) };
    assert!(matches!(parse(), Err(Error::TimeFormat(_))));

    let load = || -> Result<ConfigData> { Ok(ConfigData::load(&StorageManager::new(), "mem://none/x.json")?) };
    assert!(matches!(load(), Err(Error::Config(_))));

    let other: Error = "plain message".into();
    assert_eq!(other.to_string(), "Error: plain message");
    assert_eq!(Value::Null.to_string(), "null");
}
