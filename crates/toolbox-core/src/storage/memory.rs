use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::constants::MEMORY_SCHEME;
use crate::storage::error::{Result, StorageError};
use crate::storage::location;
use crate::storage::object::{ObjectKind, StorageObject};
use crate::storage::provider::StorageService;

/// In-process backend for `mem` URLs.
///
/// Objects are keyed by `host/path`. Directories are never stored: a
/// directory exists while some object lives below it.
#[derive(Debug, Default)]
pub struct MemoryStorageService {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorageService {
    pub fn new() -> Self {
        Self::default()
    }

    fn key_of(url: &str) -> Result<String> {
        let parsed = location::parse_url(url)?;
        let host = parsed.host_str().unwrap_or_default();
        let path = parsed.path().trim_matches('/');
        Ok(match (host.is_empty(), path.is_empty()) {
            (true, _) => path.to_string(),
            (false, true) => host.to_string(),
            (false, false) => format!("{}/{}", host, path),
        })
    }

    fn object_url(key: &str) -> String {
        format!("{}://{}", MEMORY_SCHEME, key)
    }

    fn object_name(key: &str) -> &str {
        key.rsplit('/').next().unwrap_or(key)
    }

    fn dir_prefix(key: &str) -> String {
        if key.is_empty() {
            String::new()
        } else {
            format!("{}/", key)
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.objects
            .read()
            .map_err(|_| StorageError::LockPoisoned("MemoryStorageService::read".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.objects
            .write()
            .map_err(|_| StorageError::LockPoisoned("MemoryStorageService::write".to_string()))
    }

    fn file_object(key: &str, data: &[u8]) -> StorageObject {
        StorageObject::new(Self::object_url(key), Self::object_name(key), ObjectKind::File, data.len() as u64)
    }

    fn dir_object(key: &str) -> StorageObject {
        StorageObject::new(Self::object_url(key), Self::object_name(key), ObjectKind::Directory, 0)
    }

    fn lookup(objects: &BTreeMap<String, Vec<u8>>, key: &str, url: &str) -> Result<StorageObject> {
        if let Some(data) = objects.get(key) {
            return Ok(Self::file_object(key, data));
        }
        let prefix = Self::dir_prefix(key);
        if objects.keys().any(|k| k.starts_with(&prefix)) {
            return Ok(Self::dir_object(key));
        }
        Err(StorageError::ObjectNotFound { url: url.to_string() })
    }
}

impl StorageService for MemoryStorageService {
    fn name(&self) -> &str {
        MEMORY_SCHEME
    }

    fn list(&self, url: &str) -> Result<Vec<StorageObject>> {
        let key = Self::key_of(url)?;
        let objects = self.read()?;
        if let Some(data) = objects.get(&key) {
            return Ok(vec![Self::file_object(&key, data)]);
        }

        let prefix = Self::dir_prefix(&key);
        let mut listed: Vec<StorageObject> = Vec::new();
        for (child_key, data) in objects.range(prefix.clone()..) {
            let Some(remainder) = child_key.strip_prefix(&prefix) else {
                break;
            };
            match remainder.split_once('/') {
                Some((dir, _)) => {
                    let dir_key = format!("{}{}", prefix, dir);
                    if listed.last().is_none_or(|last| last.url() != Self::object_url(&dir_key)) {
                        listed.push(Self::dir_object(&dir_key));
                    }
                }
                None => listed.push(Self::file_object(child_key, data)),
            }
        }

        if listed.is_empty() {
            return Err(StorageError::ObjectNotFound { url: url.to_string() });
        }
        Ok(listed)
    }

    fn exists(&self, url: &str) -> Result<bool> {
        let key = Self::key_of(url)?;
        let objects = self.read()?;
        Ok(Self::lookup(&objects, &key, url).is_ok())
    }

    fn storage_object(&self, url: &str) -> Result<StorageObject> {
        let key = Self::key_of(url)?;
        let objects = self.read()?;
        Self::lookup(&objects, &key, url)
    }

    fn download(&self, object: &StorageObject) -> Result<Box<dyn Read + Send>> {
        let key = Self::key_of(object.url())?;
        let objects = self.read()?;
        match objects.get(&key) {
            Some(data) => Ok(Box::new(Cursor::new(data.clone()))),
            None if object.is_dir() => Err(StorageError::OperationFailed {
                operation: "download".to_string(),
                url: object.url().to_string(),
                message: "Cannot download a directory".to_string(),
            }),
            None => Err(StorageError::ObjectNotFound {
                url: object.url().to_string(),
            }),
        }
    }

    fn upload(&self, url: &str, reader: &mut dyn Read) -> Result<()> {
        let key = Self::key_of(url)?;
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| StorageError::io(e, "upload", url))?;
        self.write()?.insert(key, data);
        Ok(())
    }

    fn delete(&self, object: &StorageObject) -> Result<()> {
        let key = Self::key_of(object.url())?;
        let mut objects = self.write()?;
        if objects.remove(&key).is_some() {
            return Ok(());
        }

        let prefix = Self::dir_prefix(&key);
        let before = objects.len();
        objects.retain(|k, _| !k.starts_with(&prefix));
        if objects.len() == before {
            return Err(StorageError::ObjectNotFound {
                url: object.url().to_string(),
            });
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
