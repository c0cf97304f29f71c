use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::constants::FILE_SCHEME;
use crate::storage::error::{Result, StorageError};
use crate::storage::location;
use crate::storage::object::{ObjectKind, StorageObject};
use crate::storage::provider::StorageService;

/// Local filesystem backend for `file` URLs and bare paths
#[derive(Clone, Default)]
pub struct LocalStorageService;

impl LocalStorageService {
    pub fn new() -> Self {
        Self
    }

    fn describe(path: &Path) -> Result<StorageObject> {
        let url = location::file_url(path)?;
        let metadata = fs::metadata(path).map_err(|e| StorageError::io(e, "metadata", url.as_str()))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "/".to_string());

        let (kind, size) = if metadata.is_dir() {
            (ObjectKind::Directory, 0)
        } else {
            (ObjectKind::File, metadata.len())
        };
        let object = StorageObject::new(url, name, kind, size);
        Ok(match metadata.modified() {
            Ok(modified) => object.with_modified(modified),
            Err(_) => object,
        })
    }
}

impl StorageService for LocalStorageService {
    fn name(&self) -> &str {
        FILE_SCHEME
    }

    fn list(&self, url: &str) -> Result<Vec<StorageObject>> {
        let path = location::to_file_path(url)?;
        if !path.is_dir() {
            return Ok(vec![Self::describe(&path)?]);
        }

        let entries = fs::read_dir(&path).map_err(|e| StorageError::io(e, "read_dir", url))?;
        let mut objects = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(e, "read_dir_entry", url))?;
            objects.push(Self::describe(&entry.path())?);
        }
        objects.sort_by(|a, b| a.url().cmp(b.url()));
        Ok(objects)
    }

    fn exists(&self, url: &str) -> Result<bool> {
        Ok(location::to_file_path(url)?.exists())
    }

    fn storage_object(&self, url: &str) -> Result<StorageObject> {
        Self::describe(&location::to_file_path(url)?)
    }

    fn download(&self, object: &StorageObject) -> Result<Box<dyn Read + Send>> {
        if object.is_dir() {
            return Err(StorageError::OperationFailed {
                operation: "download".to_string(),
                url: object.url().to_string(),
                message: "Cannot download a directory".to_string(),
            });
        }
        let path = location::to_file_path(object.url())?;
        let file = File::open(&path).map_err(|e| StorageError::io(e, "open_read", object.url()))?;
        Ok(Box::new(file))
    }

    fn upload(&self, url: &str, reader: &mut dyn Read) -> Result<()> {
        let path = location::to_file_path(url)?;
        let Some(parent) = path.parent() else {
            return Err(StorageError::OperationFailed {
                operation: "upload".to_string(),
                url: url.to_string(),
                message: "Cannot write to path without parent directory".to_string(),
            });
        };
        fs::create_dir_all(parent).map_err(|e| StorageError::io(e, "create_dir_all", url))?;

        // Write next to the target, then atomically replace it
        let mut temp_file =
            NamedTempFile::new_in(parent).map_err(|e| StorageError::io(e, "create_temp_file", url))?;
        io::copy(reader, &mut temp_file).map_err(|e| StorageError::io(e, "write_to_temp_file", url))?;
        temp_file
            .persist(&path)
            .map_err(|e| StorageError::io(e.error, "persist_temp_file", url))?;

        log::debug!("Uploaded {}", url);
        Ok(())
    }

    fn delete(&self, object: &StorageObject) -> Result<()> {
        let path = location::to_file_path(object.url())?;
        match object.kind() {
            ObjectKind::Directory => fs::remove_dir_all(&path).map_err(|e| StorageError::io(e, "remove_dir_all", object.url())),
            ObjectKind::File => fs::remove_file(&path).map_err(|e| StorageError::io(e, "remove_file", object.url())),
        }
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}

impl fmt::Debug for LocalStorageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStorageService").finish()
    }
}
