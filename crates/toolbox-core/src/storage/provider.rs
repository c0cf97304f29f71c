use std::fmt::Debug;
use std::io::Read;

use crate::storage::error::{Result, StorageError};
use crate::storage::object::StorageObject;

/// A storage backend addressed by URL.
///
/// Backends are shared between callers, so every operation takes `&self`
/// and implementations synchronise internally.
pub trait StorageService: Send + Sync + Debug {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// List the object at `url`, or its children when it is a directory
    fn list(&self, url: &str) -> Result<Vec<StorageObject>>;

    /// Check whether anything exists at `url`
    fn exists(&self, url: &str) -> Result<bool>;

    /// Describe the object at `url`
    fn storage_object(&self, url: &str) -> Result<StorageObject>;

    /// Open an object for reading
    fn download(&self, object: &StorageObject) -> Result<Box<dyn Read + Send>>;

    /// Write everything from `reader` to `url`, replacing any existing object
    fn upload(&self, url: &str, reader: &mut dyn Read) -> Result<()>;

    /// Remove an object; directories are removed with their contents
    fn delete(&self, object: &StorageObject) -> Result<()>;

    /// Release the backend's resources
    fn close(&self) -> Result<()>;

    /// Read the whole object at `url` into memory
    fn download_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let object = self.storage_object(url)?;
        let mut reader = self.download(&object)?;
        let mut content = Vec::with_capacity(object.size() as usize);
        reader
            .read_to_end(&mut content)
            .map_err(|e| StorageError::io(e, "download_bytes", url))?;
        Ok(content)
    }

    /// Write `contents` to `url`
    fn upload_bytes(&self, url: &str, contents: &[u8]) -> Result<()> {
        let mut reader = contents;
        self.upload(url, &mut reader)
    }
}
