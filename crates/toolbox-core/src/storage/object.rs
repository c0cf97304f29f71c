use std::time::SystemTime;

/// Whether a storage object holds content or groups other objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    File,
    Directory,
}

/// A file or directory reported by a storage backend.
///
/// Objects are plain descriptions: the backend that produced one can be
/// found again from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    url: String,
    name: String,
    kind: ObjectKind,
    size: u64,
    modified: Option<SystemTime>,
}

impl StorageObject {
    pub fn new(url: impl Into<String>, name: impl Into<String>, kind: ObjectKind, size: u64) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            kind,
            size,
            modified: None,
        }
    }

    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == ObjectKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == ObjectKind::Directory
    }

    /// Content length in bytes; zero for directories
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}
