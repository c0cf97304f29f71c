use std::env;
use std::path::{Path, PathBuf};

use url::Url;

use crate::storage::error::{Result, StorageError};

/// Parse a storage URL.
///
/// Anything without `://` is a filesystem path: relative paths are
/// resolved against the working directory and turned into a `file` URL.
pub fn parse_url(raw: &str) -> Result<Url> {
    if raw.contains("://") {
        return Url::parse(raw).map_err(|source| StorageError::InvalidUrl {
            url: raw.to_string(),
            source,
        });
    }

    let path = Path::new(raw);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|e| StorageError::io(e, "current_dir", raw))?
            .join(path)
    };
    Url::from_file_path(&absolute).map_err(|_| StorageError::InvalidPath {
        path: raw.to_string(),
    })
}

/// The scheme a URL is routed by
pub fn scheme_of(raw: &str) -> Result<String> {
    parse_url(raw).map(|url| url.scheme().to_string())
}

/// Filesystem path of a `file` URL
pub fn to_file_path(raw: &str) -> Result<PathBuf> {
    parse_url(raw)?
        .to_file_path()
        .map_err(|_| StorageError::InvalidPath { path: raw.to_string() })
}

/// `file` URL for a filesystem path
pub fn file_url(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|_| StorageError::InvalidPath {
            path: path.display().to_string(),
        })
}
