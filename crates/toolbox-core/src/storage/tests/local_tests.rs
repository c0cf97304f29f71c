use std::fs;
use std::io::Read;

use tempfile::tempdir;

use crate::storage::error::{Result, StorageError};
use crate::storage::local::LocalStorageService;
use crate::storage::location::{self, file_url};
use crate::storage::object::ObjectKind;
use crate::storage::provider::StorageService;

#[test]
fn test_upload_creates_parent_directories() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let service = LocalStorageService::new();
    let target = temp_dir.path().join("nested").join("deeper").join("data.txt");
    let url = file_url(&target)?;

    service.upload_bytes(&url, b"hello")?;

    assert_eq!(fs::read_to_string(&target).expect("read back"), "hello");
    Ok(())
}

#[test]
fn test_upload_replaces_existing_file() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let service = LocalStorageService::new();
    let target = temp_dir.path().join("data.txt");
    fs::write(&target, "old contents that are longer").expect("seed file");

    service.upload_bytes(&file_url(&target)?, b"new")?;

    assert_eq!(fs::read_to_string(&target).expect("read back"), "new");
    // No temporary files left next to the target
    assert_eq!(fs::read_dir(temp_dir.path()).expect("read_dir").count(), 1);
    Ok(())
}

#[test]
fn test_storage_object_describes_file() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("report.csv");
    fs::write(&target, "a,b,c").expect("seed file");

    let object = LocalStorageService::new().storage_object(&file_url(&target)?)?;

    assert_eq!(object.name(), "report.csv");
    assert_eq!(object.kind(), ObjectKind::File);
    assert_eq!(object.size(), 5);
    assert!(object.modified().is_some());
    assert!(object.url().starts_with("file://"));
    Ok(())
}

#[test]
fn test_bare_path_is_accepted() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("plain.txt");
    fs::write(&target, "x").expect("seed file");
    let service = LocalStorageService::new();

    let path = target.to_str().expect("utf-8 path");
    assert!(service.exists(path)?);
    assert_eq!(service.download_bytes(path)?, b"x");
    Ok(())
}

#[test]
fn test_list_directory_children_sorted() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("b.txt"), "b").expect("seed file");
    fs::write(temp_dir.path().join("a.txt"), "a").expect("seed file");
    fs::create_dir(temp_dir.path().join("sub")).expect("seed dir");

    let objects = LocalStorageService::new().list(&file_url(temp_dir.path())?)?;

    let names: Vec<&str> = objects.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "sub"]);
    assert!(objects[2].is_dir());
    Ok(())
}

#[test]
fn test_list_file_returns_itself() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("only.txt");
    fs::write(&target, "1").expect("seed file");

    let objects = LocalStorageService::new().list(&file_url(&target)?)?;

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name(), "only.txt");
    Ok(())
}

#[test]
fn test_download_reads_content() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("data.bin");
    fs::write(&target, [1u8, 2, 3]).expect("seed file");
    let service = LocalStorageService::new();

    let object = service.storage_object(&file_url(&target)?)?;
    let mut content = Vec::new();
    service
        .download(&object)?
        .read_to_end(&mut content)
        .expect("read download");

    assert_eq!(content, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_delete_file_and_directory() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let file = temp_dir.path().join("gone.txt");
    let dir = temp_dir.path().join("tree");
    fs::write(&file, "x").expect("seed file");
    fs::create_dir_all(dir.join("leaf")).expect("seed dir");
    fs::write(dir.join("leaf").join("f.txt"), "y").expect("seed file");
    let service = LocalStorageService::new();

    let file_object = service.storage_object(&file_url(&file)?)?;
    service.delete(&file_object)?;
    let dir_object = service.storage_object(&file_url(&dir)?)?;
    service.delete(&dir_object)?;

    assert!(!file.exists());
    assert!(!dir.exists());
    Ok(())
}

#[test]
fn test_missing_object_is_not_found() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let url = file_url(&temp_dir.path().join("missing.txt")).expect("file url");
    let service = LocalStorageService::new();

    assert!(!service.exists(&url).expect("exists"));
    let result = service.storage_object(&url);
    assert!(matches!(result, Err(StorageError::ObjectNotFound { .. })));
}

#[test]
fn test_download_directory_fails() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let service = LocalStorageService::new();
    let object = service.storage_object(&file_url(temp_dir.path())?)?;

    let result = service.download(&object);
    assert!(matches!(result, Err(StorageError::OperationFailed { .. })));
    Ok(())
}

#[test]
fn test_scheme_of() -> Result<()> {
    assert_eq!(location::scheme_of("mem://bucket/key")?, "mem");
    assert_eq!(location::scheme_of("file:///tmp/x")?, "file");
    assert_eq!(location::scheme_of("relative/path.txt")?, "file");
    assert!(matches!(
        location::scheme_of("ht tp://bad"),
        Err(StorageError::InvalidUrl { .. })
    ));
    Ok(())
}
