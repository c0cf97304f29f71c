use std::io::Read;

use crate::storage::error::{Result, StorageError};
use crate::storage::memory::MemoryStorageService;
use crate::storage::object::ObjectKind;
use crate::storage::provider::StorageService;

fn seeded() -> Result<MemoryStorageService> {
    let service = MemoryStorageService::new();
    service.upload_bytes("mem://bucket/a.txt", b"alpha")?;
    service.upload_bytes("mem://bucket/dir/b.txt", b"beta")?;
    service.upload_bytes("mem://bucket/dir/c.txt", b"gamma")?;
    service.upload_bytes("mem://bucket/dir/deep/d.txt", b"delta")?;
    service.upload_bytes("mem://other/e.txt", b"epsilon")?;
    Ok(service)
}

#[test]
fn test_upload_and_download() -> Result<()> {
    let service = seeded()?;

    let object = service.storage_object("mem://bucket/a.txt")?;
    assert_eq!(object.kind(), ObjectKind::File);
    assert_eq!(object.size(), 5);
    assert_eq!(object.name(), "a.txt");

    let mut content = String::new();
    service
        .download(&object)?
        .read_to_string(&mut content)
        .expect("read download");
    assert_eq!(content, "alpha");
    Ok(())
}

#[test]
fn test_directories_are_implied() -> Result<()> {
    let service = seeded()?;

    assert!(service.exists("mem://bucket/dir")?);
    assert!(service.exists("mem://bucket/dir/")?);
    assert!(!service.exists("mem://bucket/di")?);
    assert!(service.storage_object("mem://bucket/dir")?.is_dir());
    Ok(())
}

#[test]
fn test_list_direct_children() -> Result<()> {
    let service = seeded()?;

    let objects = service.list("mem://bucket/dir")?;
    let urls: Vec<&str> = objects.iter().map(|o| o.url()).collect();
    assert_eq!(
        urls,
        vec!["mem://bucket/dir/b.txt", "mem://bucket/dir/c.txt", "mem://bucket/dir/deep"]
    );
    assert!(objects[2].is_dir());

    let root = service.list("mem://bucket")?;
    let names: Vec<&str> = root.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["a.txt", "dir"]);
    Ok(())
}

#[test]
fn test_list_missing_is_not_found() {
    let service = MemoryStorageService::new();
    let result = service.list("mem://bucket/nothing");
    assert!(matches!(result, Err(StorageError::ObjectNotFound { .. })));
}

#[test]
fn test_delete_directory_removes_contents() -> Result<()> {
    let service = seeded()?;

    let object = service.storage_object("mem://bucket/dir")?;
    service.delete(&object)?;

    assert!(!service.exists("mem://bucket/dir/deep/d.txt")?);
    assert!(service.exists("mem://bucket/a.txt")?);
    assert!(service.exists("mem://other/e.txt")?);
    Ok(())
}

#[test]
fn test_delete_missing_object_fails() -> Result<()> {
    let service = seeded()?;
    let object = service.storage_object("mem://bucket/a.txt")?;
    service.delete(&object)?;

    let result = service.delete(&object);
    assert!(matches!(result, Err(StorageError::ObjectNotFound { .. })));
    Ok(())
}

#[test]
fn test_upload_overwrites() -> Result<()> {
    let service = seeded()?;
    service.upload_bytes("mem://bucket/a.txt", b"replaced")?;
    assert_eq!(service.download_bytes("mem://bucket/a.txt")?, b"replaced");
    Ok(())
}
