#![cfg(test)]

use std::fs;

use tempfile::tempdir;

use crate::config::ConfigData;
use crate::storage::location::file_url;
use crate::storage::{StorageManager, StorageService};
use crate::time_format::{get_layout, parse_time, timestamp_to_string, to_pattern};

use super::common::{setup_test_storage, SETTINGS_URL};

#[test]
fn test_layout_from_stored_settings() {
    let storage = setup_test_storage();
    let settings = ConfigData::load(&storage, SETTINGS_URL).expect("Failed to load settings");

    let layout = get_layout(&settings);
    assert_eq!(layout, "%Y-%m-%dT%H:%M:%S");
    assert_eq!(to_pattern(&layout), "yyyy-MM-ddTHH:mm:ss");

    let pattern: String = settings.get("dateFormat").expect("dateFormat present");
    let text = timestamp_to_string(&pattern, 1_480_435_743, 0).expect("format timestamp");
    assert_eq!(text, "2016-11-29T16:09:03");
    assert_eq!(parse_time(&pattern, &text).expect("parse back").timestamp(), 1_480_435_743);
}

#[test]
fn test_settings_written_and_read_on_disk() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let storage = StorageManager::new();
    let url = file_url(&temp_dir.path().join("conf").join("app.json")).expect("file url");

    let mut settings = ConfigData::new();
    settings.set("dateLayout", "%d/%m/%Y").expect("set layout");
    settings.save(&storage, &url).expect("save settings");

    assert!(storage.exists(&url).expect("exists"));
    let on_disk = fs::read_to_string(temp_dir.path().join("conf").join("app.json")).expect("read back");
    assert!(on_disk.contains("dateLayout"));

    let reloaded = ConfigData::load(&storage, &url).expect("reload settings");
    assert_eq!(get_layout(&reloaded), "%d/%m/%Y");
}
