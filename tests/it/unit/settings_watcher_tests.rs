//! Unit tests for settings_watcher module.

use inkboard::settings_watcher::{SettingsWatcher, default_settings_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone()).unwrap();
    assert_eq!(watcher.path(), settings_path.as_path());
}

#[test]
fn test_watcher_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("config").join("settings.json");

    assert!(SettingsWatcher::new(settings_path).is_ok());
    assert!(dir.path().join("config").is_dir());
}

#[test]
fn test_poll_without_changes_is_empty() {
    let dir = tempdir().unwrap();
    let mut watcher = SettingsWatcher::new(dir.path().join("settings.json")).unwrap();
    assert_eq!(watcher.poll(), None);
}

#[test]
fn test_default_paths() {
    let settings = default_settings_path();
    assert!(settings.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = settings {
        assert!(path.ends_with("inkboard/settings.json"));
    }
}
