//! Unit tests for settings persistence.

use inkboard::app::{InteractionType, PointerMapping};
use inkboard::events::PointerMode;
use inkboard::settings::Settings;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(Settings::try_load_from(&path).is_err());
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.drawing.colour = "#ff8000".into();
    settings.drawing.smooth_strokes = true;
    settings.gesture.alternate_timeout_ms = 500;
    settings.pointer_mappings = vec![PointerMapping::new(PointerMode::Primary, false, InteractionType::Navigation)];

    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path), settings);

    // No temp files are left next to the target
    let entries = fs::read_dir(path.parent().unwrap()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_alternate_defaults_to_false_in_rows() {
    let json = r#"{ "pointer_mappings": [ { "mode": "secondary", "interaction": "sketch" } ] }"#;
    let settings: Settings = serde_json::from_str(json).unwrap();
    let mappings = settings.interaction_mappings().unwrap();
    assert_eq!(mappings.get(PointerMode::Secondary, false), Some(InteractionType::Sketch));
    assert_eq!(mappings.get(PointerMode::Primary, false), None);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r##"
    {
      "gesture": {
        "alternate_timeout_ms": 800,
        "movement_threshold": 30.0
      },
      "navigation": {
        "scroll_translation_scale": 64.0
      },
      "drawing": {
        "colour": "#33b3b3",
        "point_size": 5.0,
        "line_width": 2.0,
        "smooth_strokes": false
      },
      "pointer_mappings": [
        {
          "mode": "primary",
          "alternate": false,
          "interaction": "sketch"
        },
        {
          "mode": "primary",
          "alternate": true,
          "interaction": "select_meta"
        },
        {
          "mode": "secondary",
          "alternate": false,
          "interaction": "select_spatial"
        },
        {
          "mode": "secondary",
          "alternate": true,
          "interaction": "select_temporal"
        },
        {
          "mode": "tertiary",
          "alternate": false,
          "interaction": "navigation"
        },
        {
          "mode": "tertiary",
          "alternate": true,
          "interaction": "special_navigation"
        }
      ]
    }
    "##);
}
