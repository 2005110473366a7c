use inkkit_core::{ButtonAction, ButtonId, ToolbarDefinition};
use inkkit_settings::{Config, SettingsError, SettingsManager};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_toml_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config
        .buttons
        .set_action(ButtonId::StylusPrimary, ButtonAction::FloatingToolbox);
    config.tap_action.stroke_filter_enabled = true;
    config
        .toolbox
        .push_item(
            ToolbarDefinition::from_settings_name("toolbarFloat4").unwrap(),
            "zoom_in",
        );
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.ui.window_width = 640;
    config.save_to_file(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"window_width\": 640"));
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let err = Config::default().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "yaml"));
}

#[test]
fn test_invalid_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nwindow_width = 0\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));
}

#[test]
fn test_manager_falls_back_to_defaults() {
    let dir = tempdir().unwrap();

    let missing = SettingsManager::load_or_default(dir.path().join("missing.toml"));
    assert_eq!(missing.config(), &Config::default());

    let broken_path = dir.path().join("broken.toml");
    fs::write(&broken_path, "this is = = not toml").unwrap();
    let broken = SettingsManager::load_or_default(&broken_path);
    assert_eq!(broken.config(), &Config::default());
}

#[test]
fn test_manager_save_creates_parent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut manager = SettingsManager::load_or_default(&path);
    manager.config_mut().buttons.right = ButtonAction::Select;
    manager.save().unwrap();

    let reloaded = SettingsManager::load_or_default(&path);
    assert_eq!(reloaded.config().buttons.right, ButtonAction::Select);
    assert_eq!(reloaded.path(), path.as_path());
}
