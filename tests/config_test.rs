//! Integration tests for config persistence

use tempfile::TempDir;

use codeshot::config::Config;
use codeshot::gui::{SettingsHost, SettingsStore};
use codeshot::settings::{SettingKey, SettingValue, Settings};

#[test]
fn test_load_or_init_creates_default_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(".codeshot").join("config.toml");

    let config = Config::load_or_init(&path).expect("Failed to init config");

    assert!(path.exists(), "config file should be created");
    assert_eq!(config, Config::with_defaults());
    assert_eq!(Config::from_file(&path).unwrap(), config);
}

#[test]
fn test_load_or_init_keeps_existing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[settings]\nfontFamily = \"Monoid\"\n").unwrap();

    let config = Config::load_or_init(&path).unwrap();

    assert_eq!(config.settings.font_family.as_deref(), Some("Monoid"));
    assert_eq!(config.settings.font_size, None);
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");

    Config::with_defaults().save_to_file(&path).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[settings\nfontSize = ").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_store_changes_survive_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    let mut store = SettingsStore::new(Config::default(), Some(path.clone()));

    store.on_change(SettingKey::FontSize, SettingValue::Number(16.5));
    store.on_change(SettingKey::Code, SettingValue::Text("let x = 1;\nlet y = 2;".to_string()));
    store.on_change(SettingKey::ExportSize, SettingValue::Text("4x".to_string()));
    store.save_if_dirty().unwrap();

    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(
        reloaded.settings,
        Settings {
            font_size: Some(16.5),
            code: Some("let x = 1;\nlet y = 2;".to_string()),
            export_size: Some("4x".to_string()),
            ..Settings::default()
        }
    );
}

#[test]
fn test_concurrent_first_runs_agree_on_one_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(".codeshot").join("config.toml");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let path = path.clone();
            std::thread::spawn(move || Config::load_or_init(&path))
        })
        .collect();

    for handle in handles {
        let config = handle.join().unwrap().expect("load_or_init failed");
        assert_eq!(config, Config::with_defaults());
    }
    assert_eq!(Config::from_file(&path).unwrap(), Config::with_defaults());
    assert!(!path.with_extension("toml.tmp").exists());
}
