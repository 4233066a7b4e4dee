//! The settings owner behind the panel
//!
//! Applies change requests to the in-memory settings and writes them back to
//! the config file when asked.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use super::settings_panel::SettingsHost;
use crate::config::Config;
use crate::settings::{SettingChange, SettingKey, SettingValue, Settings};

pub struct SettingsStore {
    config: Config,
    config_path: Option<PathBuf>,
    dirty: bool,
}

impl SettingsStore {
    /// `config_path` is where [`save_if_dirty`](Self::save_if_dirty) writes; `None` keeps everything in memory
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            dirty: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.config.settings
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist pending changes. Does nothing if nothing changed or there is no file.
    pub fn save_if_dirty(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(path) = &self.config_path {
            self.config.save_to_file(path)?;
            debug!("[codeshot] Saved settings to {}", path.display());
        }
        self.dirty = false;
        Ok(())
    }
}

impl SettingsHost for SettingsStore {
    fn on_change(&mut self, key: SettingKey, value: SettingValue) {
        match self.config.settings.apply(&SettingChange { key, value }) {
            Ok(()) => self.dirty = true,
            Err(e) => warn!("[codeshot] Ignoring setting change: {}", e),
        }
    }

    /// Back to the defaults, keeping the snippet the user is working on
    fn reset_default_settings(&mut self) {
        let code = self.config.settings.code.take();
        self.config.settings = Settings::with_defaults();
        if code.is_some() {
            self.config.settings.code = code;
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_on_change_applies_and_marks_dirty() {
        let mut store = SettingsStore::new(Config::default(), None);
        store.on_change(SettingKey::FontSize, SettingValue::Number(17.0));
        assert_eq!(store.settings().font_size, Some(17.0));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_mismatched_change_is_ignored() {
        let mut store = SettingsStore::new(Config::default(), None);
        store.on_change(SettingKey::LineNumbers, SettingValue::Text("yes".to_string()));
        assert_eq!(store.settings().line_numbers, None);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_reset_keeps_code() {
        let mut store = SettingsStore::new(Config::default(), None);
        store.on_change(SettingKey::Code, SettingValue::Text("fn main() {}".to_string()));
        store.on_change(SettingKey::FontFamily, SettingValue::Text("Iosevka".to_string()));

        store.reset_default_settings();

        assert_eq!(store.settings().font_family.as_deref(), Some("Hack"));
        assert_eq!(store.settings().code.as_deref(), Some("fn main() {}"));
    }

    #[test]
    fn test_save_if_dirty_writes_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut store = SettingsStore::new(Config::default(), Some(path.clone()));

        store.save_if_dirty().unwrap();
        assert!(!path.exists(), "clean store must not write");

        store.on_change(SettingKey::Watermark, SettingValue::Bool(true));
        store.save_if_dirty().unwrap();

        let saved = Config::from_file(&path).unwrap();
        assert_eq!(saved.settings.watermark, Some(true));
        assert!(!store.is_dirty());
    }
}
