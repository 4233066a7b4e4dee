//! Settings command implementations

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use codeshot::config::Config;
use codeshot::gui::{SettingsHost, SettingsStore};
use codeshot::settings::{SettingKey, SettingValue};

/// Print every setting, using the panel's fallback for unset values
pub fn show_command(config_path: &Path, json: bool) -> Result<()> {
    let config = Config::from_file(config_path)?;
    let settings = &config.settings;

    if json {
        let resolved: BTreeMap<&str, SettingValue> = SettingKey::ALL
            .into_iter()
            .map(|key| (key.as_str(), settings.display_value(key)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    for key in SettingKey::ALL {
        if key == SettingKey::Code {
            continue;
        }
        let marker = if settings.get(key).is_some() { "" } else { " (default)" };
        println!("  {:<22} {}{}", key.as_str(), settings.display_value(key), marker);
    }

    let lines = settings.code_or_default().lines().count();
    println!("  {:<22} {} line(s)", SettingKey::Code.as_str(), lines);

    Ok(())
}

/// Restore default settings in the config file, keeping the saved code
pub fn reset_command(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path)?;
    let mut store = SettingsStore::new(config, Some(config_path.to_path_buf()));

    store.reset_default_settings();
    store.save_if_dirty()?;

    println!("Settings reset: {}", config_path.display());
    Ok(())
}
