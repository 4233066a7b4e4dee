//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Default configuration content for codeshot init
pub const DEFAULT_CONFIG: &str = r#"# Codeshot Configuration
# =======================

# ============================================================================
# FORMATTER - used by "Prettify code" in the settings panel
# ============================================================================
#
# The current code is written to the command's stdin; stdout replaces it.
# A failing formatter leaves the code untouched.

[formatter]
command = "prettier"
args = ["--parser", "babel", "--no-semi", "--single-quote"]
timeout_secs = 10

# ============================================================================
# GUI
# ============================================================================

[gui]
window_width = 960.0
window_height = 640.0
# Write settings back to this file as soon as they change
autosave = true

# ============================================================================
# SETTINGS - the screenshot options edited by the settings panel
# ============================================================================
#
# Any option left out is shown with its fallback value in the panel.

[settings]
windowTheme = "none"
fontFamily = "Hack"
fontSize = 14.0
windowControls = true
lineNumbers = false
widthAdjustment = true
lineHeight = 133.0
paddingVertical = 48.0
paddingHorizontal = 32.0
dropShadow = true
dropShadowOffsetY = 20.0
dropShadowBlurRadius = 68.0
squaredImage = false
watermark = false
timestamp = false
exportSize = "2x"
"#;

/// Write the default config to `config_path`
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeshot::config::Config;
    use codeshot::settings::Settings;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let defaults = Config::with_defaults();

        assert_eq!(config.formatter, defaults.formatter);
        assert_eq!(config.gui, defaults.gui);
        assert_eq!(
            config.settings,
            Settings {
                code: None,
                ..Settings::with_defaults()
            }
        );
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_command(&path, false).unwrap();
        assert!(init_command(&path, false).is_err());
        init_command(&path, true).unwrap();
    }
}
