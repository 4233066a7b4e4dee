//! Configuration loading and management

mod formatter;
mod gui;
mod io;

pub use formatter::FormatterSettings;
pub use gui::GuiSettings;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// External formatter used by "Prettify code"
    #[serde(default)]
    pub formatter: FormatterSettings,

    /// Window settings
    #[serde(default)]
    pub gui: GuiSettings,

    /// The persisted screenshot settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Create a config with default values, including the default screenshot settings
    pub fn with_defaults() -> Self {
        Self {
            formatter: FormatterSettings::default(),
            gui: GuiSettings::default(),
            settings: Settings::with_defaults(),
        }
    }
}
