//! GUI-specific settings

use serde::{Deserialize, Serialize};

/// GUI-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Save settings to the config file as soon as they change
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            autosave: default_autosave(),
        }
    }
}

fn default_window_width() -> f32 {
    960.0
}

fn default_window_height() -> f32 {
    640.0
}

fn default_autosave() -> bool {
    true
}
