//! GUI module for the codeshot application
//!
//! A single window: a toolbar holding the settings panel (gear icon plus
//! dropdown), a code editor, and a read-out of the effective settings.

pub mod app;
pub mod runner;
pub mod settings_panel;
pub mod store;
pub mod theme;

pub use app::CodeshotApp;
pub use runner::run_gui;
pub use settings_panel::{PanelBounds, PanelEvent, PanelVisibility, SettingsHost, SettingsPanel};
pub use store::SettingsStore;
