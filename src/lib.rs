//! Codeshot - images of your source code
//!
//! This crate holds the settings side of the tool: the flat settings object
//! the screenshot renderer consumes, the config file it is persisted in, the
//! external code formatter behind "Prettify code", and the egui settings panel
//! that edits all of it.
//!
//! ## Data flow
//!
//! The panel never mutates settings itself. It renders from a `&Settings` and
//! reports what the user did; the owner applies those changes through the
//! [`gui::SettingsHost`] trait.

pub mod config;
pub mod format;
pub mod gui;
pub mod settings;

pub use settings::{SettingChange, SettingKey, SettingValue, Settings};
