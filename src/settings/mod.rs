//! The settings object consumed by the screenshot renderer
//!
//! A flat bag of optional primitives. The settings panel only reads it; every
//! mutation goes through [`Settings::apply`] on the side of whoever owns it.

mod change;
pub mod options;

pub use change::{SettingChange, SettingKey, SettingValue, ValueKind};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use options::*;

/// Errors raised when applying a change to [`Settings`]
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Setting '{key}' expects a {expected} value, got {actual}")]
    KindMismatch {
        key: SettingKey,
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Snippet shown on first launch and kept across resets
pub const DEFAULT_CODE: &str = r#"const pluckDeep = key => obj => key.split('.').reduce((accum, key) => accum[key], obj)

const compose = (...fns) => res => fns.reduce((accum, next) => next(accum), res)

const unfold = (f, seed) => {
  const go = (f, seed, acc) => {
    const res = f(seed)
    return res ? go(f, res[1], acc.concat([res[0]])) : acc
  }
  return go(f, seed, [])
}"#;

/// Visual and export options for one code screenshot.
///
/// `None` means "never set"; the panel shows a fallback for it (see the
/// accessor methods) without writing the fallback back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_controls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_adjustment: Option<bool>,
    /// Percent of the font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_shadow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_shadow_offset_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_shadow_blur_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squared_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Settings {
    /// The defaults a fresh install (or "Reset settings") starts from
    pub fn with_defaults() -> Self {
        Self {
            window_theme: Some("none".to_string()),
            filename: None,
            font_family: Some("Hack".to_string()),
            font_size: Some(14.0),
            window_controls: Some(true),
            line_numbers: Some(false),
            width_adjustment: Some(true),
            line_height: Some(133.0),
            padding_vertical: Some(48.0),
            padding_horizontal: Some(32.0),
            drop_shadow: Some(true),
            drop_shadow_offset_y: Some(20.0),
            drop_shadow_blur_radius: Some(68.0),
            squared_image: Some(false),
            watermark: Some(false),
            timestamp: Some(false),
            export_size: Some("2x".to_string()),
            code: Some(DEFAULT_CODE.to_string()),
        }
    }

    /// Set one key. The value must be of the key's kind; otherwise nothing changes.
    pub fn apply(&mut self, change: &SettingChange) -> Result<(), SettingsError> {
        let key = change.key;
        match (key, &change.value) {
            (SettingKey::WindowTheme, SettingValue::Text(v)) => self.window_theme = Some(v.clone()),
            (SettingKey::Filename, SettingValue::Text(v)) => self.filename = Some(v.clone()),
            (SettingKey::FontFamily, SettingValue::Text(v)) => self.font_family = Some(v.clone()),
            (SettingKey::ExportSize, SettingValue::Text(v)) => self.export_size = Some(v.clone()),
            (SettingKey::Code, SettingValue::Text(v)) => self.code = Some(v.clone()),
            (SettingKey::FontSize, SettingValue::Number(v)) => self.font_size = Some(*v),
            (SettingKey::LineHeight, SettingValue::Number(v)) => self.line_height = Some(*v),
            (SettingKey::PaddingVertical, SettingValue::Number(v)) => {
                self.padding_vertical = Some(*v)
            }
            (SettingKey::PaddingHorizontal, SettingValue::Number(v)) => {
                self.padding_horizontal = Some(*v)
            }
            (SettingKey::DropShadowOffsetY, SettingValue::Number(v)) => {
                self.drop_shadow_offset_y = Some(*v)
            }
            (SettingKey::DropShadowBlurRadius, SettingValue::Number(v)) => {
                self.drop_shadow_blur_radius = Some(*v)
            }
            (SettingKey::WindowControls, SettingValue::Bool(v)) => self.window_controls = Some(*v),
            (SettingKey::LineNumbers, SettingValue::Bool(v)) => self.line_numbers = Some(*v),
            (SettingKey::WidthAdjustment, SettingValue::Bool(v)) => {
                self.width_adjustment = Some(*v)
            }
            (SettingKey::DropShadow, SettingValue::Bool(v)) => self.drop_shadow = Some(*v),
            (SettingKey::SquaredImage, SettingValue::Bool(v)) => self.squared_image = Some(*v),
            (SettingKey::Watermark, SettingValue::Bool(v)) => self.watermark = Some(*v),
            (SettingKey::Timestamp, SettingValue::Bool(v)) => self.timestamp = Some(*v),
            (key, value) => {
                return Err(SettingsError::KindMismatch {
                    key,
                    expected: key.kind(),
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }

    /// The stored value for `key`, if one was ever set
    pub fn get(&self, key: SettingKey) -> Option<SettingValue> {
        let text = |v: &Option<String>| v.clone().map(SettingValue::Text);
        let number = |v: Option<f32>| v.map(SettingValue::Number);
        let flag = |v: Option<bool>| v.map(SettingValue::Bool);

        match key {
            SettingKey::WindowTheme => text(&self.window_theme),
            SettingKey::Filename => text(&self.filename),
            SettingKey::FontFamily => text(&self.font_family),
            SettingKey::FontSize => number(self.font_size),
            SettingKey::WindowControls => flag(self.window_controls),
            SettingKey::LineNumbers => flag(self.line_numbers),
            SettingKey::WidthAdjustment => flag(self.width_adjustment),
            SettingKey::LineHeight => number(self.line_height),
            SettingKey::PaddingVertical => number(self.padding_vertical),
            SettingKey::PaddingHorizontal => number(self.padding_horizontal),
            SettingKey::DropShadow => flag(self.drop_shadow),
            SettingKey::DropShadowOffsetY => number(self.drop_shadow_offset_y),
            SettingKey::DropShadowBlurRadius => number(self.drop_shadow_blur_radius),
            SettingKey::SquaredImage => flag(self.squared_image),
            SettingKey::Watermark => flag(self.watermark),
            SettingKey::Timestamp => flag(self.timestamp),
            SettingKey::ExportSize => text(&self.export_size),
            SettingKey::Code => text(&self.code),
        }
    }

    /// The value the panel displays for `key`: stored value or its fallback
    pub fn display_value(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::WindowTheme => self.window_theme_or_default().into(),
            SettingKey::Filename => self.filename_or_default().into(),
            SettingKey::FontFamily => self.font_family_or_default().into(),
            SettingKey::FontSize => self.font_size_or_default().into(),
            SettingKey::LineHeight => self.line_height_or_default().into(),
            SettingKey::PaddingVertical => self.padding_vertical_or_default().into(),
            SettingKey::PaddingHorizontal => self.padding_horizontal_or_default().into(),
            SettingKey::DropShadowOffsetY => self.drop_shadow_offset_y_or_default().into(),
            SettingKey::DropShadowBlurRadius => self.drop_shadow_blur_radius_or_default().into(),
            SettingKey::ExportSize => self.export_size_or_default().into(),
            SettingKey::Code => self.code_or_default().into(),
            SettingKey::WindowControls
            | SettingKey::LineNumbers
            | SettingKey::WidthAdjustment
            | SettingKey::DropShadow
            | SettingKey::SquaredImage
            | SettingKey::Watermark
            | SettingKey::Timestamp => self.flag(key).into(),
        }
    }

    pub fn window_theme_or_default(&self) -> &str {
        self.window_theme.as_deref().unwrap_or(FALLBACK_WINDOW_THEME)
    }

    pub fn filename_or_default(&self) -> &str {
        self.filename.as_deref().unwrap_or("")
    }

    pub fn font_family_or_default(&self) -> &str {
        self.font_family.as_deref().unwrap_or(FALLBACK_FONT_FAMILY)
    }

    pub fn font_size_or_default(&self) -> f32 {
        self.font_size.unwrap_or(FALLBACK_FONT_SIZE)
    }

    pub fn line_height_or_default(&self) -> f32 {
        self.line_height.unwrap_or(FALLBACK_LINE_HEIGHT)
    }

    pub fn padding_vertical_or_default(&self) -> f32 {
        self.padding_vertical.unwrap_or(FALLBACK_PADDING_VERTICAL)
    }

    pub fn padding_horizontal_or_default(&self) -> f32 {
        self.padding_horizontal.unwrap_or(FALLBACK_PADDING_HORIZONTAL)
    }

    pub fn drop_shadow_offset_y_or_default(&self) -> f32 {
        self.drop_shadow_offset_y.unwrap_or(FALLBACK_DROP_SHADOW_OFFSET_Y)
    }

    pub fn drop_shadow_blur_radius_or_default(&self) -> f32 {
        self.drop_shadow_blur_radius
            .unwrap_or(FALLBACK_DROP_SHADOW_BLUR_RADIUS)
    }

    pub fn export_size_or_default(&self) -> &str {
        self.export_size.as_deref().unwrap_or(FALLBACK_EXPORT_SIZE)
    }

    pub fn code_or_default(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    /// A boolean option; absent toggles read as off
    pub fn flag(&self, key: SettingKey) -> bool {
        match self.get(key) {
            Some(SettingValue::Bool(b)) => b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_matching_field() {
        let mut settings = Settings::default();
        settings
            .apply(&SettingChange::new(SettingKey::FontFamily, "Fira Code"))
            .unwrap();
        settings
            .apply(&SettingChange::new(SettingKey::PaddingVertical, 64.0))
            .unwrap();
        settings
            .apply(&SettingChange::new(SettingKey::Watermark, true))
            .unwrap();

        assert_eq!(settings.font_family.as_deref(), Some("Fira Code"));
        assert_eq!(settings.padding_vertical, Some(64.0));
        assert_eq!(settings.watermark, Some(true));
    }

    #[test]
    fn test_apply_rejects_wrong_kind() {
        let mut settings = Settings::with_defaults();
        let before = settings.clone();

        let err = settings
            .apply(&SettingChange::new(SettingKey::FontSize, "large"))
            .unwrap_err();

        assert_eq!(
            err,
            SettingsError::KindMismatch {
                key: SettingKey::FontSize,
                expected: ValueKind::Number,
                actual: ValueKind::Text,
            }
        );
        assert_eq!(settings, before);
    }

    #[test]
    fn test_every_key_accepts_its_own_kind() {
        let mut settings = Settings::default();
        for key in SettingKey::ALL {
            let value = match key.kind() {
                ValueKind::Text => SettingValue::from("x"),
                ValueKind::Number => SettingValue::from(1.0),
                ValueKind::Bool => SettingValue::from(true),
            };
            settings.apply(&SettingChange::new(key, value.clone())).unwrap();
            assert_eq!(settings.get(key), Some(value), "key {}", key);
        }
    }

    #[test]
    fn test_display_fallbacks_for_empty_settings() {
        let settings = Settings::default();
        assert_eq!(settings.window_theme_or_default(), "none");
        assert_eq!(settings.font_family_or_default(), "Hack");
        assert_eq!(settings.font_size_or_default(), 13.0);
        assert_eq!(settings.padding_vertical_or_default(), 16.0);
        assert_eq!(settings.padding_horizontal_or_default(), 32.0);
        assert_eq!(settings.drop_shadow_offset_y_or_default(), 20.0);
        assert_eq!(settings.drop_shadow_blur_radius_or_default(), 68.0);
        assert_eq!(settings.export_size_or_default(), "2x");
        assert_eq!(settings.filename_or_default(), "");
        assert!(!settings.flag(SettingKey::DropShadow));
    }

    #[test]
    fn test_display_value_prefers_stored_value() {
        let settings = Settings {
            font_size: Some(16.5),
            ..Settings::default()
        };
        assert_eq!(
            settings.display_value(SettingKey::FontSize),
            SettingValue::Number(16.5)
        );
        assert_eq!(
            settings.display_value(SettingKey::LineHeight),
            SettingValue::Number(133.0)
        );
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let settings = Settings {
            font_family: Some("Iosevka".to_string()),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"fontFamily":"Iosevka"}"#);
    }
}
