//! Setting keys, values and change requests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of value a setting holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// Stable identifier of a single option in the settings object.
///
/// The string form (see [`SettingKey::as_str`]) is the camelCase name used in
/// the config file, so renaming a variant must keep its serde name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    WindowTheme,
    Filename,
    FontFamily,
    FontSize,
    WindowControls,
    LineNumbers,
    WidthAdjustment,
    LineHeight,
    PaddingVertical,
    PaddingHorizontal,
    DropShadow,
    DropShadowOffsetY,
    DropShadowBlurRadius,
    SquaredImage,
    Watermark,
    Timestamp,
    ExportSize,
    Code,
}

impl SettingKey {
    /// Every key, in panel order (`Code` last)
    pub const ALL: [SettingKey; 18] = [
        SettingKey::WindowTheme,
        SettingKey::Filename,
        SettingKey::FontFamily,
        SettingKey::FontSize,
        SettingKey::WindowControls,
        SettingKey::LineNumbers,
        SettingKey::WidthAdjustment,
        SettingKey::LineHeight,
        SettingKey::PaddingVertical,
        SettingKey::PaddingHorizontal,
        SettingKey::DropShadow,
        SettingKey::DropShadowOffsetY,
        SettingKey::DropShadowBlurRadius,
        SettingKey::SquaredImage,
        SettingKey::Watermark,
        SettingKey::Timestamp,
        SettingKey::ExportSize,
        SettingKey::Code,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::WindowTheme => "windowTheme",
            SettingKey::Filename => "filename",
            SettingKey::FontFamily => "fontFamily",
            SettingKey::FontSize => "fontSize",
            SettingKey::WindowControls => "windowControls",
            SettingKey::LineNumbers => "lineNumbers",
            SettingKey::WidthAdjustment => "widthAdjustment",
            SettingKey::LineHeight => "lineHeight",
            SettingKey::PaddingVertical => "paddingVertical",
            SettingKey::PaddingHorizontal => "paddingHorizontal",
            SettingKey::DropShadow => "dropShadow",
            SettingKey::DropShadowOffsetY => "dropShadowOffsetY",
            SettingKey::DropShadowBlurRadius => "dropShadowBlurRadius",
            SettingKey::SquaredImage => "squaredImage",
            SettingKey::Watermark => "watermark",
            SettingKey::Timestamp => "timestamp",
            SettingKey::ExportSize => "exportSize",
            SettingKey::Code => "code",
        }
    }

    /// The value kind this key accepts
    pub fn kind(self) -> ValueKind {
        match self {
            SettingKey::WindowTheme
            | SettingKey::Filename
            | SettingKey::FontFamily
            | SettingKey::ExportSize
            | SettingKey::Code => ValueKind::Text,
            SettingKey::FontSize
            | SettingKey::LineHeight
            | SettingKey::PaddingVertical
            | SettingKey::PaddingHorizontal
            | SettingKey::DropShadowOffsetY
            | SettingKey::DropShadowBlurRadius => ValueKind::Number,
            SettingKey::WindowControls
            | SettingKey::LineNumbers
            | SettingKey::WidthAdjustment
            | SettingKey::DropShadow
            | SettingKey::SquaredImage
            | SettingKey::Watermark
            | SettingKey::Timestamp => ValueKind::Bool,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown setting key: {}", s))
    }
}

/// A primitive setting value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f32),
    Text(String),
}

impl SettingValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::Text(_) => ValueKind::Text,
            SettingValue::Number(_) => ValueKind::Number,
            SettingValue::Bool(_) => ValueKind::Bool,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(s) => f.write_str(s),
            SettingValue::Number(n) => write!(f, "{}", n),
            SettingValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<f32> for SettingValue {
    fn from(value: f32) -> Self {
        SettingValue::Number(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

/// A request to set one key to one value
#[derive(Debug, Clone, PartialEq)]
pub struct SettingChange {
    pub key: SettingKey,
    pub value: SettingValue,
}

impl SettingChange {
    pub fn new(key: SettingKey, value: impl Into<SettingValue>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip_through_from_str() {
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>(), Ok(key));
        }
        assert!("fontsize".parse::<SettingKey>().is_err());
    }

    #[test]
    fn test_key_as_str_matches_serde_name() {
        for key in SettingKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(SettingValue::from("Hack").kind(), ValueKind::Text);
        assert_eq!(SettingValue::from(13.0).kind(), ValueKind::Number);
        assert_eq!(SettingValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(SettingKey::FontSize.kind(), ValueKind::Number);
        assert_eq!(SettingKey::Code.kind(), ValueKind::Text);
        assert_eq!(SettingKey::Timestamp.kind(), ValueKind::Bool);
    }
}
