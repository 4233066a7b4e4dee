//! Choices, ranges and display fallbacks for the settings panel controls

/// Window themes offered by the theme select: (value, label)
pub const WINDOW_THEMES: &[(&str, &str)] = &[("none", "None"), ("sharp", "Sharp"), ("bw", "Black & White")];

/// Font families offered by the font select
pub const FONT_FAMILIES: &[&str] = &[
    "Anonymous Pro",
    "Droid Sans Mono",
    "Fantasque Sans Mono",
    "Fira Code",
    "Hack",
    "IBM Plex Mono",
    "Inconsolata",
    "Iosevka",
    "Monoid",
    "Source Code Pro",
    "Space Mono",
    "Ubuntu Mono",
];

/// Export scale factors offered by the export size select
pub const EXPORT_SIZES: &[&str] = &["1x", "2x", "4x"];

// Display fallbacks for absent values
pub const FALLBACK_WINDOW_THEME: &str = "none";
pub const FALLBACK_FONT_FAMILY: &str = "Hack";
pub const FALLBACK_FONT_SIZE: f32 = 13.0;
pub const FALLBACK_LINE_HEIGHT: f32 = 133.0;
pub const FALLBACK_PADDING_VERTICAL: f32 = 16.0;
pub const FALLBACK_PADDING_HORIZONTAL: f32 = 32.0;
pub const FALLBACK_DROP_SHADOW_OFFSET_Y: f32 = 20.0;
pub const FALLBACK_DROP_SHADOW_BLUR_RADIUS: f32 = 68.0;
pub const FALLBACK_EXPORT_SIZE: &str = "2x";

/// Range and step of a numeric slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Show the value as a percentage instead of pixels
    pub percentage: bool,
}

impl SliderSpec {
    const fn px(label: &'static str, max: f32) -> Self {
        Self {
            label,
            min: 0.0,
            max,
            step: 1.0,
            percentage: false,
        }
    }
}

pub const FONT_SIZE_SLIDER: SliderSpec = SliderSpec {
    label: "Font size",
    min: 10.0,
    max: 18.0,
    step: 0.5,
    percentage: false,
};

pub const LINE_HEIGHT_SLIDER: SliderSpec = SliderSpec {
    label: "Line height",
    min: 90.0,
    max: 250.0,
    step: 1.0,
    percentage: true,
};

pub const PADDING_VERTICAL_SLIDER: SliderSpec = SliderSpec::px("Padding (vertical)", 200.0);
pub const PADDING_HORIZONTAL_SLIDER: SliderSpec = SliderSpec::px("Padding (horizontal)", 100.0);
pub const DROP_SHADOW_OFFSET_Y_SLIDER: SliderSpec = SliderSpec::px("Drop shadow (offset-y)", 100.0);
pub const DROP_SHADOW_BLUR_RADIUS_SLIDER: SliderSpec =
    SliderSpec::px("Drop shadow (blur-radius)", 100.0);

