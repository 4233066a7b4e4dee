//! GUI theme: near-black surfaces with white hairline borders and a yellow accent
//!
//! Color constants for the codeshot GUI.

use egui::{Color32, Stroke};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Main window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(18, 18, 18);
/// Dropdown and input backgrounds
pub const BG_BLACK: Color32 = Color32::from_rgb(18, 18, 18);
/// Hovered icon / row background
pub const BG_HOVER: Color32 = Color32::from_rgb(31, 31, 31);
/// Editor background
pub const BG_EDITOR: Color32 = Color32::from_rgb(38, 38, 38);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT & BORDERS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 150);
/// Hairline borders around the icon, dropdown and rows
pub const BORDER: Color32 = Color32::WHITE;

// ═══════════════════════════════════════════════════════════════════════════
// ACCENTS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(248, 232, 28);
pub const ACCENT_RED: Color32 = Color32::from_rgb(255, 0, 0);

/// Apply the codeshot visuals to a context
pub fn apply_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_BLACK;
    style.visuals.extreme_bg_color = BG_EDITOR;
    style.visuals.widgets.noninteractive.bg_fill = BG_BLACK;
    style.visuals.widgets.inactive.bg_fill = BG_BLACK;
    style.visuals.widgets.hovered.bg_fill = BG_HOVER;
    style.visuals.widgets.active.bg_fill = BG_HOVER;
    style.visuals.selection.bg_fill = BG_HOVER;
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_YELLOW);
    ctx.set_style(style);
}
