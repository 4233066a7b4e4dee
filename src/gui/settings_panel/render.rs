//! Drawing the gear icon and the dropdown

use egui::{Color32, Id, RichText, Stroke, Vec2, pos2};

use super::widgets::{render_action, render_select, render_slider, render_text_input, render_toggle};
use super::{PanelBounds, PanelEvent, SettingsPanel};
use crate::gui::theme::{BG_BLACK, BG_HOVER, BORDER, TEXT_PRIMARY};
use crate::settings::options::{
    DROP_SHADOW_BLUR_RADIUS_SLIDER, DROP_SHADOW_OFFSET_Y_SLIDER, EXPORT_SIZES, FONT_FAMILIES,
    FONT_SIZE_SLIDER, LINE_HEIGHT_SLIDER, PADDING_HORIZONTAL_SLIDER, PADDING_VERTICAL_SLIDER,
    WINDOW_THEMES,
};
use crate::settings::{SettingKey, Settings};

/// Dropdown width in points
const DROPDOWN_WIDTH: f32 = 184.0;
/// Gap between the icon's top edge and the dropdown's top edge
const DROPDOWN_OFFSET_Y: f32 = 44.0;
/// Horizontal position of the pointer triangle from the dropdown's left edge
const POINTER_FROM_LEFT: f32 = 15.0;
const POINTER_SIZE: f32 = 6.0;
const ICON_SIZE: f32 = 37.0;

impl SettingsPanel {
    /// Render the icon into `ui` and, while open, the dropdown below it.
    ///
    /// Returns what the user did this frame; hand it to [`SettingsPanel::process`].
    pub fn ui(&mut self, ui: &mut egui::Ui, settings: &Settings) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        let icon = self.render_display_icon(ui);
        let mut bounds = PanelBounds {
            display: Some(icon.rect),
            dropdown: None,
        };

        if icon.clicked() {
            self.toggle();
        }

        if self.is_open() {
            let origin = pos2(icon.rect.left(), icon.rect.top() + DROPDOWN_OFFSET_Y);
            let area = egui::Area::new(Id::new("codeshot_settings_dropdown"))
                .fixed_pos(origin)
                .order(egui::Order::Foreground)
                .show(ui.ctx(), |ui| {
                    egui::Frame::NONE
                        .fill(BG_BLACK)
                        .stroke(Stroke::new(1.0, BORDER))
                        .corner_radius(3.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.set_width(DROPDOWN_WIDTH);
                            self.render_fields(ui, settings, &mut events);
                        });
                });
            paint_window_pointer(ui.ctx(), area.response.rect);
            bounds.dropdown = Some(area.response.rect);
        }

        self.bounds = bounds;
        events
    }

    fn render_display_icon(&self, ui: &mut egui::Ui) -> egui::Response {
        let fill = if self.is_open() { BG_HOVER } else { Color32::TRANSPARENT };
        ui.add(
            egui::Button::new(RichText::new("⚙").size(16.0).color(TEXT_PRIMARY))
                .fill(fill)
                .stroke(Stroke::new(1.0, BORDER))
                .corner_radius(3.0)
                .min_size(Vec2::splat(ICON_SIZE)),
        )
        .on_hover_text("Settings")
    }

    fn render_fields(&self, ui: &mut egui::Ui, settings: &Settings, events: &mut Vec<PanelEvent>) {
        render_select(
            ui,
            SettingKey::WindowTheme,
            "Theme",
            settings.window_theme_or_default(),
            WINDOW_THEMES.iter().copied(),
            events,
        );
        ui.separator();

        render_text_input(
            ui,
            SettingKey::Filename,
            settings.filename_or_default(),
            "File name...",
            events,
        );
        ui.separator();

        render_select(
            ui,
            SettingKey::FontFamily,
            "Font",
            settings.font_family_or_default(),
            FONT_FAMILIES.iter().map(|font| (*font, *font)),
            events,
        );
        ui.separator();

        render_slider(
            ui,
            SettingKey::FontSize,
            &FONT_SIZE_SLIDER,
            settings.font_size_or_default(),
            events,
        );
        ui.separator();

        for (key, label) in [
            (SettingKey::WindowControls, "Window controls"),
            (SettingKey::LineNumbers, "Line numbers"),
            (SettingKey::WidthAdjustment, "Auto-adjust width"),
        ] {
            render_toggle(ui, key, label, settings.flag(key), events);
        }

        egui::CollapsingHeader::new("Advanced")
            .id_salt("codeshot_settings_advanced")
            .show(ui, |ui| {
                self.render_advanced(ui, settings, events);
            });
    }

    fn render_advanced(&self, ui: &mut egui::Ui, settings: &Settings, events: &mut Vec<PanelEvent>) {
        render_slider(
            ui,
            SettingKey::LineHeight,
            &LINE_HEIGHT_SLIDER,
            settings.line_height_or_default(),
            events,
        );
        render_slider(
            ui,
            SettingKey::PaddingVertical,
            &PADDING_VERTICAL_SLIDER,
            settings.padding_vertical_or_default(),
            events,
        );
        render_slider(
            ui,
            SettingKey::PaddingHorizontal,
            &PADDING_HORIZONTAL_SLIDER,
            settings.padding_horizontal_or_default(),
            events,
        );
        ui.separator();

        render_toggle(
            ui,
            SettingKey::DropShadow,
            "Drop shadow",
            settings.flag(SettingKey::DropShadow),
            events,
        );
        render_slider(
            ui,
            SettingKey::DropShadowOffsetY,
            &DROP_SHADOW_OFFSET_Y_SLIDER,
            settings.drop_shadow_offset_y_or_default(),
            events,
        );
        render_slider(
            ui,
            SettingKey::DropShadowBlurRadius,
            &DROP_SHADOW_BLUR_RADIUS_SLIDER,
            settings.drop_shadow_blur_radius_or_default(),
            events,
        );
        ui.separator();

        for (key, label) in [
            (SettingKey::SquaredImage, "Squared image"),
            (SettingKey::Watermark, "Watermark"),
            (SettingKey::Timestamp, "Timestamp file name"),
        ] {
            render_toggle(ui, key, label, settings.flag(key), events);
        }
        ui.separator();

        render_select(
            ui,
            SettingKey::ExportSize,
            "Export size",
            settings.export_size_or_default(),
            EXPORT_SIZES.iter().map(|size| (*size, *size)),
            events,
        );
        ui.separator();

        let prettify_label = if self.is_formatting() {
            "Prettifying..."
        } else {
            "Prettify code"
        };
        if render_action(ui, prettify_label, false) {
            events.push(PanelEvent::Format {
                code: settings.code_or_default().to_string(),
            });
        }
        if render_action(ui, "Reset settings", true) {
            events.push(PanelEvent::Reset);
        }
    }
}

/// Small triangle on the dropdown's top edge pointing up at the icon
fn paint_window_pointer(ctx: &egui::Context, dropdown: egui::Rect) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        Id::new("codeshot_settings_pointer"),
    ));
    let tip = dropdown.left_top() + Vec2::new(POINTER_FROM_LEFT, -POINTER_SIZE);
    let base_y = dropdown.top();
    painter.add(egui::Shape::convex_polygon(
        vec![
            tip,
            pos2(tip.x + POINTER_SIZE, base_y),
            pos2(tip.x - POINTER_SIZE, base_y),
        ],
        BG_BLACK,
        Stroke::new(1.0, BORDER),
    ));
    // Hide the border under the triangle's base
    painter.line_segment(
        [
            pos2(tip.x - POINTER_SIZE + 1.0, base_y),
            pos2(tip.x + POINTER_SIZE - 1.0, base_y),
        ],
        Stroke::new(1.0, BG_BLACK),
    );
}
