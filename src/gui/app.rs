//! Main application window: toolbar with the settings panel, code editor and
//! a read-out of the effective settings

use egui::{RichText, ScrollArea};
use tracing::warn;

use super::settings_panel::{SettingsHost, SettingsPanel};
use super::store::SettingsStore;
use super::theme::{ACCENT_YELLOW, BG_EDITOR, BG_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, apply_style};
use crate::settings::{SettingKey, SettingValue};

pub struct CodeshotApp {
    store: SettingsStore,
    panel: SettingsPanel,
    /// Last save error, shown in the toolbar until the next successful save
    save_error: Option<String>,
}

impl CodeshotApp {
    pub fn new(store: SettingsStore, panel: SettingsPanel) -> Self {
        Self {
            store,
            panel,
            save_error: None,
        }
    }

    /// Route a pointer press to the panel's click-outside check.
    ///
    /// Combo-box lists are drawn outside the dropdown, so presses are ignored
    /// while any popup is open.
    fn dispatch_pointer_press(&mut self, ctx: &egui::Context) {
        let press = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });

        if let Some(pos) = press {
            if !egui::Popup::is_any_open(ctx) {
                self.panel.handle_pointer_press(pos);
            }
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let events = self.panel.ui(ui, self.store.settings());
            self.panel.process(&mut self.store, events);

            ui.label(RichText::new("codeshot").monospace().color(ACCENT_YELLOW));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !self.store.config().gui.autosave
                    && self.store.is_dirty()
                    && ui.button("Save").clicked()
                {
                    self.save();
                }
                if let Some(err) = &self.save_error {
                    ui.label(RichText::new(err).small().color(TEXT_MUTED));
                }
            });
        });
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let mut code = self.store.settings().code_or_default().to_string();
        let font_size = self.store.settings().font_size_or_default();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut code)
                        .font(egui::FontId::monospace(font_size))
                        .text_color(TEXT_PRIMARY)
                        .background_color(BG_EDITOR)
                        .desired_width(f32::INFINITY)
                        .desired_rows(20)
                        .code_editor(),
                );
                if response.changed() {
                    self.store.on_change(SettingKey::Code, SettingValue::Text(code));
                }
            });
    }

    fn render_summary(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Current settings").monospace().color(TEXT_PRIMARY));
        ui.add_space(8.0);

        let settings = self.store.settings();
        egui::Grid::new("settings_summary")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for key in SettingKey::ALL.into_iter().filter(|k| *k != SettingKey::Code) {
                    ui.label(RichText::new(key.as_str()).small().color(TEXT_MUTED));
                    ui.label(
                        RichText::new(settings.display_value(key).to_string())
                            .small()
                            .color(TEXT_PRIMARY),
                    );
                    ui.end_row();
                }
            });
    }

    fn save(&mut self) {
        match self.store.save_if_dirty() {
            Ok(()) => self.save_error = None,
            Err(e) => {
                warn!("[codeshot] Failed to save settings: {:#}", e);
                self.save_error = Some(format!("Save failed: {}", e));
            }
        }
    }
}

impl eframe::App for CodeshotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_style(ctx);

        // Uses last frame's bounds, so it must run before the panel redraws
        self.dispatch_pointer_press(ctx);

        self.panel.poll_format(&mut self.store);

        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_toolbar(ui);
            });

        egui::SidePanel::right("summary")
            .default_width(240.0)
            .resizable(true)
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_summary(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        if self.store.config().gui.autosave {
            self.save();
        }
    }
}
