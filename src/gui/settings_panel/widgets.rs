//! Leaf controls of the settings panel
//!
//! Each control shows the current value and, when the user changes it, pushes a
//! single [`PanelEvent::Change`] for its key. None of them hold state between
//! frames: the value always comes back from the host's settings.

use egui::RichText;

use super::PanelEvent;
use crate::gui::theme::{ACCENT_RED, TEXT_MUTED, TEXT_PRIMARY};
use crate::settings::options::SliderSpec;
use crate::settings::{SettingChange, SettingKey, SettingValue};

fn emit(events: &mut Vec<PanelEvent>, key: SettingKey, value: impl Into<SettingValue>) {
    events.push(PanelEvent::Change(SettingChange::new(key, value)));
}

/// Select with a fixed list of (value, label) choices
pub(super) fn render_select<'a>(
    ui: &mut egui::Ui,
    key: SettingKey,
    label: &str,
    selected: &str,
    choices: impl IntoIterator<Item = (&'a str, &'a str)>,
    events: &mut Vec<PanelEvent>,
) {
    let choices: Vec<(&str, &str)> = choices.into_iter().collect();
    let selected_label = choices
        .iter()
        .find(|(value, _)| *value == selected)
        .map(|(_, label)| *label)
        .unwrap_or(selected);

    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(TEXT_MUTED));
        egui::ComboBox::from_id_salt(key.as_str())
            .selected_text(RichText::new(selected_label).color(TEXT_PRIMARY))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for (value, label) in &choices {
                    if ui.selectable_label(*value == selected, *label).clicked() && *value != selected {
                        emit(events, key, *value);
                    }
                }
            });
    });
}

/// Single-line text input
pub(super) fn render_text_input(
    ui: &mut egui::Ui,
    key: SettingKey,
    value: &str,
    hint: &str,
    events: &mut Vec<PanelEvent>,
) {
    let mut buffer = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .hint_text(hint)
            .text_color(TEXT_PRIMARY)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        emit(events, key, buffer);
    }
}

/// Labeled slider over the range in `slider`
///
/// egui snaps the bound value to the step while drawing, so a stored value that
/// is off-step or out of range reads as changed on every frame. Only changes
/// made while the user is driving the slider are reported.
pub(super) fn render_slider(
    ui: &mut egui::Ui,
    key: SettingKey,
    slider: &SliderSpec,
    value: f32,
    events: &mut Vec<PanelEvent>,
) {
    let mut current = value;
    ui.label(RichText::new(slider.label).small().color(TEXT_MUTED));
    let response = ui.add(
        egui::Slider::new(&mut current, slider.min..=slider.max)
            .step_by(f64::from(slider.step))
            .suffix(if slider.percentage { "%" } else { "px" }),
    );
    let interacting =
        response.is_pointer_button_down_on() || response.dragged() || response.has_focus();
    if response.changed() && interacting {
        emit(events, key, current);
    }
}

/// Labeled on/off toggle
pub(super) fn render_toggle(
    ui: &mut egui::Ui,
    key: SettingKey,
    label: &str,
    enabled: bool,
    events: &mut Vec<PanelEvent>,
) {
    let mut checked = enabled;
    if ui
        .checkbox(&mut checked, RichText::new(label).color(TEXT_PRIMARY))
        .changed()
    {
        emit(events, key, checked);
    }
}

/// Centered, frameless action row; returns true when clicked
pub(super) fn render_action(ui: &mut egui::Ui, label: &str, danger: bool) -> bool {
    let color = if danger { ACCENT_RED } else { TEXT_PRIMARY };
    ui.vertical_centered(|ui| {
        ui.add(egui::Button::new(RichText::new(label).color(color)).frame(false))
            .clicked()
    })
    .inner
}
