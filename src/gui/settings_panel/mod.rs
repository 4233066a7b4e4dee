//! Settings panel: the gear-icon dropdown with font, theme, layout and export options
//!
//! The panel owns nothing but its open/closed state. It reads the host's
//! [`Settings`](crate::settings::Settings) to draw itself and reports every
//! interaction as a [`PanelEvent`]; [`SettingsPanel::process`] turns those into
//! calls on the host's [`SettingsHost`] implementation.
//!
//! Dismissal on outside clicks is a plain hit test: the host forwards pointer
//! presses to [`SettingsPanel::handle_pointer_press`], which compares them with
//! the rectangles recorded during the last render.

mod bounds;
mod format_task;
mod render;
mod widgets;

pub use bounds::PanelBounds;

use std::sync::Arc;

use egui::Pos2;
use tracing::debug;

use crate::format::CodeFormatter;
use crate::settings::{SettingChange, SettingKey, SettingValue};
use format_task::{FormatPoll, FormatTask};

/// Owner of the settings object, notified of every requested change
pub trait SettingsHost {
    /// Set `key` to `value`
    fn on_change(&mut self, key: SettingKey, value: SettingValue);

    /// Restore the default settings
    fn reset_default_settings(&mut self);
}

/// Whether the dropdown is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

impl PanelVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Closed => PanelVisibility::Open,
            PanelVisibility::Open => PanelVisibility::Closed,
        }
    }
}

/// Something the user did in the panel during one frame
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// A control changed a value
    Change(SettingChange),
    /// "Prettify code" was clicked; carries the code as shown at that moment
    Format { code: String },
    /// "Reset settings" was clicked
    Reset,
}

/// The settings dropdown
pub struct SettingsPanel {
    visibility: PanelVisibility,
    bounds: PanelBounds,
    formatter: Arc<dyn CodeFormatter>,
    format_task: Option<FormatTask>,
    repaint_ctx: Option<egui::Context>,
}

impl SettingsPanel {
    pub fn new(formatter: Arc<dyn CodeFormatter>) -> Self {
        Self {
            visibility: PanelVisibility::Closed,
            bounds: PanelBounds::default(),
            formatter,
            format_task: None,
            repaint_ctx: None,
        }
    }

    /// Wake the UI when a background format finishes
    pub fn with_repaint_context(mut self, ctx: egui::Context) -> Self {
        self.repaint_ctx = Some(ctx);
        self
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == PanelVisibility::Open
    }

    pub fn bounds(&self) -> &PanelBounds {
        &self.bounds
    }

    /// Record where the panel was drawn (done by `ui`; exposed for hosts that lay it out themselves)
    pub fn set_bounds(&mut self, bounds: PanelBounds) {
        self.bounds = bounds;
    }

    /// Flip between open and closed (display icon click)
    pub fn toggle(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// Close the dropdown
    pub fn dismiss(&mut self) {
        self.visibility = PanelVisibility::Closed;
    }

    /// Pointer-press hook for click-outside dismissal.
    ///
    /// Returns true if the press closed the panel.
    pub fn handle_pointer_press(&mut self, pos: Pos2) -> bool {
        if !self.is_open() || self.bounds.contains(pos) {
            return false;
        }
        debug!("[codeshot] Press outside settings panel at {:?}, closing", pos);
        self.dismiss();
        true
    }

    /// Forward one field change to the host, untouched
    pub fn dispatch<H: SettingsHost + ?Sized>(
        &self,
        host: &mut H,
        key: SettingKey,
        value: SettingValue,
    ) {
        host.on_change(key, value);
    }

    /// Ask the host to restore its defaults
    pub fn reset<H: SettingsHost + ?Sized>(&self, host: &mut H) {
        host.reset_default_settings();
    }

    /// Start formatting `code` in the background.
    ///
    /// The result arrives through [`poll_format`](Self::poll_format). Starting a
    /// new format replaces any pending one; the older result is then dropped.
    pub fn format(&mut self, code: &str) {
        if self.format_task.is_some() {
            debug!("[codeshot] Replacing in-flight format request");
        }
        self.format_task = Some(FormatTask::spawn(
            Arc::clone(&self.formatter),
            code.to_string(),
            self.repaint_ctx.clone(),
        ));
    }

    pub fn is_formatting(&self) -> bool {
        self.format_task.is_some()
    }

    /// Deliver a finished format to the host.
    ///
    /// Returns true if a `code` change was dispatched. A failed format finishes
    /// silently.
    pub fn poll_format<H: SettingsHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(task) = &self.format_task else {
            return false;
        };

        match task.poll() {
            FormatPoll::Pending => false,
            FormatPoll::Done(result) => {
                self.format_task = None;
                match result {
                    Some(change) => {
                        self.dispatch(host, change.key, change.value);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Apply one frame's worth of panel events to the host
    pub fn process<H: SettingsHost + ?Sized>(&mut self, host: &mut H, events: Vec<PanelEvent>) {
        for event in events {
            match event {
                PanelEvent::Change(change) => self.dispatch(host, change.key, change.value),
                PanelEvent::Format { code } => self.format(&code),
                PanelEvent::Reset => self.reset(host),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatError;
    use async_trait::async_trait;
    use egui::{pos2, vec2, Rect};

    struct NeverCalled;

    #[async_trait]
    impl CodeFormatter for NeverCalled {
        async fn format(&self, _code: &str) -> Result<String, FormatError> {
            Err(FormatError::Rejected("unused".to_string()))
        }
    }

    fn panel() -> SettingsPanel {
        let mut panel = SettingsPanel::new(Arc::new(NeverCalled));
        panel.set_bounds(PanelBounds {
            display: Some(Rect::from_min_size(pos2(10.0, 10.0), vec2(37.0, 37.0))),
            dropdown: Some(Rect::from_min_size(pos2(10.0, 54.0), vec2(184.0, 400.0))),
        });
        panel
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(panel().visibility(), PanelVisibility::Closed);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut panel = panel();
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
        panel.toggle();
        assert!(panel.is_open());
    }

    #[test]
    fn test_outside_press_closes_open_panel() {
        let mut panel = panel();
        panel.toggle();
        assert!(panel.handle_pointer_press(pos2(600.0, 300.0)));
        assert_eq!(panel.visibility(), PanelVisibility::Closed);
    }

    #[test]
    fn test_outside_press_while_closed_is_noop() {
        let mut panel = panel();
        assert!(!panel.handle_pointer_press(pos2(600.0, 300.0)));
        assert_eq!(panel.visibility(), PanelVisibility::Closed);
    }

    #[test]
    fn test_inside_press_keeps_panel_open() {
        let mut panel = panel();
        panel.toggle();
        assert!(!panel.handle_pointer_press(pos2(20.0, 20.0)));
        assert!(!panel.handle_pointer_press(pos2(100.0, 200.0)));
        assert!(panel.is_open());
    }

    #[test]
    fn test_visibility_toggled() {
        assert_eq!(PanelVisibility::Closed.toggled(), PanelVisibility::Open);
        assert_eq!(PanelVisibility::Open.toggled(), PanelVisibility::Closed);
    }
}
