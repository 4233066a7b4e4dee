//! Hit testing for click-outside dismissal

use egui::{Pos2, Rect};

/// Screen rectangles the panel occupied in the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelBounds {
    /// The gear icon
    pub display: Option<Rect>,
    /// The dropdown, only while open
    pub dropdown: Option<Rect>,
}

impl PanelBounds {
    /// Check if a point lies on the icon or the dropdown
    pub fn contains(&self, pos: Pos2) -> bool {
        [self.display, self.dropdown]
            .into_iter()
            .flatten()
            .any(|rect| rect.contains(pos))
    }
}
