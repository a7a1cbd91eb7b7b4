//! Cursor preview: the brush-sized disc that follows the mouse over the surface.

#[cfg(test)]
#[path = "cursor_preview_test.rs"]
mod cursor_preview_test;

use canvas::controls::Controls;
use canvas::engine::Action;

/// Position and visibility of the preview disc, driven by engine [`Action`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorPreview {
    pub visible: bool,
    /// Client-space left edge in CSS pixels.
    pub left: f64,
    /// Client-space top edge in CSS pixels.
    pub top: f64,
}

impl CursorPreview {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ShowCursorPreview => self.visible = true,
            Action::HideCursorPreview => self.visible = false,
            Action::MoveCursorPreview { left, top } => {
                self.left = left;
                self.top = top;
            }
        }
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Inline style for the preview element. Size and color follow the live
    /// controls, so the disc shows what the next mark will look like.
    #[must_use]
    pub fn style(&self, controls: &Controls) -> String {
        format!(
            "left: {:.2}px; top: {:.2}px; width: {w}px; height: {w}px; background-color: {}; display: {};",
            self.left,
            self.top,
            controls.ink_color(),
            if self.visible { "block" } else { "none" },
            w = controls.width,
        )
    }
}
