#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Note shown at the bottom of the control panel.
pub const PANEL_NOTE: &str = "Inspired by potter's-wheel drawings seen online. Fast speeds flicker, so take care.";

/// Link offered next to the note.
pub const RELATED_LINK_URL: &str = "https://pin.it/74HTb0Khk";

/// Control panel chrome state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Panel body hidden; only the title bar shows.
    pub collapsed: bool,
    /// Bumped once per press of the clear button. The canvas host watches it
    /// and forwards each change as a single clear request.
    pub clear_seq: u64,
}

impl PanelState {
    /// Panel state for a fresh page; touch-only devices start collapsed.
    #[must_use]
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed, clear_seq: 0 }
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn request_clear(&mut self) {
        self.clear_seq = self.clear_seq.wrapping_add(1);
    }
}
