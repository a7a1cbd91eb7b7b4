//! Input model: pointer kinds and the drag state machine.
//!
//! `PointerKind` tells the engine whether an event came from a mouse or a
//! finger. For touch input the host also reports the element currently under
//! the finger; the engine keeps the one seen at touch start as an anchor and
//! ends the stroke when the finger slides onto something else. `InputState`
//! is the drag being tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::surface::Point;

/// Source of a pointer event.
///
/// `A` identifies "the element under the finger". In the browser it is a DOM
/// element, compared by JS identity.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerKind<A> {
    /// Mouse or pen; the cursor preview follows it.
    Mouse,
    /// Touch point, with the element under it if the host could resolve one.
    Touch { target: Option<A> },
}

impl<A> PointerKind<A> {
    #[must_use]
    pub fn is_touch(&self) -> bool {
        matches!(self, Self::Touch { .. })
    }
}

/// Why a drag ended. Only used for diagnostics; every reason resets the same
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// Mouse button released or finger lifted.
    Release,
    /// Mouse left the surface.
    Leave,
    /// Touch sequence cancelled by the browser.
    Cancel,
    /// Finger slid off the element it started on.
    SlideOff,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone)]
pub enum InputState<A> {
    /// No drag in progress; waiting for the next pointer-down.
    Idle,
    /// A stroke is being drawn.
    Drawing {
        /// Local position of the previous pointer sample; start of the next segment.
        last: Point,
        /// Element under the finger at touch start; `None` for mouse drags.
        touch_anchor: Option<A>,
    },
}

impl<A> Default for InputState<A> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<A: PartialEq> InputState<A> {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Whether a touch at `target` has left the element the drag started on.
    ///
    /// Mouse drags never slide off.
    #[must_use]
    pub fn slid_off(&self, target: Option<&A>) -> bool {
        match self {
            Self::Drawing { touch_anchor: Some(anchor), .. } => target != Some(anchor),
            Self::Drawing { touch_anchor: None, .. } | Self::Idle => false,
        }
    }
}
