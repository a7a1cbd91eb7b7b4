//! Frame plan: everything one tick has to draw, already in the buffer frame.
//!
//! The engine core produces a [`FramePlan`] without touching the browser;
//! [`crate::render`] turns it into canvas calls.

use crate::controls::Controls;
use crate::surface::Point;

/// Paint parameters shared by every mark of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Ink {
    /// CSS color string.
    pub color: String,
    /// Global alpha in `[0, 1]`.
    pub alpha: f64,
    /// Stroke width (dot diameter) in pixels.
    pub width: f64,
}

impl Ink {
    /// Ink for the current control values; erasing paints opaque background.
    #[must_use]
    pub fn from_controls(controls: &Controls) -> Self {
        Self {
            color: controls.ink_color().to_owned(),
            alpha: controls.ink_alpha(),
            width: controls.width,
        }
    }
}

/// One primitive, in buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// Filled circle of diameter `Ink::width`.
    Dot { center: Point },
    /// Round-capped line of width `Ink::width`.
    Line { from: Point, to: Point },
}

/// Output of one engine tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// Rotation to apply to the surface element, in radians within `[0, 2π)`.
    pub rotation: f64,
    /// Wipe the buffer before drawing `marks`.
    pub clear: bool,
    pub ink: Ink,
    /// Marks in insertion order.
    pub marks: Vec<Mark>,
}

impl FramePlan {
    /// CSS `transform` value that spins the surface element.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("rotate({}rad)", self.rotation)
    }
}
