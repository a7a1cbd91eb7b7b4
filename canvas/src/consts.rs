//! Shared numeric constants for the canvas crate.

use std::f64::consts::{PI, TAU};

// ── Surface ─────────────────────────────────────────────────────

/// Width and height of the drawing buffer, in CSS pixels.
pub const SURFACE_SIZE_PX: f64 = 600.0;

/// Color painted by the eraser; matches the page background.
pub const BACKGROUND_COLOR: &str = "#ffffff";

// ── Controls ────────────────────────────────────────────────────

/// Default angular speed: one full turn every 12 frames.
pub const DEFAULT_SPEED: f64 = TAU / 12.0;

/// Upper bound of the speed slider (half a turn per frame).
pub const SPEED_MAX: f64 = PI;

/// Slider step for the speed control.
pub const SPEED_STEP: f64 = 0.001;

/// Default stroke color.
pub const DEFAULT_COLOR: &str = "#0096ff";

/// Default stroke opacity.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Slider step for the opacity control.
pub const OPACITY_STEP: f64 = 0.01;

/// Default stroke diameter in pixels.
pub const DEFAULT_WIDTH: f64 = 30.0;

/// Upper bound of the stroke width slider.
pub const WIDTH_MAX: f64 = 100.0;

/// Frames-per-turn divisors offered as speed presets.
pub const SPEED_PRESET_DIVISORS: [u32; 8] = [3, 6, 12, 24, 48, 96, 192, 384];
