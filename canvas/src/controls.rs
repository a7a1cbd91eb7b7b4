//! Live control values shared between the control panel and the frame loop.
//!
//! The panel writes [`Controls`] whenever the user edits a value; the engine
//! reads the current value on every tick and pointer event. Nothing here is
//! snapshotted at mount time.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::color::normalize_hex_color;
use crate::consts::{
    BACKGROUND_COLOR, DEFAULT_COLOR, DEFAULT_OPACITY, DEFAULT_SPEED, DEFAULT_WIDTH, SPEED_MAX, SPEED_PRESET_DIVISORS,
    WIDTH_MAX,
};

/// Drawing and rotation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Controls {
    /// Radians added to the rotation every tick.
    pub speed: f64,
    /// Stroke color as `#rrggbb`.
    pub color: String,
    /// Stroke opacity in `[0, 1]`; ignored while erasing.
    pub opacity: f64,
    /// Stroke diameter in pixels.
    pub width: f64,
    /// Paint with the background color instead of `color`.
    pub erase: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            color: DEFAULT_COLOR.to_owned(),
            opacity: DEFAULT_OPACITY,
            width: DEFAULT_WIDTH,
            erase: false,
        }
    }
}

impl Controls {
    /// Parse controls from JSON. Missing fields take their defaults and
    /// out-of-range values are clamped.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.clamped())
    }

    /// Return a copy with every value forced into its valid range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.speed = clamp_or(self.speed, 0.0, SPEED_MAX, DEFAULT_SPEED);
        self.opacity = clamp_or(self.opacity, 0.0, 1.0, DEFAULT_OPACITY);
        self.width = clamp_or(self.width, 0.0, WIDTH_MAX, DEFAULT_WIDTH);
        self.color = normalize_hex_color(&self.color, DEFAULT_COLOR);
        self
    }

    /// Apply one edit from the control panel.
    pub fn apply(&mut self, change: ControlChange) {
        match change {
            ControlChange::Speed(speed) => self.speed = clamp_or(speed, 0.0, SPEED_MAX, self.speed),
            ControlChange::Preset(preset) => self.speed = preset.speed(),
            ControlChange::Color(color) => self.color = normalize_hex_color(&color, &self.color),
            ControlChange::Opacity(opacity) => self.opacity = clamp_or(opacity, 0.0, 1.0, self.opacity),
            ControlChange::Width(width) => self.width = clamp_or(width, 0.0, WIDTH_MAX, self.width),
            ControlChange::Erase(erase) => self.erase = erase,
        }
    }

    /// Color strokes are painted with right now.
    #[must_use]
    pub fn ink_color(&self) -> &str {
        if self.erase { BACKGROUND_COLOR } else { &self.color }
    }

    /// Alpha strokes are painted with right now. Erasing is always opaque.
    #[must_use]
    pub fn ink_alpha(&self) -> f64 {
        if self.erase { 1.0 } else { self.opacity }
    }
}

/// A single edit coming from the control panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Speed(f64),
    Preset(SpeedPreset),
    Color(String),
    Opacity(f64),
    Width(f64),
    Erase(bool),
}

/// Named speed preset: one full turn every `divisor` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedPreset(u32);

impl SpeedPreset {
    /// All presets offered by the panel, fastest first.
    #[must_use]
    pub fn all() -> Vec<Self> {
        SPEED_PRESET_DIVISORS.iter().copied().map(Self).collect()
    }

    /// Look up a preset by its panel label (`"3"`, `"12"`, ...).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let divisor = label.trim().parse::<u32>().unwrap_or(0);
        SPEED_PRESET_DIVISORS
            .contains(&divisor)
            .then_some(Self(divisor))
    }

    /// Frames per full turn.
    #[must_use]
    pub fn divisor(self) -> u32 {
        self.0
    }

    /// Panel label.
    #[must_use]
    pub fn label(self) -> String {
        self.0.to_string()
    }

    /// Angular speed in radians per tick.
    #[must_use]
    pub fn speed(self) -> f64 {
        TAU / f64::from(self.0)
    }
}

/// Clamp `value` into `[min, max]`, replacing non-finite input with `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.clamp(min, max) } else { fallback }
}
