//! Parsing and labels for the control panel's range inputs.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// Parse the value of an `<input type="range">`. Rejects non-finite input.
#[must_use]
pub fn parse_slider_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Speed label in radians per frame.
#[must_use]
pub fn format_speed(speed: f64) -> String {
    format!("{speed:.3}")
}

#[must_use]
pub fn format_opacity(opacity: f64) -> String {
    format!("{opacity:.2}")
}

/// Width label in whole pixels.
#[must_use]
pub fn format_width(width: f64) -> String {
    format!("{width:.0}px")
}
