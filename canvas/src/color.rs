//! Shared color normalization helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = hex_channel(&hex[0..1].repeat(2))?;
            let g = hex_channel(&hex[1..2].repeat(2))?;
            let b = hex_channel(&hex[2..3].repeat(2))?;
            Some((r, g, b))
        }
        6 => {
            let r = hex_channel(&hex[0..2])?;
            let g = hex_channel(&hex[2..4])?;
            let b = hex_channel(&hex[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

fn hex_channel(digits: &str) -> Option<u8> {
    digits.chars().try_fold(0u8, |acc, c| {
        let digit = u8::try_from(c.to_digit(16)?).unwrap_or(0);
        acc.checked_mul(16)?.checked_add(digit)
    })
}

/// Normalize a color to canonical lowercase `#rrggbb`.
///
/// Falls back to `fallback` (and then to the default stroke color) when
/// `value` is not a hex color.
#[must_use]
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let (r, g, b) = parse_hex_rgb(value)
        .or_else(|| parse_hex_rgb(fallback))
        .unwrap_or((0x00, 0x96, 0xff));
    format!("#{r:02x}{g:02x}{b:02x}")
}
