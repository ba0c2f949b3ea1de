//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex and rgb()/rgba() string formats
//! into [`Rgb`] values. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;
use themes_common::Rgb;

/// Regex for hex color: #RGB, #RRGGBB, or RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#[0-9a-fA-F]{3}|#?[0-9a-fA-F]{6})$").unwrap());

/// Regex for rgb()/rgba() with integer channels and an optional alpha.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

/// Parse a hex color string (#RGB, #RRGGBB, or bare RRGGBB).
pub(super) fn parse_hex(s: &str) -> Option<Rgb> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => Rgb::from_hex(hex),
        _ => None,
    }
}

/// Parse the channels of an `rgb(r,g,b)` or `rgba(r,g,b,a)` string.
/// The alpha component, when present, is validated and then discarded.
pub(super) fn parse_rgb_function(s: &str) -> Option<Rgb> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    if let Some(alpha) = caps.get(4) {
        let alpha: f64 = alpha.as_str().parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
    }

    Some(Rgb::new(r, g, b))
}
