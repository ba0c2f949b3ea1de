//! Color math for theme derivation.
//!
//! Parses `#RRGGBB`, `RRGGBB`, `#RGB`, `rgb(r,g,b)` and `rgba(r,g,b,a)`
//! strings, and produces the `rgb(...)`/`rgba(...)` strings written into
//! the theme stylesheet. Channel scaling rounds half-up and saturates at
//! 0 and 255.

mod parse;


use themes_common::{Rgb, ThemeError};

use parse::{parse_hex, parse_rgb_function, HEX_RE, RGB_RE};

/// Parse a color string into an [`Rgb`].
///
/// Accepted formats:
/// - `#RRGGBB` or `RRGGBB` (e.g. `#c6a0f6`)
/// - `#RGB` (e.g. `#fff`)
/// - `rgb(r,g,b)` and `rgba(r,g,b,a)`; any alpha is dropped
pub fn parse_color(s: &str) -> Result<Rgb, ThemeError> {
    let s = s.trim();

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgb_function(s)
            .ok_or_else(|| ThemeError::InvalidColorFormat(format!("invalid rgb(a) color: {s}")));
    }

    parse_hex(s).ok_or_else(|| ThemeError::InvalidColorFormat(format!("invalid hex color: {s}")))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGB_RE.is_match(s) && parse_rgb_function(s).is_some();
    }
    HEX_RE.is_match(s)
}

/// Whether `s` can be a theme's base color: 6-digit hex, `#` optional.
///
/// Derivation alpha-blends every base color through [`hex_to_rgba`], so the
/// short hex and `rgb(...)` forms [`validate_color`] accepts don't qualify.
pub fn validate_base_color(s: &str) -> bool {
    Rgb::from_hex(s.trim()).is_some()
}

/// Convert a 6-digit hex color (leading `#` optional) to `rgba(r, g, b, alpha)`.
///
/// Only hex input is accepted. An `rgb(...)`/`rgba(...)` string is rejected
/// with [`ThemeError::InvalidColorFormat`]; use [`with_alpha`] to re-blend
/// a color that is already in functional notation.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String, ThemeError> {
    let hex = hex.trim();
    let rgb = Rgb::from_hex(hex).ok_or_else(|| {
        ThemeError::InvalidColorFormat(format!("expected 6-digit hex, got: {hex}"))
    })?;
    Ok(rgb.to_rgba_string(alpha))
}

/// Multiply each channel of `color` by `factor` and return `rgb(r, g, b)`.
pub fn adjust_brightness(color: &str, factor: f64) -> Result<String, ThemeError> {
    let rgb = parse_color(color)?;
    Ok(rgb.scale(factor).to_rgb_string())
}

/// Return `color` as `rgba(r, g, b, alpha)`, replacing any alpha it had.
pub fn with_alpha(color: &str, alpha: f64) -> Result<String, ThemeError> {
    let rgb = parse_color(color)?;
    Ok(rgb.to_rgba_string(alpha))
}
