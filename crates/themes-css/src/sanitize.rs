//! Sanitization of palette entries before they are written into CSS.
//!
//! The Custom theme accepts whatever key/value pairs it is handed, and every
//! pair ends up inside a rule block. Only these shapes get through:
//! - property names `--[A-Za-z0-9_-]+`
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with channels in 0..=255 and alpha
//!   in 0..=1
//!
//! Anything that could close the declaration or pull in outside content
//! (`;`, braces, `<`, `>`, `@`, `url(`, `expression(`, ...) is refused
//! before the shape checks run.

/// Substrings that never belong in a color value.
const BLOCKED_PATTERNS: &[&str] = &[
    "url(",
    "expression(",
    "javascript:",
    "eval(",
    "import",
    "behavior:",
    "-moz-binding",
];

/// Characters that would end the declaration or the style element.
const BLOCKED_CHARS: &[char] = &[';', '{', '}', '<', '>', '@', '\\'];

/// Check that `value` is a hex or `rgb()`/`rgba()` color safe to emit.
///
/// Named colors are refused; palettes only ever hold hex or rgb values.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("empty color value".into());
    }

    reject_blocked(value)?;

    if let Some(digits) = value.strip_prefix('#') {
        return check_hex(value, digits);
    }
    if let Some(args) = value.strip_prefix("rgba(") {
        return check_rgb_args(value, args, true);
    }
    if let Some(args) = value.strip_prefix("rgb(") {
        return check_rgb_args(value, args, false);
    }

    Err(format!("'{value}' is not a hex or rgb()/rgba() color"))
}

/// Check that `name` is a CSS custom property such as `--theme-accent`.
pub fn validate_custom_property(name: &str) -> Result<(), String> {
    let ident = name
        .strip_prefix("--")
        .ok_or_else(|| format!("'{name}' is not a custom property (missing '--')"))?;

    if ident.is_empty() {
        return Err("custom property name is empty".into());
    }

    match ident
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_'))
    {
        Some(ch) => Err(format!("'{ch}' is not allowed in custom property '{name}'")),
        None => Ok(()),
    }
}

fn reject_blocked(value: &str) -> Result<(), String> {
    let lower = value.to_ascii_lowercase();

    if let Some(pattern) = BLOCKED_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(format!("blocked pattern '{pattern}' in '{value}'"));
    }
    if let Some(ch) = value.chars().find(|ch| BLOCKED_CHARS.contains(ch)) {
        return Err(format!("blocked character '{ch}' in '{value}'"));
    }
    Ok(())
}

fn check_hex(value: &str, digits: &str) -> Result<(), String> {
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(format!(
            "'{value}' has {} hex digits, expected 3, 4, 6 or 8",
            digits.len()
        ));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{value}' contains a non-hex digit"));
    }
    Ok(())
}

fn check_rgb_args(value: &str, args: &str, has_alpha: bool) -> Result<(), String> {
    let args = args
        .strip_suffix(')')
        .ok_or_else(|| format!("'{value}' is missing its closing ')'"))?;

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "'{value}' has {} arguments, expected {expected}",
            parts.len()
        ));
    }

    for channel in &parts[..3] {
        match channel.parse::<u16>() {
            Ok(n) if n <= 255 => {}
            _ => return Err(format!("'{value}': channel '{channel}' is not in 0..=255")),
        }
    }

    if has_alpha {
        let alpha = parts[3];
        match alpha.parse::<f64>() {
            Ok(a) if (0.0..=1.0).contains(&a) => {}
            _ => return Err(format!("'{value}': alpha '{alpha}' is not in 0..=1")),
        }
    }

    Ok(())
}
