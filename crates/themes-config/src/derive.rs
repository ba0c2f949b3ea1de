//! Theme derivation: base palette → full HighLite palette.
//!
//! A theme only defines six colors. Every other `--theme-*` variable the
//! client reads is computed here from those six, so themes don't have to
//! spell out ~20 extra shades each.

use themes_common::ThemeError;
use tracing::debug;

use crate::colors::{adjust_brightness, hex_to_rgba, with_alpha};
use crate::palette::{keys, DerivedPalette, Palette};

/// How a single derived variable is computed.
#[derive(Debug, Clone, Copy)]
enum Shade {
    /// Hex source color blended to a fixed opacity.
    Alpha { source: &'static str, alpha: f64 },
    /// Source color scaled by `dark` in dark themes and `light` otherwise.
    Brightness {
        source: &'static str,
        dark: f64,
        light: f64,
    },
    /// An already derived rgba() value with its alpha replaced.
    Reblend { source: &'static str, alpha: f64 },
}

const fn alpha(source: &'static str, alpha: f64) -> Shade {
    Shade::Alpha { source, alpha }
}

const fn brightness(source: &'static str, dark: f64, light: f64) -> Shade {
    Shade::Brightness {
        source,
        dark,
        light,
    }
}

const fn reblend(source: &'static str, alpha: f64) -> Shade {
    Shade::Reblend { source, alpha }
}

/// Derived variables in the order they are written to the palette.
/// `Reblend` sources must appear earlier in this table.
const SHADES: &[(&str, Shade)] = &[
    (keys::ACCENT_MUTED, alpha(keys::ACCENT, 0.8)),
    (keys::ACCENT_TRANSPARENT_10, alpha(keys::ACCENT, 0.1)),
    (keys::ACCENT_TRANSPARENT_20, alpha(keys::ACCENT, 0.2)),
    (keys::ACCENT_TRANSPARENT_30, alpha(keys::ACCENT, 0.3)),
    (keys::ACCENT_TRANSPARENT_40, alpha(keys::ACCENT, 0.4)),
    (keys::ACCENT_TRANSPARENT_60, alpha(keys::ACCENT, 0.6)),
    (keys::SUCCESS_TRANSPARENT_30, alpha(keys::SUCCESS, 0.3)),
    (keys::DANGER_TRANSPARENT_30, alpha(keys::DANGER, 0.3)),
    (keys::TEXT_SECONDARY, alpha(keys::TEXT_PRIMARY, 0.8)),
    (keys::TEXT_MUTED, alpha(keys::TEXT_PRIMARY, 0.6)),
    (keys::BACKGROUND_SOFT, brightness(keys::BACKGROUND, 1.05, 0.95)),
    (keys::BACKGROUND_MUTE, brightness(keys::BACKGROUND, 1.4, 0.8)),
    (keys::BACKGROUND_LIGHT, brightness(keys::BACKGROUND, 1.4, 0.8)),
    (keys::ACCENT_DARK, brightness(keys::ACCENT, 0.8, 1.2)),
    (keys::ACCENT_LIGHT, brightness(keys::ACCENT, 1.2, 0.8)),
    (keys::SUCCESS_DARK, brightness(keys::SUCCESS, 0.8, 1.2)),
    (keys::SUCCESS_LIGHT, brightness(keys::SUCCESS, 1.2, 0.8)),
    (keys::DANGER_DARK, brightness(keys::DANGER, 0.8, 1.2)),
    (keys::DANGER_LIGHT, brightness(keys::DANGER, 1.2, 0.8)),
    (keys::BORDER, alpha(keys::ACCENT, 0.1)),
    (keys::BORDER_LIGHT, reblend(keys::BORDER, 0.05)),
    (keys::DIVIDER, alpha(keys::ACCENT, 0.15)),
];

/// Names of every variable [`derive`] adds on top of the base palette.
pub fn derived_keys() -> impl Iterator<Item = &'static str> {
    SHADES.iter().map(|(key, _)| *key)
}

/// Compute the full palette for a theme from its six base colors.
///
/// All base keys must be present; the first missing one is reported as
/// [`ThemeError::MissingPaletteKey`]. Base colors blended to an opacity must
/// be 6-digit hex. Any extra keys in `base` are carried over untouched
/// unless a derived variable of the same name overwrites them.
pub fn derive(base: &Palette, is_dark_mode: bool) -> Result<DerivedPalette, ThemeError> {
    if let Some(missing) = base.missing_base_keys().first() {
        return Err(ThemeError::MissingPaletteKey((*missing).to_string()));
    }

    let mut palette = base.clone();
    for (key, shade) in SHADES {
        let value = match *shade {
            Shade::Alpha { source, alpha } => hex_to_rgba(base.require(source)?, alpha)?,
            Shade::Brightness {
                source,
                dark,
                light,
            } => {
                let factor = if is_dark_mode { dark } else { light };
                adjust_brightness(base.require(source)?, factor)?
            }
            Shade::Reblend { source, alpha } => with_alpha(palette.require(source)?, alpha)?,
        };
        palette.set(*key, value);
    }

    debug!(
        is_dark_mode,
        variables = palette.len(),
        "derived theme palette"
    );
    Ok(DerivedPalette::new(palette))
}
