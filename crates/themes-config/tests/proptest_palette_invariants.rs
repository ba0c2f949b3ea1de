//! Property-based tests for color math, derivation and theme transfer.
//!
//! 1. `hex_to_rgba` keeps every channel and the alpha exactly
//! 2. `adjust_brightness` by 1.0 is the identity
//! 3. `adjust_brightness` stays within 0..=255 for any positive factor
//! 4. `derive` returns a superset of the base palette with every derived key
//! 5. Switching dark mode swaps the factors of each dark/light pair
//! 6. Export then import reproduces the base palette and dark mode flag

use proptest::prelude::*;
use themes_config::colors::{adjust_brightness, hex_to_rgba};
use themes_config::derive::derived_keys;
use themes_config::palette::keys;
use themes_config::{
    derive, export_theme, import_theme, BaseColor, ExportFormat, Palette, ThemeDescriptor,
    CUSTOM_THEME,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn hex_color() -> impl Strategy<Value = ((u8, u8, u8), String)> {
    (any::<(u8, u8, u8)>(), any::<bool>(), any::<bool>()).prop_map(
        |((r, g, b), with_hash, upper)| {
            let digits = format!("{r:02x}{g:02x}{b:02x}");
            let digits = if upper { digits.to_uppercase() } else { digits };
            let hex = if with_hash { format!("#{digits}") } else { digits };
            ((r, g, b), hex)
        },
    )
}

fn base_palette() -> impl Strategy<Value = Palette> {
    prop::array::uniform6(any::<(u8, u8, u8)>()).prop_map(|colors| {
        BaseColor::ALL
            .into_iter()
            .zip(colors)
            .map(|(color, (r, g, b))| (color.key(), format!("#{r:02x}{g:02x}{b:02x}")))
            .collect::<Palette>()
    })
}

fn export_format() -> impl Strategy<Value = ExportFormat> {
    prop_oneof![Just(ExportFormat::Json), Just(ExportFormat::Template)]
}

/// Split `rgb(a, b, c)` / `rgba(a, b, c, d)` into its arguments.
fn arguments(css: &str) -> Vec<String> {
    let inner = css
        .split_once('(')
        .and_then(|(_, rest)| rest.strip_suffix(')'))
        .unwrap_or_else(|| panic!("not a functional color: {css}"));
    inner.split(", ").map(str::to_string).collect()
}

fn channels(css: &str) -> [i64; 3] {
    let args = arguments(css);
    [0, 1, 2].map(|i| args[i].parse::<i64>().unwrap())
}

// ── Color math ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hex_to_rgba_keeps_channels_and_alpha(
        ((r, g, b), hex) in hex_color(),
        alpha in 0.0f64..=1.0,
    ) {
        let css = hex_to_rgba(&hex, alpha).unwrap();
        prop_assert!(css.starts_with("rgba("), "{}", css);

        let args = arguments(&css);
        prop_assert_eq!(args.len(), 4);
        prop_assert_eq!(args[0].parse::<u8>().unwrap(), r);
        prop_assert_eq!(args[1].parse::<u8>().unwrap(), g);
        prop_assert_eq!(args[2].parse::<u8>().unwrap(), b);
        prop_assert_eq!(args[3].parse::<f64>().unwrap(), alpha);
    }

    #[test]
    fn brightness_one_is_identity(((r, g, b), hex) in hex_color()) {
        prop_assert_eq!(
            adjust_brightness(&hex, 1.0).unwrap(),
            format!("rgb({r}, {g}, {b})")
        );
    }

    #[test]
    fn brightness_saturates_within_channel_range(
        (_, hex) in hex_color(),
        factor in 1e-6f64..1e6,
    ) {
        let css = adjust_brightness(&hex, factor).unwrap();
        for channel in channels(&css) {
            prop_assert!((0..=255).contains(&channel), "{} from {} * {}", css, hex, factor);
        }
    }
}

// ── Derivation ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn derive_is_a_superset_with_every_derived_key(
        base in base_palette(),
        is_dark_mode in any::<bool>(),
    ) {
        let derived = derive(&base, is_dark_mode).unwrap();

        for (key, value) in base.iter() {
            prop_assert_eq!(derived.get(key), Some(value));
        }
        for key in derived_keys() {
            let value = derived.get(key);
            prop_assert!(value.is_some_and(|v| v.starts_with("rgb")), "{} = {:?}", key, value);
        }
        prop_assert_eq!(derived.len(), base.len() + derived_keys().count());
    }

    #[test]
    fn dark_mode_swaps_pair_factors(base in base_palette()) {
        let dark = derive(&base, true).unwrap();
        let light = derive(&base, false).unwrap();

        let pairs = [
            (keys::ACCENT_DARK, keys::ACCENT_LIGHT),
            (keys::SUCCESS_DARK, keys::SUCCESS_LIGHT),
            (keys::DANGER_DARK, keys::DANGER_LIGHT),
        ];
        for (darker, lighter) in pairs {
            prop_assert_eq!(dark.get(darker), light.get(lighter));
            prop_assert_eq!(dark.get(lighter), light.get(darker));
        }
    }

    #[test]
    fn dark_mode_sets_direction_of_each_shade(
        (r, g, b) in (20u8..=200, 20u8..=200, 20u8..=200),
    ) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let base: Palette = BaseColor::ALL.into_iter().map(|c| (c.key(), hex.as_str())).collect();
        let source = [i64::from(r), i64::from(g), i64::from(b)];

        let dark = derive(&base, true).unwrap();
        let light = derive(&base, false).unwrap();

        // (key, brighter in dark mode)
        let shades = [
            (keys::BACKGROUND_SOFT, true),
            (keys::BACKGROUND_MUTE, true),
            (keys::BACKGROUND_LIGHT, true),
            (keys::ACCENT_DARK, false),
            (keys::ACCENT_LIGHT, true),
            (keys::SUCCESS_DARK, false),
            (keys::SUCCESS_LIGHT, true),
            (keys::DANGER_DARK, false),
            (keys::DANGER_LIGHT, true),
        ];
        for (key, brighter_in_dark) in shades {
            let in_dark: i64 = channels(dark.get(key).unwrap()).iter().sum();
            let in_light: i64 = channels(light.get(key).unwrap()).iter().sum();
            let original: i64 = source.iter().sum();

            let (brighter, darker) = if brighter_in_dark {
                (in_dark, in_light)
            } else {
                (in_light, in_dark)
            };
            prop_assert!(brighter > original, "{}: {} <= {}", key, brighter, original);
            prop_assert!(darker < original, "{}: {} >= {}", key, darker, original);
        }
    }
}

// ── Transfer ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn export_then_import_round_trips(
        base in base_palette(),
        upper in any::<bool>(),
        is_dark_mode in any::<bool>(),
        format in export_format(),
    ) {
        let base: Palette = if upper {
            base.iter().map(|(k, v)| (k, v.to_uppercase())).collect()
        } else {
            base
        };
        let theme = ThemeDescriptor::new(CUSTOM_THEME, is_dark_mode, base.clone());

        let text = export_theme(&theme, format).unwrap();
        let imported = import_theme(&text).unwrap();

        prop_assert_eq!(imported.is_dark_mode, is_dark_mode);
        prop_assert_eq!(imported.palette, base);
    }
}
