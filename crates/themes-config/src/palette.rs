//! Palettes: ordered maps from CSS custom property names to color strings.

use themes_common::ThemeError;

/// CSS custom property names used by HighLite themes.
pub mod keys {
    pub const BACKGROUND: &str = "--theme-background";
    pub const ACCENT: &str = "--theme-accent";
    pub const TEXT_PRIMARY: &str = "--theme-text-primary";
    pub const TEXT_DARK: &str = "--theme-text-dark";
    pub const SUCCESS: &str = "--theme-success";
    pub const DANGER: &str = "--theme-danger";

    pub const ACCENT_MUTED: &str = "--theme-accent-muted";
    pub const ACCENT_TRANSPARENT_10: &str = "--theme-accent-transparent-10";
    pub const ACCENT_TRANSPARENT_20: &str = "--theme-accent-transparent-20";
    pub const ACCENT_TRANSPARENT_30: &str = "--theme-accent-transparent-30";
    pub const ACCENT_TRANSPARENT_40: &str = "--theme-accent-transparent-40";
    pub const ACCENT_TRANSPARENT_60: &str = "--theme-accent-transparent-60";
    pub const SUCCESS_TRANSPARENT_30: &str = "--theme-success-transparent-30";
    pub const DANGER_TRANSPARENT_30: &str = "--theme-danger-transparent-30";
    pub const TEXT_SECONDARY: &str = "--theme-text-secondary";
    pub const TEXT_MUTED: &str = "--theme-text-muted";
    pub const BACKGROUND_SOFT: &str = "--theme-background-soft";
    pub const BACKGROUND_MUTE: &str = "--theme-background-mute";
    pub const BACKGROUND_LIGHT: &str = "--theme-background-light";
    pub const ACCENT_DARK: &str = "--theme-accent-dark";
    pub const ACCENT_LIGHT: &str = "--theme-accent-light";
    pub const SUCCESS_DARK: &str = "--theme-success-dark";
    pub const SUCCESS_LIGHT: &str = "--theme-success-light";
    pub const DANGER_DARK: &str = "--theme-danger-dark";
    pub const DANGER_LIGHT: &str = "--theme-danger-light";
    pub const BORDER: &str = "--theme-border";
    pub const BORDER_LIGHT: &str = "--theme-border-light";
    pub const DIVIDER: &str = "--theme-divider";
}

/// One of the six colors every non-default theme must define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColor {
    Background,
    Accent,
    TextPrimary,
    /// Alternate text color. Brighter for dark themes, darker for light ones.
    TextDark,
    Success,
    Danger,
}

impl BaseColor {
    pub const ALL: [BaseColor; 6] = [
        BaseColor::Background,
        BaseColor::Accent,
        BaseColor::TextPrimary,
        BaseColor::TextDark,
        BaseColor::Success,
        BaseColor::Danger,
    ];

    /// The CSS custom property this color is stored under.
    pub fn key(self) -> &'static str {
        match self {
            BaseColor::Background => keys::BACKGROUND,
            BaseColor::Accent => keys::ACCENT,
            BaseColor::TextPrimary => keys::TEXT_PRIMARY,
            BaseColor::TextDark => keys::TEXT_DARK,
            BaseColor::Success => keys::SUCCESS,
            BaseColor::Danger => keys::DANGER,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Insertion-ordered mapping from property name to color value.
///
/// Setting an existing key replaces its value without moving it, so the
/// rendered `:root` block keeps a stable declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`get`](Self::get), but a missing key is an error.
    pub fn require(&self, key: &str) -> Result<&str, ThemeError> {
        self.get(key)
            .ok_or_else(|| ThemeError::MissingPaletteKey(key.to_string()))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Base keys that have no value yet, in [`BaseColor::ALL`] order.
    pub fn missing_base_keys(&self) -> Vec<&'static str> {
        BaseColor::ALL
            .into_iter()
            .map(BaseColor::key)
            .filter(|key| !self.contains(key))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut palette = Palette::new();
        for (k, v) in iter {
            palette.set(k, v);
        }
        palette
    }
}

/// A base palette extended with every derived shade.
///
/// Only produced by [`crate::derive::derive`]. Descriptors keep their base
/// palette separately, so a derived palette is never fed back into
/// derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPalette {
    palette: Palette,
}

impl DerivedPalette {
    pub(crate) fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.palette.get(key)
    }

    pub fn require(&self, key: &str) -> Result<&str, ThemeError> {
        self.palette.require(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.palette.iter()
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_preserves_insertion_order() {
        let mut p = Palette::new();
        p.set("--b", "#000000");
        p.set("--a", "#111111");
        p.set("--b", "#222222");

        let entries: Vec<_> = p.iter().collect();
        assert_eq!(entries, vec![("--b", "#222222"), ("--a", "#111111")]);
    }

    #[test]
    fn require_reports_missing_key() {
        let p = Palette::new();
        let err = p.require(keys::ACCENT).unwrap_err();
        assert!(matches!(err, ThemeError::MissingPaletteKey(ref k) if k == keys::ACCENT));
    }

    #[test]
    fn missing_base_keys_lists_in_order() {
        let p: Palette = [(keys::ACCENT, "#ffffff"), (keys::SUCCESS, "#00ff00")]
            .into_iter()
            .collect();
        assert_eq!(
            p.missing_base_keys(),
            vec![keys::BACKGROUND, keys::TEXT_PRIMARY, keys::TEXT_DARK, keys::DANGER]
        );
    }

    #[test]
    fn base_color_key_round_trip() {
        for color in BaseColor::ALL {
            assert_eq!(BaseColor::from_key(color.key()), Some(color));
        }
        assert_eq!(BaseColor::from_key("--theme-border"), None);
    }
}
