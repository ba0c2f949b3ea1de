//! Persisted plugin settings.
//!
//! Every section uses `#[serde(default)]`, so a partial or empty TOML file
//! yields a complete config.

use serde::{Deserialize, Serialize};

use crate::palette::{BaseColor, Palette};
use crate::registry::DEFAULT_THEME;

/// Top-level settings for the theme plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemesConfig {
    pub theme: ThemeConfig,
    pub custom: CustomThemeConfig,
    pub css: CssConfig,
}

/// Theme selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Display name of the selected theme.
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME.into(),
        }
    }
}

/// Colors of the user-editable Custom theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomThemeConfig {
    pub is_dark_mode: bool,
    pub background: String,
    pub accent: String,
    pub text_primary: String,
    pub text_dark: String,
    pub success: String,
    pub danger: String,
}

impl Default for CustomThemeConfig {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            background: "#303446".into(),
            accent: "#c6a0f6".into(),
            text_primary: "#cad3f5".into(),
            text_dark: "#494d64".into(),
            success: "#a6da95".into(),
            danger: "#ed8796".into(),
        }
    }
}

impl CustomThemeConfig {
    pub fn color(&self, color: BaseColor) -> &str {
        match color {
            BaseColor::Background => &self.background,
            BaseColor::Accent => &self.accent,
            BaseColor::TextPrimary => &self.text_primary,
            BaseColor::TextDark => &self.text_dark,
            BaseColor::Success => &self.success,
            BaseColor::Danger => &self.danger,
        }
    }

    pub fn set_color(&mut self, color: BaseColor, value: impl Into<String>) {
        let value = value.into();
        match color {
            BaseColor::Background => self.background = value,
            BaseColor::Accent => self.accent = value,
            BaseColor::TextPrimary => self.text_primary = value,
            BaseColor::TextDark => self.text_dark = value,
            BaseColor::Success => self.success = value,
            BaseColor::Danger => self.danger = value,
        }
    }

    /// The six base colors as a palette, in canonical order.
    pub fn palette(&self) -> Palette {
        BaseColor::ALL
            .into_iter()
            .map(|color| (color.key(), self.color(color)))
            .collect()
    }
}

/// Free-form CSS appended after the theme overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    pub custom: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::keys;

    #[test]
    fn default_selects_default_theme() {
        let config = ThemesConfig::default();
        assert_eq!(config.theme.name, "Default");
        assert!(!config.custom.is_dark_mode);
        assert!(config.css.custom.is_empty());
    }

    #[test]
    fn custom_palette_has_all_base_keys() {
        let palette = CustomThemeConfig::default().palette();
        assert!(palette.missing_base_keys().is_empty());
        assert_eq!(palette.get(keys::ACCENT), Some("#c6a0f6"));
        assert_eq!(palette.get(keys::TEXT_DARK), Some("#494d64"));
    }

    #[test]
    fn set_color_updates_matching_field() {
        let mut custom = CustomThemeConfig::default();
        custom.set_color(BaseColor::Danger, "#dd6565");
        assert_eq!(custom.danger, "#dd6565");
        assert_eq!(custom.color(BaseColor::Danger), "#dd6565");
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: ThemesConfig = toml::from_str(
            r##"
[custom]
accent = "#11dd22"
"##,
        )
        .unwrap();
        assert_eq!(config.custom.accent, "#11dd22");
        assert_eq!(config.custom.background, "#303446");
        assert_eq!(config.theme.name, "Default");
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = ThemesConfig::default();
        config.theme.name = "Dracula".into();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ThemesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
