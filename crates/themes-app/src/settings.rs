//! Declarative settings surface.
//!
//! The host renders these entries however it likes and reports changes
//! back through [`crate::plugin::ClientThemes::update_setting`] by key.

use serde::{Deserialize, Serialize};
use themes_config::{BaseColor, ThemeRegistry, ThemesConfig};

pub const CURRENT_THEME: &str = "CurrentTheme";
pub const CUSTOM_DARK_MODE: &str = "isCustomDarkMode";
pub const EXPORT_TO_CLIPBOARD: &str = "exportThemeToClipboard";
pub const IMPORT_FROM_CLIPBOARD: &str = "importThemeFromClipboard";
pub const CUSTOM_CSS: &str = "customCSS";

/// Setting key of the color picker for `color`.
pub fn color_setting_key(color: BaseColor) -> &'static str {
    match color {
        BaseColor::Background => "customBackgroundColor",
        BaseColor::Accent => "customAccentColor",
        BaseColor::TextPrimary => "customPrimaryTextColor",
        BaseColor::TextDark => "customAltTextColor",
        BaseColor::Success => "customSuccessColor",
        BaseColor::Danger => "customDangerColor",
    }
}

/// Inverse of [`color_setting_key`].
pub fn color_for_setting(key: &str) -> Option<BaseColor> {
    BaseColor::ALL
        .into_iter()
        .find(|color| color_setting_key(*color) == key)
}

fn color_label(color: BaseColor) -> &'static str {
    match color {
        BaseColor::Background => "Background Color",
        BaseColor::Accent => "Accent Color",
        BaseColor::TextPrimary => "Text Color",
        BaseColor::TextDark => "Alt Text Color",
        BaseColor::Success => "Success Color",
        BaseColor::Danger => "Danger Color",
    }
}

/// Widget type and current value of a setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SettingKind {
    Combobox { options: Vec<String>, value: String },
    Checkbox { value: bool },
    Color { value: String },
    Textarea { value: String },
    Button,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    pub key: String,
    pub text: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: SettingKind,
}

impl SettingEntry {
    fn new(key: &str, text: &str, description: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            description: description.into(),
            kind,
        }
    }
}

/// Every setting in display order, populated from `config`.
pub fn build_settings(config: &ThemesConfig, registry: &ThemeRegistry) -> Vec<SettingEntry> {
    let mut entries = vec![
        SettingEntry::new(
            CURRENT_THEME,
            "Theme",
            "The theme for the client to use",
            SettingKind::Combobox {
                options: registry.names(),
                value: config.theme.name.clone(),
            },
        ),
        SettingEntry::new(
            CUSTOM_DARK_MODE,
            "Dark Mode?",
            "Is your custom theme a dark mode theme?",
            SettingKind::Checkbox {
                value: config.custom.is_dark_mode,
            },
        ),
    ];

    for color in BaseColor::ALL {
        entries.push(SettingEntry::new(
            color_setting_key(color),
            color_label(color),
            format!("Custom Theme: Set the '{}' css variable", color.key()),
            SettingKind::Color {
                value: config.custom.color(color).to_string(),
            },
        ));
    }

    entries.extend([
        SettingEntry::new(
            EXPORT_TO_CLIPBOARD,
            "Export custom theme to clipboard",
            "Copy your custom theme values to the clipboard",
            SettingKind::Button,
        ),
        SettingEntry::new(
            IMPORT_FROM_CLIPBOARD,
            "Import custom theme from clipboard",
            "Overwrite a custom theme with values from the clipboard",
            SettingKind::Button,
        ),
        SettingEntry::new(
            CUSTOM_CSS,
            "Custom CSS",
            "Add some custom css here",
            SettingKind::Textarea {
                value: config.css.custom.clone(),
            },
        ),
    ]);

    entries
}
