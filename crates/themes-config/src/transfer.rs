//! Custom theme import and export.
//!
//! A theme is exchanged as a flat JSON object holding `isDarkMode` and the
//! six base colors:
//!
//! ```json
//! {
//!     "isDarkMode": true,
//!     "--theme-background": "#303446",
//!     "--theme-accent": "#c6a0f6",
//!     "--theme-text-primary": "#cad3f5",
//!     "--theme-text-dark": "#494d64",
//!     "--theme-success": "#a6da95",
//!     "--theme-danger": "#ed8796"
//! }
//! ```
//!
//! `isDarkMode` may also be the string `"true"` or `"false"`, which is what
//! the clipboard export writes.

use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use themes_common::{ImportError, ThemeError};

use crate::colors::{validate_base_color, validate_color};
use crate::palette::{keys, BaseColor, Palette};
use crate::registry::ThemeDescriptor;

/// How an exported theme is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// serde_json output with 4-space indentation (file export).
    #[default]
    Json,
    /// Hand-built text with a quoted `isDarkMode` (clipboard export).
    Template,
}

/// A validated theme read from import text.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTheme {
    pub is_dark_mode: bool,
    pub palette: Palette,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum DarkModeFlag {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(rename = "isDarkMode")]
    is_dark_mode: DarkModeFlag,
    #[serde(rename = "--theme-background")]
    background: String,
    #[serde(rename = "--theme-accent")]
    accent: String,
    #[serde(rename = "--theme-text-primary")]
    text_primary: String,
    #[serde(rename = "--theme-text-dark")]
    text_dark: String,
    #[serde(rename = "--theme-success")]
    success: String,
    #[serde(rename = "--theme-danger")]
    danger: String,
}

impl ThemeFile {
    fn from_descriptor(theme: &ThemeDescriptor) -> Result<Self, ThemeError> {
        let p = theme.palette();
        Ok(Self {
            is_dark_mode: DarkModeFlag::Bool(theme.is_dark_mode()),
            background: p.require(keys::BACKGROUND)?.to_string(),
            accent: p.require(keys::ACCENT)?.to_string(),
            text_primary: p.require(keys::TEXT_PRIMARY)?.to_string(),
            text_dark: p.require(keys::TEXT_DARK)?.to_string(),
            success: p.require(keys::SUCCESS)?.to_string(),
            danger: p.require(keys::DANGER)?.to_string(),
        })
    }

    fn color(&self, color: BaseColor) -> &str {
        match color {
            BaseColor::Background => &self.background,
            BaseColor::Accent => &self.accent,
            BaseColor::TextPrimary => &self.text_primary,
            BaseColor::TextDark => &self.text_dark,
            BaseColor::Success => &self.success,
            BaseColor::Danger => &self.danger,
        }
    }
}

/// Serialize a theme's base colors in the given format.
///
/// Fails with [`ThemeError::MissingPaletteKey`] if the theme lacks a base
/// color.
pub fn export_theme(theme: &ThemeDescriptor, format: ExportFormat) -> Result<String, ThemeError> {
    match format {
        ExportFormat::Json => export_json(theme),
        ExportFormat::Template => export_template(theme),
    }
}

/// JSON with 4-space indentation and a boolean `isDarkMode`.
pub fn export_json(theme: &ThemeDescriptor) -> Result<String, ThemeError> {
    let file = ThemeFile::from_descriptor(theme)?;

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    file.serialize(&mut ser).map_err(|e| ThemeError::Export(e.to_string()))?;
    String::from_utf8(out).map_err(|e| ThemeError::Export(e.to_string()))
}

/// The clipboard text format: one key per line, `isDarkMode` quoted.
pub fn export_template(theme: &ThemeDescriptor) -> Result<String, ThemeError> {
    let file = ThemeFile::from_descriptor(theme)?;

    let mut text = format!("{{\n    \"isDarkMode\": \"{}\"", theme.is_dark_mode());
    for color in BaseColor::ALL {
        let value = serde_json::to_string(file.color(color))
            .map_err(|e| ThemeError::Export(e.to_string()))?;
        text.push_str(&format!(",\n    \"{}\": {value}", color.key()));
    }
    text.push_str("\n}");
    Ok(text)
}

/// Parse and validate import text.
///
/// Malformed JSON is an [`ImportError::Parse`]. A missing key, a non-string
/// color, an unrecognized `isDarkMode` or a color that is not 6-digit hex
/// is an [`ImportError::ValidationFailure`]. Nothing is returned unless
/// every check passes. Bare `rrggbb` values are stored with a `#`.
pub fn import_theme(text: &str) -> Result<ImportedTheme, ImportError> {
    let file: ThemeFile = serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Data => ImportError::ValidationFailure(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => ImportError::Parse(e.to_string()),
    })?;

    let is_dark_mode = match &file.is_dark_mode {
        DarkModeFlag::Bool(b) => *b,
        DarkModeFlag::Text(s) => match s.trim() {
            "true" => true,
            "false" => false,
            other => {
                return Err(ImportError::ValidationFailure(format!(
                    "isDarkMode must be true or false, got '{other}'"
                )))
            }
        },
    };

    let mut palette = Palette::new();
    for color in BaseColor::ALL {
        let value = file.color(color).trim();
        if !validate_base_color(value) {
            let problem = if validate_color(value) {
                "must be a 6-digit hex color"
            } else {
                "has an invalid color value"
            };
            return Err(ImportError::ValidationFailure(format!(
                "{} {problem}, got '{value}'",
                color.key()
            )));
        }
        match value.strip_prefix('#') {
            Some(_) => palette.set(color.key(), value),
            None => palette.set(color.key(), format!("#{value}")),
        }
    }

    Ok(ImportedTheme {
        is_dark_mode,
        palette,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CUSTOM_THEME;

    fn custom_theme(is_dark_mode: bool) -> ThemeDescriptor {
        let palette: Palette = [
            (keys::BACKGROUND, "#303446"),
            (keys::ACCENT, "#c6a0f6"),
            (keys::TEXT_PRIMARY, "#cad3f5"),
            (keys::TEXT_DARK, "#494d64"),
            (keys::SUCCESS, "#a6da95"),
            (keys::DANGER, "#ed8796"),
        ]
        .into_iter()
        .collect();
        ThemeDescriptor::new(CUSTOM_THEME, is_dark_mode, palette)
    }

    #[test]
    fn export_json_uses_four_space_indent() {
        let json = export_json(&custom_theme(true)).unwrap();
        assert!(json.starts_with("{\n    \"isDarkMode\": true,"));
        assert!(json.contains("\n    \"--theme-accent\": \"#c6a0f6\""));
        assert!(json.ends_with("\n}"));
    }

    #[test]
    fn export_template_quotes_dark_mode() {
        let text = export_template(&custom_theme(false)).unwrap();
        assert!(text.starts_with("{\n    \"isDarkMode\": \"false\",\n"));
        assert!(text.contains("    \"--theme-text-dark\": \"#494d64\""));
        // Still valid JSON
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["isDarkMode"], "false");
    }

    #[test]
    fn export_missing_key_fails() {
        let theme = ThemeDescriptor::new(CUSTOM_THEME, false, Palette::new());
        let err = export_json(&theme).unwrap_err();
        assert!(matches!(err, ThemeError::MissingPaletteKey(_)));
        assert!(export_template(&theme).is_err());
    }

    #[test]
    fn json_round_trip() {
        for dark in [true, false] {
            let theme = custom_theme(dark);
            let imported = import_theme(&export_json(&theme).unwrap()).unwrap();
            assert_eq!(imported.is_dark_mode, dark);
            assert_eq!(&imported.palette, theme.palette());
        }
    }

    #[test]
    fn template_round_trip() {
        for dark in [true, false] {
            let theme = custom_theme(dark);
            let text = export_theme(&theme, ExportFormat::Template).unwrap();
            let imported = import_theme(&text).unwrap();
            assert_eq!(imported.is_dark_mode, dark);
            assert_eq!(&imported.palette, theme.palette());
        }
    }

    #[test]
    fn import_missing_key_is_validation_failure() {
        let text = r##"{
            "isDarkMode": true,
            "--theme-background": "#303446",
            "--theme-accent": "#c6a0f6",
            "--theme-text-primary": "#cad3f5",
            "--theme-text-dark": "#494d64",
            "--theme-success": "#a6da95"
        }"##;
        let err = import_theme(text).unwrap_err();
        assert!(matches!(
            err,
            ImportError::ValidationFailure(ref m) if m.contains("--theme-danger")
        ));
    }

    #[test]
    fn import_missing_dark_mode_is_validation_failure() {
        let text = r##"{
            "--theme-background": "#303446",
            "--theme-accent": "#c6a0f6",
            "--theme-text-primary": "#cad3f5",
            "--theme-text-dark": "#494d64",
            "--theme-success": "#a6da95",
            "--theme-danger": "#ed8796"
        }"##;
        assert!(matches!(
            import_theme(text),
            Err(ImportError::ValidationFailure(_))
        ));
    }

    #[test]
    fn import_rejects_bad_dark_mode_text() {
        let text = export_template(&custom_theme(true))
            .unwrap()
            .replace("\"true\"", "\"maybe\"");
        assert!(matches!(
            import_theme(&text),
            Err(ImportError::ValidationFailure(ref m)) if m.contains("maybe")
        ));
    }

    #[test]
    fn import_rejects_bad_color() {
        let text = export_json(&custom_theme(true))
            .unwrap()
            .replace("#ed8796", "not a color");
        assert!(matches!(
            import_theme(&text),
            Err(ImportError::ValidationFailure(ref m)) if m.contains("--theme-danger")
        ));
    }

    #[test]
    fn import_garbage_is_parse_error() {
        assert!(matches!(
            import_theme("definitely not json"),
            Err(ImportError::Parse(_))
        ));
        assert!(matches!(import_theme("{"), Err(ImportError::Parse(_))));
    }

    #[test]
    fn import_ignores_extra_keys() {
        let text = export_json(&custom_theme(false))
            .unwrap()
            .replacen('{', "{\n    \"--theme-border\": \"#000000\",", 1);
        let imported = import_theme(&text).unwrap();
        assert!(imported.palette.get(keys::BORDER).is_none());
        assert_eq!(imported.palette.len(), 6);
    }

    #[test]
    fn import_rejects_colors_derivation_cannot_blend() {
        for bad in ["#fff", "rgb(237, 135, 150)", "rgba(237, 135, 150, 1)"] {
            let text = export_json(&custom_theme(true))
                .unwrap()
                .replace("\"#ed8796\"", &format!("\"{bad}\""));
            assert!(
                matches!(
                    import_theme(&text),
                    Err(ImportError::ValidationFailure(ref m)) if m.contains("6-digit hex")
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn template_export_stays_valid_json_for_odd_values() {
        let mut palette = custom_theme(true).palette().clone();
        palette.set(keys::ACCENT, "#c6a0f6\n\t\u{1}\"x\\");
        let theme = ThemeDescriptor::new(CUSTOM_THEME, true, palette);
        let text = export_template(&theme).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[keys::ACCENT], "#c6a0f6\n\t\u{1}\"x\\");
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn import_adds_missing_hash() {
        let text = export_json(&custom_theme(true))
            .unwrap()
            .replace("\"#303446\"", "\"303446\"");
        let imported = import_theme(&text).unwrap();
        assert_eq!(imported.palette.get(keys::BACKGROUND), Some("#303446"));
    }
}
