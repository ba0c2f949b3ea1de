//! Config validation.
//!
//! Collects every problem into a single `ConfigError::ValidationError`
//! instead of stopping at the first one.


use themes_common::ConfigError;

use crate::colors::{validate_base_color, validate_color};
use crate::palette::BaseColor;
use crate::schema::ThemesConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ThemesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_theme(&mut errors, config);
    validate_custom_colors(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_theme(errors: &mut Vec<String>, config: &ThemesConfig) {
    if config.theme.name.trim().is_empty() {
        errors.push("theme.name must not be empty".into());
    }
}

fn validate_custom_colors(errors: &mut Vec<String>, config: &ThemesConfig) {
    for color in BaseColor::ALL {
        let value = config.custom.color(color);
        if validate_base_color(value) {
            continue;
        }
        let problem = if validate_color(value) {
            "is not a 6-digit hex color"
        } else {
            "is not a valid color"
        };
        errors.push(format!("custom color {} = '{value}' {problem}", color.key()));
    }
}
