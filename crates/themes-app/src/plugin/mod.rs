//! Theme controller: owns the settings, the registry and a host, and keeps
//! the host's styles in sync with whatever the user picks.
//!
//! Host failures are logged and swallowed so a broken page never corrupts
//! the registry or the saved settings.

use std::path::PathBuf;

use serde_json::Value;
use themes_common::{ClientThemesError, ThemeError};
use themes_config::{
    export_theme, import_theme, registry_from_config, save_config_to_path, BaseColor, ExportFormat,
    ThemeDescriptor, ThemeRegistry, ThemesConfig, CUSTOM_THEME, DEFAULT_THEME,
};

use crate::host::{StyleHost, CSS_STYLE_ID, THEME_STYLE_ID};
use crate::settings::{
    self, color_for_setting, SettingEntry, CURRENT_THEME, CUSTOM_CSS, CUSTOM_DARK_MODE,
    EXPORT_TO_CLIPBOARD, IMPORT_FROM_CLIPBOARD,
};
use crate::stylesheet::{frame_colors, render_theme_css};

pub struct ClientThemes<H: StyleHost> {
    config: ThemesConfig,
    registry: ThemeRegistry,
    host: H,
    /// Where to save `config` after each change. `None` keeps it in memory.
    config_path: Option<PathBuf>,
}

impl<H: StyleHost> ClientThemes<H> {
    /// Build a controller with the Custom theme seeded from `config`.
    pub fn new(config: ThemesConfig, host: H) -> Self {
        let registry = registry_from_config(&config);
        Self {
            config,
            registry,
            host,
            config_path: None,
        }
    }

    /// Save the config to `path` after every settings change.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn config(&self) -> &ThemesConfig {
        &self.config
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn selected_theme(&self) -> &str {
        &self.config.theme.name
    }

    pub fn is_custom_selected(&self) -> bool {
        self.config.theme.name == CUSTOM_THEME
    }

    pub fn settings(&self) -> Vec<SettingEntry> {
        settings::build_settings(&self.config, &self.registry)
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Apply the selected theme (Default if it no longer exists) and the
    /// custom CSS.
    pub fn start(&mut self) {
        tracing::info!(theme = %self.config.theme.name, "Started Theme Switcher");
        self.apply_current();
        self.apply_custom_css();
    }

    /// Put the client back to its unthemed look.
    pub fn stop(&mut self) {
        tracing::info!("Stopped Theme Switcher");
        self.apply_named(DEFAULT_THEME);
        if let Err(e) = self.host.remove_style(CSS_STYLE_ID) {
            tracing::warn!(error = %e, "Failed to remove custom CSS");
        }
    }

    /// Re-apply whichever theme is selected.
    pub fn apply_current(&mut self) {
        let name = if self.registry.get_by_name(&self.config.theme.name).is_some() {
            self.config.theme.name.clone()
        } else {
            tracing::warn!(
                theme = %self.config.theme.name,
                "Selected theme not found, falling back to Default"
            );
            DEFAULT_THEME.to_string()
        };
        self.apply_named(&name);
    }

    // =========================================================================
    // SETTINGS CHANGES
    // =========================================================================

    /// Switch to the theme called `name`.
    pub fn select_theme(&mut self, name: &str) -> themes_common::Result<()> {
        if self.registry.get_by_name(name).is_none() {
            return Err(ThemeError::NotFound(name.to_string()).into());
        }

        tracing::info!(theme = name, "Selecting theme");
        self.config.theme.name = name.to_string();
        self.persist();

        if let Err(e) = self.host.remove_style(CSS_STYLE_ID) {
            tracing::warn!(error = %e, "Failed to remove custom CSS");
        }
        self.apply_named(name);
        self.apply_custom_css();
        Ok(())
    }

    pub fn set_custom_dark_mode(&mut self, is_dark_mode: bool) {
        self.registry.update_custom(Some(is_dark_mode), None, None);
        self.config.custom.is_dark_mode = is_dark_mode;
        self.persist();
        self.refresh_custom();
    }

    pub fn set_custom_color(&mut self, color: BaseColor, value: &str) {
        self.registry.update_custom(None, Some(color.key()), Some(value));
        if !value.is_empty() {
            self.config.custom.set_color(color, value);
        }
        self.persist();
        self.refresh_custom();
    }

    pub fn set_custom_css(&mut self, css: &str) {
        self.config.css.custom = css.to_string();
        self.persist();
        self.apply_custom_css();
    }

    /// Apply a settings change reported by the host.
    ///
    /// `value` is ignored for the two buttons.
    pub fn update_setting(&mut self, key: &str, value: &Value) -> themes_common::Result<()> {
        tracing::debug!(key, %value, "update_setting");

        match key {
            CURRENT_THEME => self.select_theme(expect_str(key, value)?),
            CUSTOM_DARK_MODE => {
                let is_dark_mode = value.as_bool().ok_or_else(|| {
                    ClientThemesError::Other(format!("setting '{key}' expects a boolean"))
                })?;
                self.set_custom_dark_mode(is_dark_mode);
                Ok(())
            }
            CUSTOM_CSS => {
                self.set_custom_css(expect_str(key, value)?);
                Ok(())
            }
            EXPORT_TO_CLIPBOARD => {
                self.export_to_clipboard();
                Ok(())
            }
            IMPORT_FROM_CLIPBOARD => {
                self.import_from_clipboard();
                Ok(())
            }
            _ => match color_for_setting(key) {
                Some(color) => {
                    self.set_custom_color(color, expect_str(key, value)?);
                    Ok(())
                }
                None => Err(ClientThemesError::Other(format!("unknown setting '{key}'"))),
            },
        }
    }

    // =========================================================================
    // IMPORT / EXPORT
    // =========================================================================

    /// Replace the Custom theme with one parsed from `text`.
    ///
    /// Nothing changes unless the whole import validates.
    pub fn import_theme(&mut self, text: &str) -> themes_common::Result<()> {
        let imported = import_theme(text)?;

        self.config.custom.is_dark_mode = imported.is_dark_mode;
        for color in BaseColor::ALL {
            if let Some(value) = imported.palette.get(color.key()) {
                self.config.custom.set_color(color, value);
            }
        }
        self.registry.replace_custom(imported.is_dark_mode, imported.palette);
        self.persist();

        tracing::info!("Imported custom theme");
        self.refresh_custom();
        Ok(())
    }

    /// Serialize the Custom theme.
    pub fn export_theme(&self, format: ExportFormat) -> Result<String, ThemeError> {
        export_theme(self.registry.custom(), format)
    }

    pub fn export_to_clipboard(&mut self) {
        let text = match self.export_theme(ExportFormat::Template) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to export custom theme");
                return;
            }
        };

        match self.host.write_clipboard(&text) {
            Ok(()) => tracing::info!("Exported custom theme to clipboard"),
            Err(e) => tracing::warn!(error = %e, "Failed to export custom theme to clipboard"),
        }
    }

    pub fn import_from_clipboard(&mut self) {
        let text = match self.host.read_clipboard() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to import custom theme from clipboard");
                return;
            }
        };

        if let Err(e) = self.import_theme(&text) {
            tracing::warn!(error = %e, "Failed to import custom theme from clipboard");
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn refresh_custom(&mut self) {
        if self.is_custom_selected() {
            self.apply_named(CUSTOM_THEME);
        }
    }

    fn apply_named(&mut self, name: &str) {
        let Some(theme) = self.registry.get_by_name(name) else {
            tracing::warn!(theme = name, "Theme not found");
            return;
        };
        apply_theme(&mut self.host, theme);
    }

    fn apply_custom_css(&mut self) {
        if let Err(e) = self.host.set_style(CSS_STYLE_ID, &self.config.css.custom) {
            tracing::warn!(error = %e, "Failed to apply custom CSS");
        }
    }

    fn persist(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = save_config_to_path(&self.config, path) {
            tracing::warn!(error = %e, "Failed to save config to disk");
        }
    }
}

/// Push `theme` to the host: override styles first, then the frame.
/// A theme that fails to build has its override element removed.
fn apply_theme<H: StyleHost>(host: &mut H, theme: &ThemeDescriptor) {
    let applied = match render_theme_css(theme) {
        Ok(Some(css)) => host.set_style(THEME_STYLE_ID, &css),
        Ok(None) => host.remove_style(THEME_STYLE_ID),
        Err(e) => {
            tracing::warn!(theme = theme.name(), error = %e, "Failed to build theme");
            host.remove_style(THEME_STYLE_ID)
        }
    };
    if let Err(e) = applied {
        tracing::warn!(theme = theme.name(), error = %e, "Failed to apply theme styles");
    }

    match frame_colors(theme) {
        Ok(colors) => {
            if let Err(e) = host.recolor_frame(&colors) {
                tracing::warn!(theme = theme.name(), error = %e, "Failed to recolor frame");
            }
        }
        Err(e) => {
            tracing::warn!(theme = theme.name(), error = %e, "Failed to resolve frame colors");
        }
    }

    tracing::debug!(theme = theme.name(), "Applied theme");
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, ClientThemesError> {
    value
        .as_str()
        .ok_or_else(|| ClientThemesError::Other(format!("setting '{key}' expects a string")))
}
