//! Theme data for the HighLite client themes plugin.
//!
//! Holds everything about themes that does not touch a page: color math,
//! palette derivation, the theme registry, custom theme import/export, and
//! the TOML-persisted plugin settings.
//!
//! # Quick Start
//!
//! ```rust
//! use themes_config::palette::keys;
//! use themes_config::ThemeRegistry;
//!
//! let registry = ThemeRegistry::default();
//! let theme = registry.get_by_name("Catppuccin - Dark").unwrap();
//! let derived = theme.derive().unwrap().unwrap();
//! assert_eq!(derived.get(keys::BORDER), Some("rgba(198, 160, 246, 0.1)"));
//! ```

pub mod colors;
pub mod derive;
pub mod palette;
pub mod registry;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod transfer;
pub mod validation;

pub use derive::derive;
pub use palette::{BaseColor, DerivedPalette, Palette};
pub use registry::{ThemeDescriptor, ThemeRegistry, CUSTOM_THEME, DEFAULT_THEME};
pub use schema::ThemesConfig;
pub use toml_writer::save_config_to_path;
pub use transfer::{export_theme, import_theme, ExportFormat, ImportedTheme};

use std::path::Path;
use themes_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created with a commented template on first use. An
/// explicit path must already exist.
pub fn load_config(path: Option<&Path>) -> Result<ThemesConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Build a registry whose Custom theme is seeded from the config.
pub fn registry_from_config(config: &ThemesConfig) -> ThemeRegistry {
    ThemeRegistry::with_custom(config.custom.is_dark_mode, config.custom.palette())
}
