//! Reading `ThemesConfig` from TOML.

use std::io::ErrorKind;
use std::path::Path;

use themes_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::ThemesConfig;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If validation fails, a warning
/// is logged and the parsed config is returned as-is; a bad custom color only
/// breaks the Custom theme, not the rest of the plugin.
pub fn load_from_path(path: &Path) -> Result<ThemesConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config: ThemesConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), error = %e, "Config has invalid values");
    }

    info!(path = %path.display(), theme = %config.theme.name, "Loaded config");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/client-themes/config.toml`
///
/// A missing file is created from the commented template and defaults are
/// returned.
pub fn load_default() -> Result<ThemesConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "No config yet, writing defaults");
            create_default_config(&path)?;
            Ok(ThemesConfig::default())
        }
        result => result,
    }
}
