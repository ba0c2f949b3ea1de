//! Config file location and first-run creation.

use std::path::{Path, PathBuf};

use themes_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::toml_writer::replace_file;

const APP_DIR: &str = "client-themes";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/client-themes/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented template to `path`, creating its directory.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    replace_file(path, default_config_toml())?;
    info!(path = %path.display(), "Created default config");
    Ok(())
}
