//! Saving `ThemesConfig` as TOML.
//!
//! A save never leaves a half-written config: the new text goes to a
//! `<name>.tmp` sibling first, which is then renamed over the real file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use themes_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::ThemesConfig;

/// Serialize `config` and replace the file at `path` with it.
pub fn save_config_to_path(config: &ThemesConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    replace_file(path, &contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "Saved config");
    Ok(())
}

/// Swap `contents` in at `path` through a temp sibling, creating missing
/// parent directories.
///
/// On failure the temp file is removed again and the original file, if
/// any, is left as it was.
pub(crate) fn replace_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let write_error = |path: &Path, source: io::Error| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
    }

    let tmp = tmp_sibling(path);
    fs::write(&tmp, contents).map_err(|e| write_error(&tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            warn!(tmp = %tmp.display(), error = %cleanup, "Could not remove temporary config file");
        }
        return Err(write_error(path, e));
    }
    Ok(())
}

/// `config.toml` -> `config.toml.tmp`, in the same directory.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
