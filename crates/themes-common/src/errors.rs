use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("missing palette key: {0}")]
    MissingPaletteKey(String),

    #[error("theme not found: {0}")]
    NotFound(String),

    #[error("theme export failed: {0}")]
    Export(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("theme import parse error: {0}")]
    Parse(String),

    #[error("theme import validation failure: {0}")]
    ValidationFailure(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config serialize error: {0}")]
    SerializeError(String),

    #[error("no config directory on this platform")]
    NoConfigDir,

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("style error: {0}")]
    StyleError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientThemesError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
