pub mod errors;
pub mod types;

pub use errors::{ClientThemesError, ConfigError, HostError, ImportError, ThemeError};
pub use types::Rgb;

pub type Result<T> = std::result::Result<T, ClientThemesError>;
