//! Client theme controller and host adapter.
//!
//! [`plugin::ClientThemes`] ties the theme data from `themes-config` and the
//! CSS rendering from `themes-css` to a [`host::StyleHost`] that owns the
//! actual page.

pub mod host;
pub mod plugin;
pub mod settings;
pub mod stylesheet;

pub use host::{FrameColors, MemoryHost, ScriptHost, StyleHost, CSS_STYLE_ID, THEME_STYLE_ID};
pub use plugin::ClientThemes;
pub use settings::{build_settings, SettingEntry, SettingKind};
pub use stylesheet::{build_theme_rules, frame_colors, render_theme_css};
