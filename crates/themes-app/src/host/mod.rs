//! The boundary between the theme controller and whatever owns the page.
//!
//! A page host backs these calls with DOM style elements, the window frame
//! and the system clipboard. [`ScriptHost`] does that by emitting JavaScript
//! for a webview to evaluate; [`MemoryHost`] keeps everything in memory for
//! the CLI and for tests.

mod memory;
mod script;

pub use memory::MemoryHost;
pub use script::ScriptHost;

use serde::{Deserialize, Serialize};
use themes_common::HostError;

pub type Result<T> = std::result::Result<T, HostError>;

/// Style element holding the rendered theme overrides.
pub const THEME_STYLE_ID: &str = "client-themes-theme-overrides";

/// Style element holding the user's free-form CSS.
pub const CSS_STYLE_ID: &str = "client-themes-css-overrides";

/// Colors applied to the client window frame (title bar, side bars).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameColors {
    /// Background of the title bar, bars and content titles.
    pub bar: String,
    /// Text color of the title bar and selected bar content.
    pub text: String,
}

impl Default for FrameColors {
    fn default() -> Self {
        Self {
            bar: "#141414".into(),
            text: "#ffffff".into(),
        }
    }
}

/// Host-side operations the theme controller needs.
pub trait StyleHost {
    /// Create or replace the style element `id` with `css`.
    fn set_style(&mut self, id: &str, css: &str) -> Result<()>;
    /// Remove the style element `id`. Removing a missing element is not an error.
    fn remove_style(&mut self, id: &str) -> Result<()>;
    fn recolor_frame(&mut self, colors: &FrameColors) -> Result<()>;
    fn read_clipboard(&mut self) -> Result<String>;
    fn write_clipboard(&mut self, text: &str) -> Result<()>;
}
