//! CSS text handling for client themes.
//!
//! Provides:
//! - Rule rendering (`render_rule`, `CssRule`, `render_document`)
//! - A pretty-printer for user-supplied CSS (`format_css`)
//! - Sanitization of palette names and color values
//! - Variable blocks that drop rejected entries with a warning
//! - JavaScript snippets a webview evaluates to apply all of the above

pub mod format;
pub mod generate;
pub mod render;
pub mod sanitize;
pub mod script;

pub use format::format_css;
pub use generate::{root_rule, variable_rule};
pub use render::{render_document, render_rule, CssRule};
pub use sanitize::{validate_css_color, validate_custom_property};
pub use script::{recolor_frame_js, remove_element_js, style_element_js, write_clipboard_js};
