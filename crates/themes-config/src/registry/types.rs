//! Theme descriptor type.

use themes_common::ThemeError;

use crate::derive::derive;
use crate::palette::{DerivedPalette, Palette};

/// Name of the built-in theme that leaves the client untouched.
pub const DEFAULT_THEME: &str = "Default";

/// Name of the single user-editable theme.
pub const CUSTOM_THEME: &str = "Custom";

/// A named base palette plus its light/dark flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDescriptor {
    name: String,
    is_dark_mode: bool,
    palette: Palette,
}

impl ThemeDescriptor {
    pub fn new(name: impl Into<String>, is_dark_mode: bool, palette: Palette) -> Self {
        Self {
            name: name.into(),
            is_dark_mode,
            palette,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    /// The base palette. Never contains derived shades.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_THEME
    }

    /// Derive the full palette, or `None` for the Default theme, which
    /// produces no overrides at all.
    pub fn derive(&self) -> Result<Option<DerivedPalette>, ThemeError> {
        if self.is_default() {
            return Ok(None);
        }
        derive(&self.palette, self.is_dark_mode).map(Some)
    }

    pub(super) fn set_dark_mode(&mut self, is_dark_mode: bool) {
        self.is_dark_mode = is_dark_mode;
    }

    pub(super) fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub(super) fn replace_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}
