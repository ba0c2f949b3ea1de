//! Theme registry: the built-in palettes plus one editable Custom slot.
//!
//! The registry is an ordinary value owned by whoever applies themes.
//! Built-in descriptors are only ever handed out by shared reference; the
//! Custom descriptor is the one place theme data changes at runtime.

mod builtin;
mod types;

pub use types::{ThemeDescriptor, CUSTOM_THEME, DEFAULT_THEME};

use tracing::debug;

use crate::palette::Palette;

/// Named lookup over the built-in themes and the Custom theme.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    built_ins: Vec<ThemeDescriptor>,
    custom: ThemeDescriptor,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_custom(false, Palette::new())
    }
}

impl ThemeRegistry {
    /// Build the registry with a seeded Custom theme.
    pub fn with_custom(is_dark_mode: bool, palette: Palette) -> Self {
        Self {
            built_ins: builtin::built_in_themes(),
            custom: ThemeDescriptor::new(CUSTOM_THEME, is_dark_mode, palette),
        }
    }

    /// Look up a theme by exact display name.
    pub fn get_by_name(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.iter().find(|theme| theme.name() == name)
    }

    /// All themes in display order, Custom last.
    pub fn iter(&self) -> impl Iterator<Item = &ThemeDescriptor> {
        self.built_ins.iter().chain(std::iter::once(&self.custom))
    }

    /// Theme names in display order, for the theme selector.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|theme| theme.name().to_string()).collect()
    }

    pub fn custom(&self) -> &ThemeDescriptor {
        &self.custom
    }

    /// Update the Custom theme in place.
    ///
    /// `is_dark_mode` is applied whenever it is given. `key = value` is
    /// stored only when both are given and non-empty. Keys and values are
    /// not validated here; a bad entry surfaces when the theme is derived.
    pub fn update_custom(
        &mut self,
        is_dark_mode: Option<bool>,
        key: Option<&str>,
        value: Option<&str>,
    ) {
        if let Some(is_dark_mode) = is_dark_mode {
            self.custom.set_dark_mode(is_dark_mode);
        }

        match (key, value) {
            (Some(key), Some(value)) if !key.is_empty() && !value.is_empty() => {
                debug!(key, value, "updating custom theme");
                self.custom.palette_mut().set(key, value);
            }
            _ => {}
        }
    }

    /// Replace the whole Custom theme at once.
    pub fn replace_custom(&mut self, is_dark_mode: bool, palette: Palette) {
        debug!(is_dark_mode, entries = palette.len(), "replacing custom theme");
        self.custom.set_dark_mode(is_dark_mode);
        self.custom.replace_palette(palette);
    }
}
