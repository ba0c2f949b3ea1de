use std::collections::BTreeMap;

use themes_common::HostError;

use super::{FrameColors, Result, StyleHost};

/// In-memory host: style elements keyed by id, the last frame recolor, and
/// a clipboard string.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    styles: BTreeMap<String, String>,
    frame: Option<FrameColors>,
    clipboard: Option<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `text` already on the clipboard.
    pub fn with_clipboard(text: impl Into<String>) -> Self {
        Self {
            clipboard: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn style(&self, id: &str) -> Option<&str> {
        self.styles.get(id).map(String::as_str)
    }

    pub fn style_ids(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn frame(&self) -> Option<&FrameColors> {
        self.frame.as_ref()
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}

impl StyleHost for MemoryHost {
    fn set_style(&mut self, id: &str, css: &str) -> Result<()> {
        self.styles.insert(id.to_string(), css.to_string());
        Ok(())
    }

    fn remove_style(&mut self, id: &str) -> Result<()> {
        self.styles.remove(id);
        Ok(())
    }

    fn recolor_frame(&mut self, colors: &FrameColors) -> Result<()> {
        self.frame = Some(colors.clone());
        Ok(())
    }

    fn read_clipboard(&mut self) -> Result<String> {
        self.clipboard
            .clone()
            .ok_or_else(|| HostError::ClipboardError("clipboard is empty".into()))
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}
