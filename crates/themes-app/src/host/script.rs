use themes_common::HostError;
use themes_css::{recolor_frame_js, remove_element_js, style_element_js, write_clipboard_js};

use super::{FrameColors, Result, StyleHost};

/// Host that turns every call into a JavaScript snippet and hands it to
/// `eval`, e.g. a webview's `evaluate_script`.
///
/// Reading the clipboard is asynchronous inside a page, so the embedder
/// fetches the text itself and stores it with
/// [`ScriptHost::set_clipboard_text`] before triggering an import.
pub struct ScriptHost<F> {
    eval: F,
    clipboard: Option<String>,
}

impl<F> ScriptHost<F>
where
    F: FnMut(&str) -> Result<()>,
{
    pub fn new(eval: F) -> Self {
        Self {
            eval,
            clipboard: None,
        }
    }

    /// Text the next [`StyleHost::read_clipboard`] returns. It is consumed
    /// by that read.
    pub fn set_clipboard_text(&mut self, text: impl Into<String>) {
        self.clipboard = Some(text.into());
    }

    fn run(&mut self, script: String) -> Result<()> {
        (self.eval)(&script)
    }
}

impl<F> StyleHost for ScriptHost<F>
where
    F: FnMut(&str) -> Result<()>,
{
    fn set_style(&mut self, id: &str, css: &str) -> Result<()> {
        self.run(style_element_js(id, css))
    }

    fn remove_style(&mut self, id: &str) -> Result<()> {
        self.run(remove_element_js(id))
    }

    fn recolor_frame(&mut self, colors: &FrameColors) -> Result<()> {
        self.run(recolor_frame_js(&colors.bar, &colors.text))
    }

    fn read_clipboard(&mut self) -> Result<String> {
        self.clipboard
            .take()
            .ok_or_else(|| HostError::ClipboardError("page has not provided clipboard text".into()))
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.run(write_clipboard_js(text))
    }
}
