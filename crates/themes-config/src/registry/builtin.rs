//! Palettes shipped with the plugin.

use crate::palette::{keys, Palette};

use super::types::{ThemeDescriptor, DEFAULT_THEME};

fn palette(colors: [&str; 6]) -> Palette {
    let [background, accent, text_primary, text_dark, success, danger] = colors;
    [
        (keys::BACKGROUND, background),
        (keys::ACCENT, accent),
        (keys::TEXT_PRIMARY, text_primary),
        (keys::TEXT_DARK, text_dark),
        (keys::SUCCESS, success),
        (keys::DANGER, danger),
    ]
    .into_iter()
    .collect()
}

/// Build every built-in theme, Default first.
///
/// Colors are listed as background, accent, text-primary, text-dark,
/// success, danger.
pub(super) fn built_in_themes() -> Vec<ThemeDescriptor> {
    vec![
        ThemeDescriptor::new(DEFAULT_THEME, true, Palette::new()),
        // Catppuccin Macchiato: https://catppuccin.com/palette/
        ThemeDescriptor::new(
            "Catppuccin - Dark",
            true,
            palette(["#303446", "#c6a0f6", "#cad3f5", "#91d7e3", "#a6da95", "#ed8796"]),
        ),
        // Catppuccin Latte
        ThemeDescriptor::new(
            "Catppuccin - Light",
            false,
            palette(["#eff1f5", "#1e66f5", "#4c4f69", "#04a5e5", "#40a02b", "#e64553"]),
        ),
        // https://draculatheme.com/contribute
        ThemeDescriptor::new(
            "Dracula",
            true,
            palette(["#282A36", "#BD93F9", "#F8F8F2", "#8BE9FD", "#50FA7B", "#FF5555"]),
        ),
        ThemeDescriptor::new(
            "Alucard",
            false,
            palette(["#FFFBEB", "#A34D14", "#1F1F1F", "#CFCFDE", "#14710A", "#CB3A2A"]),
        ),
        // https://www.nordtheme.com/docs/colors-and-palettes
        ThemeDescriptor::new(
            "Nord - Dark",
            true,
            palette(["#2e3440", "#88c0d0", "#eceff4", "#81a1c1", "#a3be8c", "#d08770"]),
        ),
        ThemeDescriptor::new(
            "Nord - Light",
            false,
            palette(["#d8dee9", "#5e81ac", "#2e3440", "#88c0d0", "#a3be8c", "#bf616a"]),
        ),
        // Puffball-6 by polyphrog: https://lospec.com/palette-list/puffball-6
        ThemeDescriptor::new(
            "Puffball-6",
            false,
            palette(["#eedbc8", "#548b71", "#5a473e", "#e0bb68", "#97b34e", "#d58353"]),
        ),
    ]
}
