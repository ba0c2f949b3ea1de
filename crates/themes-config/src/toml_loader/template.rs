//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Client Themes configuration
# Only override what you want to change -- missing fields use defaults.

[theme]
# One of: Default, Catppuccin - Dark, Catppuccin - Light, Dracula, Alucard,
# Nord - Dark, Nord - Light, Puffball-6, Custom
name = "Default"

[custom]
# Used when the theme name is "Custom".
# is_dark_mode = false
# background = "#303446"
# accent = "#c6a0f6"
# text_primary = "#cad3f5"
# text_dark = "#494d64"     # alternate text; brighter on dark themes
# success = "#a6da95"
# danger = "#ed8796"

[css]
# Extra CSS injected after the theme overrides.
# custom = ""
"##
}
