//! Theme override stylesheet.
//!
//! Turns a theme into the text of the `client-themes-theme-overrides` style
//! element: the derived `--theme-*` variables on `:root`, the HighSpell
//! client variables, and a fixed set of text color overrides for game UI
//! elements that don't read the variables.

use themes_common::ThemeError;
use themes_config::colors::hex_to_rgba;
use themes_config::palette::keys;
use themes_config::{DerivedPalette, ThemeDescriptor};
use themes_css::{render_document, root_rule, validate_css_color, CssRule};

use crate::host::FrameColors;

const HIGHSPELL_SELECTOR: &str = "#hs-screen-mask, #hs-screen-mask.hs-dark-theme";

/// One `selector { property: <palette color>; }` override.
struct TextOverride {
    comment: &'static str,
    selector: &'static str,
    property: &'static str,
    key: &'static str,
    important: bool,
}

const fn color(
    comment: &'static str,
    selector: &'static str,
    key: &'static str,
) -> TextOverride {
    TextOverride {
        comment,
        selector,
        property: "color",
        key,
        important: false,
    }
}

const fn important(mut o: TextOverride) -> TextOverride {
    o.important = true;
    o
}

const fn background(mut o: TextOverride) -> TextOverride {
    o.property = "background-color";
    o
}

const TEXT_OVERRIDES: &[TextOverride] = &[
    color(
        "HighSpell yellow Text -- Non-chat",
        ".hs-text--yellow:not(.hs-chat-menu__message-text-container)",
        keys::ACCENT,
    ),
    color(
        "HighSpell White Text -- Non-chat",
        ".hs-text--white:not(.hs-chat-menu__message-text-container)",
        keys::ACCENT,
    ),
    color(
        "HighSpell Action Bar Item Text",
        ".hs-action-bar-item__text",
        keys::TEXT_PRIMARY,
    ),
    background(color(
        "HighSpell Action Bar Selected",
        ".hs-action-bar-button--selected",
        keys::ACCENT,
    )),
    background(color(
        "HighSpell Action Bar Selected -- Hover",
        ".hs-action-bar-button--selected:hover",
        keys::ACCENT_LIGHT,
    )),
    color(
        "HighSpell Action Bar Selected Item Text",
        ".hs-action-bar-button--selected .hs-action-bar-item .hs-action-bar-item__text",
        keys::BACKGROUND,
    ),
    color(
        "HighSpell Context Menu Title",
        ".hs-context-menu__title",
        keys::TEXT_DARK,
    ),
    color(
        "HighSpell Context Menu Item -- Hover",
        ".hs-context-menu__item:hover",
        keys::BACKGROUND_MUTE,
    ),
    color(
        "HighSpell Context Menu Action Name -- Hover",
        ".hs-context-menu__item:hover .hs-context-menu__item__action-name",
        keys::ACCENT,
    ),
    color(
        "HighSpell Context Menu Action Name",
        ".hs-context-menu__item__action-name",
        keys::TEXT_PRIMARY,
    ),
    important(color(
        "HighLite Warning Indicator -- Error",
        "#warningIndicator .warning-icon.error",
        keys::DANGER,
    )),
    important(color(
        "HighLite Warning Indicator -- Warning",
        "#warningIndicator .warning-icon.warning",
        keys::ACCENT,
    )),
    color(
        "HighLite Title Bar Icons",
        "#iconbar a:hover .iconify",
        keys::ACCENT,
    ),
    important(color(
        "HighLite Plugin Settings Back Button",
        "#highlite-settings-back-button[style]",
        keys::BACKGROUND,
    )),
    important(color(
        "HighLite Plugin Settings Buttons",
        "#selectedContentDiv button[style]",
        keys::BACKGROUND,
    )),
];

// =============================================================================
// RULES
// =============================================================================

/// Build every override rule for `theme`.
///
/// Returns `None` for the Default theme, which has no overrides. Fails if
/// a color the rules reference is missing from the derived palette.
pub fn build_theme_rules(theme: &ThemeDescriptor) -> Result<Option<Vec<CssRule>>, ThemeError> {
    let Some(derived) = theme.derive()? else {
        return Ok(None);
    };

    let mut rules = Vec::with_capacity(TEXT_OVERRIDES.len() + 2);

    rules.push(root_rule(derived.iter()).with_comment("HighLite CSS Variable Reassignments"));
    rules.push(highspell_rule(&derived)?);

    for o in TEXT_OVERRIDES {
        let mut rule = CssRule::new(o.selector).with_comment(o.comment);
        let value = derived.require(o.key)?;
        if o.important {
            declare_color(&mut rule, o.property, value, " !important");
        } else {
            declare_color(&mut rule, o.property, value, "");
        }
        rules.push(rule);
    }

    tracing::debug!(theme = theme.name(), rules = rules.len(), "Built theme rules");
    Ok(Some(rules))
}

/// Render the override stylesheet for `theme`, or `None` for Default.
pub fn render_theme_css(theme: &ThemeDescriptor) -> Result<Option<String>, ThemeError> {
    Ok(build_theme_rules(theme)?.map(|rules| render_document(&rules)))
}

/// Window frame colors for `theme`.
pub fn frame_colors(theme: &ThemeDescriptor) -> Result<FrameColors, ThemeError> {
    if theme.is_default() {
        return Ok(FrameColors::default());
    }

    let palette = theme.palette();
    Ok(FrameColors {
        bar: palette.require(keys::BACKGROUND)?.to_string(),
        text: palette.require(keys::TEXT_PRIMARY)?.to_string(),
    })
}

// =============================================================================
// HELPERS
// =============================================================================

/// Client-side variables of the HighSpell game UI.
fn highspell_rule(derived: &DerivedPalette) -> Result<CssRule, ThemeError> {
    let background = derived.require(keys::BACKGROUND)?;
    let text_primary = derived.require(keys::TEXT_PRIMARY)?;

    let mut rule =
        CssRule::new(HIGHSPELL_SELECTOR).with_comment("HighSpell CSS Variable Reassignments");
    declare_color(&mut rule, "color", text_primary, "");
    declare_color(
        &mut rule,
        "--hs-color-menu-bg",
        &hex_to_rgba(background, 0.9)?,
        "",
    );
    declare_color(
        &mut rule,
        "--hs-color-menu-border",
        derived.require(keys::ACCENT)?,
        "",
    );
    declare_color(
        &mut rule,
        "--hs-color-overlay-menu-bg",
        &hex_to_rgba(background, 0.8)?,
        "",
    );
    declare_color(&mut rule, "--hs-color-menu-header-fg", text_primary, "");
    declare_color(
        &mut rule,
        "--hs-color-inventory-item-amount-bg",
        derived.require(keys::BACKGROUND_LIGHT)?,
        "",
    );
    Ok(rule)
}

/// Add `property: value{suffix}` unless the sanitizer rejects `value`.
fn declare_color(rule: &mut CssRule, property: &str, value: &str, suffix: &str) {
    match validate_css_color(value) {
        Ok(()) => rule.push(property, format!("{value}{suffix}")),
        Err(e) => {
            tracing::warn!(
                selector = %rule.selector,
                property,
                value,
                error = %e,
                "Theme override rejected by sanitizer"
            );
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
