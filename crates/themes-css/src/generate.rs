//! CSS variable blocks from palette entries.
//!
//! Names and values go through the sanitizer before they reach a rule.
//! Anything rejected is dropped with a warning so one bad custom color
//! cannot break the rest of the stylesheet.

use crate::render::CssRule;
use crate::sanitize::{validate_css_color, validate_custom_property};

/// Build `selector { --name: value; ... }` from `(name, value)` pairs.
///
/// Pairs whose name is not a custom property or whose value is not a hex /
/// `rgb()` / `rgba()` color are skipped with a warning log.
pub fn variable_rule<'a, I>(selector: &str, variables: I) -> CssRule
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut rule = CssRule::new(selector);

    for (name, value) in variables {
        let validation = validate_custom_property(name).and_then(|()| validate_css_color(value));

        match validation {
            Ok(()) => rule.push(name, value),
            Err(e) => {
                tracing::warn!(
                    name,
                    value,
                    error = %e,
                    "Theme variable rejected by sanitizer"
                );
            }
        }
    }

    rule
}

/// Shorthand for a `:root` variable block.
pub fn root_rule<'a, I>(variables: I) -> CssRule
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    variable_rule(":root", variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_rule_basic() {
        let rule = root_rule([
            ("--theme-background", "#303446"),
            ("--theme-border", "rgba(198, 160, 246, 0.1)"),
        ]);
        assert_eq!(
            rule.render(),
            ":root {\n    --theme-background: #303446;\n    --theme-border: rgba(198, 160, 246, 0.1);\n}"
        );
    }

    #[test]
    fn variable_rule_skips_invalid_values() {
        let rule = variable_rule(
            ":root",
            [
                ("--ok", "#fff"),
                ("--bad", "expression(evil)"),
                ("--named", "red"),
            ],
        );
        assert_eq!(rule.declarations.len(), 1);
        let css = rule.render();
        assert!(css.contains("--ok"));
        assert!(!css.contains("--bad"));
        assert!(!css.contains("expression"));
    }

    #[test]
    fn variable_rule_skips_invalid_names() {
        let rule = root_rule([("color", "#fff"), ("--a;b", "#000"), ("--good", "#111")]);
        assert_eq!(
            rule.declarations,
            vec![("--good".to_string(), "#111".to_string())]
        );
    }

    #[test]
    fn all_rejected_leaves_empty_rule() {
        let rule = root_rule([("--x", "")]);
        assert!(rule.is_empty());
        assert_eq!(rule.render(), ":root {\n}");
    }
}
