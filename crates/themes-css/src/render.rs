//! CSS rule rendering.
//!
//! Turns selector + declaration lists into CSS text. Declarations keep
//! their insertion order and are indented by four spaces.

// =============================================================================
// RULE TYPE
// =============================================================================

/// A single CSS rule: optional comment, selector, ordered declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssRule {
    /// Rendered as `/* comment */` on the line above the selector.
    pub comment: Option<String>,
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push((property.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn render(&self) -> String {
        let block = render_rule(&self.selector, &self.declarations);
        match &self.comment {
            Some(comment) => format!("/* {comment} */\n{block}"),
            None => block,
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render `selector { ... }` with one declaration per line.
///
/// ```
/// use themes_css::render_rule;
///
/// let css = render_rule(":root", &[("--theme-accent", "#c6a0f6")]);
/// assert_eq!(css, ":root {\n    --theme-accent: #c6a0f6;\n}");
/// ```
pub fn render_rule<K, V>(selector: &str, declarations: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut css = format!("{selector} {{\n");
    for (property, value) in declarations {
        css.push_str(&format!("    {}: {};\n", property.as_ref(), value.as_ref()));
    }
    css.push('}');
    css
}

/// Render every rule, separated by one blank line.
pub fn render_document(rules: &[CssRule]) -> String {
    rules
        .iter()
        .map(CssRule::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_rule_basic() {
        let css = render_rule(
            ":root",
            &[("--theme-background", "#303446"), ("--theme-accent", "#c6a0f6")],
        );
        assert_eq!(
            css,
            ":root {\n    --theme-background: #303446;\n    --theme-accent: #c6a0f6;\n}"
        );
    }

    #[test]
    fn render_rule_keeps_insertion_order() {
        let css = render_rule(".a", &[("z-index", "1"), ("color", "red"), ("all", "unset")]);
        let z = css.find("z-index").unwrap();
        let color = css.find("color").unwrap();
        let all = css.find("all").unwrap();
        assert!(z < color && color < all);
    }

    #[test]
    fn render_rule_empty() {
        let decls: Vec<(String, String)> = vec![];
        assert_eq!(render_rule(".empty", &decls), ".empty {\n}");
    }

    #[test]
    fn rule_with_comment() {
        let rule = CssRule::new("#iconbar a:hover .iconify")
            .with_comment("HighLite Title Bar Icons")
            .declare("color", "#c6a0f6");
        assert_eq!(
            rule.render(),
            "/* HighLite Title Bar Icons */\n#iconbar a:hover .iconify {\n    color: #c6a0f6;\n}"
        );
    }

    #[test]
    fn render_document_separates_rules() {
        let rules = vec![
            CssRule::new(".a").declare("color", "red"),
            CssRule::new(".b").declare("color", "blue"),
        ];
        assert_eq!(
            render_document(&rules),
            ".a {\n    color: red;\n}\n\n.b {\n    color: blue;\n}"
        );
    }

    #[test]
    fn render_document_empty() {
        assert_eq!(render_document(&[]), "");
    }
}
