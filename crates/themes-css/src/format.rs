//! CSS pretty-printer.
//!
//! Reformats hand-written CSS text: one declaration per line, closing braces on
//! their own lines, four spaces of indent per nesting level, and a blank
//! line between top-level blocks. Comments and selectors pass through
//! untouched apart from trimming.

use regex::Regex;
use std::sync::LazyLock;

static OPEN_BRACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\{\s*").unwrap());
static CLOSE_BRACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\}\s*").unwrap());
static SEMICOLON_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*;\s*").unwrap());

const INDENT: &str = "    ";

/// Normalize and re-indent a CSS string.
///
/// ```
/// use themes_css::format_css;
///
/// let css = format_css(".a{color:red;background:blue}.b{color:green}");
/// assert_eq!(
///     css,
///     ".a {\n    color:red;\n    background:blue\n}\n\n.b {\n    color:green\n}"
/// );
/// ```
pub fn format_css(css: &str) -> String {
    let css = OPEN_BRACE_RE.replace_all(css, " {\n");
    let css = CLOSE_BRACE_RE.replace_all(&css, "\n}\n");
    let css = SEMICOLON_RE.replace_all(&css, ";\n");

    let mut out = String::new();
    let mut depth: usize = 0;
    let mut after_close = false;

    for line in css.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line == "}" {
            depth = depth.saturating_sub(1);
        }

        if !out.is_empty() {
            out.push('\n');
            // Blank line between a closed block and the next top-level line
            if after_close && depth == 0 && line != "}" {
                out.push('\n');
            }
        }
        out.push_str(&INDENT.repeat(depth));
        out.push_str(line);

        after_close = line == "}";
        if line.ends_with('{') {
            depth += 1;
        }
    }

    out
}
