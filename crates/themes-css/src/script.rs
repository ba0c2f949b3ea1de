//! JavaScript snippets for pushing themes into a live page.
//!
//! A webview host evaluates these. Style snippets keep exactly one `<style>`
//! element per id in `document.head`.

/// Quote a string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    // JSON strings are valid JS string literals; only the line separators
    // U+2028/U+2029 need escaping for older engines.
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Generate a snippet that creates or replaces the `<style id=...>` element
/// and sets its text to `css`.
///
/// ```
/// use themes_css::style_element_js;
///
/// let js = style_element_js("client-themes-theme-overrides", ":root {\n}");
/// assert!(js.contains("getElementById(\"client-themes-theme-overrides\")"));
/// assert!(js.contains("\":root {\\n}\""));
/// ```
pub fn style_element_js(id: &str, css: &str) -> String {
    let id = js_string(id);
    let css = js_string(css);
    format!(
        "(function() {{\n  \
         var el = document.getElementById({id});\n  \
         if (!el) {{\n    \
         el = document.createElement('style');\n    \
         el.id = {id};\n    \
         document.head.appendChild(el);\n  \
         }}\n  \
         el.textContent = {css};\n\
         }})();"
    )
}

/// Generate a snippet that removes the element with `id`, if present.
pub fn remove_element_js(id: &str) -> String {
    let id = js_string(id);
    format!(
        "(function() {{\n  \
         var el = document.getElementById({id});\n  \
         if (el) el.remove();\n\
         }})();"
    )
}

/// Generate a snippet that paints the client frame. `bar` is the background
/// of the title bar, side bars and content titles; `text` colors the title
/// bar and the selected side bar entry.
pub fn recolor_frame_js(bar: &str, text: &str) -> String {
    let bar = js_string(bar);
    let text = js_string(text);
    format!(
        "(function() {{\n  \
         var bar = {bar}, text = {text};\n  \
         var title = document.querySelector('#body-container .highlite_titlebar');\n  \
         if (title) {{ title.style.background = bar; title.style.color = text; }}\n  \
         var main = document.getElementById('main');\n  \
         if (!main) return;\n  \
         main.querySelectorAll('.highlite_bar, .content_title')\n    \
         .forEach(function(el) {{ el.style.background = bar; }});\n  \
         main.querySelectorAll('.highlite_bar_selected_content')\n    \
         .forEach(function(el) {{ el.style.color = text; }});\n\
         }})();"
    )
}

/// Generate a snippet that writes `text` to the clipboard.
pub fn write_clipboard_js(text: &str) -> String {
    format!("navigator.clipboard.writeText({});", js_string(text))
}
