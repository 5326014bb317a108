use serde::Serialize;

use crate::geometry::StyleObject;

pub(super) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Inline `style="..."` value for a preview element rendered server-side.
pub(super) fn style_attr(style: &StyleObject) -> String {
    let css = style
        .declarations()
        .iter()
        .map(|d| format!("{}: {}", d.property, d.value))
        .collect::<Vec<_>>()
        .join("; ");
    html_escape(&css)
}

/// JSON for embedding inside an inline `<script>` block. Escapes `</` as
/// `<\/` so the HTML parser cannot see a closing tag in string data.
pub(super) fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}
