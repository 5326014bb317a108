use crate::geometry::{container_declarations, triangle_declarations, Declaration};
use crate::params::{Kind, StyleParameters};

/// Container rule followed by the triangle rule, separated by a blank line.
///
/// The triangle rule is written even when the marker is disabled; only the
/// markup decides whether the element exists.
pub fn generate_stylesheet(params: &StyleParameters, kind: Kind) -> String {
    let container_selector = format!(".{}", kind.class_name());
    let triangle_selector = format!(".{} .{}", kind.class_name(), kind.triangle_class());

    let mut css = render_rule(&container_selector, &container_declarations(params));
    css.push_str("\n\n");
    css.push_str(&render_rule(&triangle_selector, &triangle_declarations(params)));
    css
}

/// One rule block, two-space indented, one declaration per line. No trailing
/// newline after the closing brace.
fn render_rule(selector: &str, decls: &[Declaration]) -> String {
    let mut rule = format!("{selector} {{\n");
    for d in decls {
        rule.push_str(&format!("  {}: {};\n", d.property, d.value));
    }
    rule.push('}');
    rule
}
