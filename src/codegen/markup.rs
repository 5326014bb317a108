use crate::params::{Kind, StyleParameters};

/// Container `<div>` with the optional triangle marker as its first child and
/// the body text, unescaped, as trailing content.
pub fn generate_markup(params: &StyleParameters, kind: Kind) -> String {
    let mut html = String::with_capacity(64 + params.body_text.len());
    html.push_str(&format!(r#"<div class="{}">"#, kind.class_name()));
    if params.triangle_enabled {
        html.push_str(&format!(
            "\n  <div class=\"{}\"></div>",
            kind.triangle_class()
        ));
    }
    html.push_str("\n  ");
    html.push_str(&params.body_text);
    html.push_str("\n</div>");
    html
}
