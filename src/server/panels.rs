use crate::codegen::RenderOutput;
use crate::params::{
    Kind, StyleParameters, TrianglePosition, BORDER_RADIUS_RANGE, PADDING_RANGE,
    TRIANGLE_SIZE_RANGE,
};

use super::util::{html_escape, style_attr};

pub(super) fn build_settings_panel(kind: Kind, params: &StyleParameters) -> String {
    let mut html = format!(
        r#"<div class="card"><h2>{} Settings</h2><div class="settings">"#,
        kind.label()
    );

    html.push_str(&color_field("backgroundColor", "Background Color", &params.background_color));
    html.push_str(&color_field("textColor", "Text Color", &params.text_color));

    // Triangle position
    html.push_str(r#"<div class="field"><label for="trianglePosition">Triangle Position</label>"#);
    html.push_str(r#"<select id="trianglePosition" data-field="trianglePosition">"#);
    for position in TrianglePosition::ALL {
        let selected = if position == params.triangle_position { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{value}"{selected}>{label}</option>"#,
            value = position.as_str(),
            label = capitalize(position.as_str()),
        ));
    }
    html.push_str("</select></div>");

    html.push_str(&number_field("triangleSize", "Triangle Size (px)", params.triangle_size, TRIANGLE_SIZE_RANGE));
    html.push_str(&number_field("paddingX", "Padding X (px)", params.padding_x, PADDING_RANGE));
    html.push_str(&number_field("paddingY", "Padding Y (px)", params.padding_y, PADDING_RANGE));
    html.push_str(&number_field("borderRadius", "Border Radius (px)", params.border_radius, BORDER_RADIUS_RANGE));

    html.push_str(&format!(
        r#"<div class="field"><label for="bodyText">{} Text</label><input type="text" id="bodyText" data-field="bodyText" value="{}"></div>"#,
        kind.label(),
        html_escape(&params.body_text),
    ));

    html.push_str(&format!(
        r#"<div class="toggles">
  <label><input type="checkbox" id="shadowEnabled" data-field="shadowEnabled"{}> Shadow</label>
  <label><input type="checkbox" id="triangleEnabled" data-field="triangleEnabled"{}> Triangle</label>
</div>"#,
        checked(params.shadow_enabled),
        checked(params.triangle_enabled),
    ));

    html.push_str(r#"</div><div class="error-line" id="edit-error"></div></div>"#);
    html
}

pub(super) fn build_preview_panel(kind: Kind, output: &RenderOutput) -> String {
    let preview = &output.preview;
    let triangle = match &preview.triangle {
        Some(style) => format!(r#"<div id="preview-triangle" style="{}"></div>"#, style_attr(style)),
        None => r#"<div id="preview-triangle" style="display: none"></div>"#.to_string(),
    };
    format!(
        r#"<div class="card"><h2>{label} Preview</h2>
<div class="preview-stage">
  <div id="preview-box" style="{container}">{triangle}<span id="preview-text">{text}</span></div>
</div></div>"#,
        label = kind.label(),
        container = style_attr(&preview.container),
        triangle = triangle,
        text = html_escape(&preview.text),
    )
}

pub(super) fn build_code_panels(output: &RenderOutput) -> String {
    format!(
        r#"<div class="code-grid">
  <div class="card"><h2>HTML Code<a class="download" href="/export/html">download</a></h2>
    <div class="code-wrap"><pre id="markup-code">{markup}</pre>
    <button class="copy-btn" data-copy="markup">Copy</button></div></div>
  <div class="card"><h2>CSS Code<a class="download" href="/export/css">download</a></h2>
    <div class="code-wrap"><pre id="stylesheet-code">{stylesheet}</pre>
    <button class="copy-btn" data-copy="stylesheet">Copy</button></div></div>
</div>"#,
        markup = html_escape(&output.markup),
        stylesheet = html_escape(&output.stylesheet),
    )
}

fn color_field(field: &str, label: &str, value: &str) -> String {
    let value = html_escape(value);
    // The picker only understands #rrggbb; free-form colors live in the text box.
    let picker = if is_hex6(&value) { value.as_str() } else { "#000000" };
    format!(
        r#"<div class="field"><label for="{field}">{label}</label><div class="color-row">
  <input type="color" data-field="{field}" value="{picker}">
  <input type="text" id="{field}" data-field="{field}" value="{value}">
</div></div>"#
    )
}

fn number_field(field: &str, label: &str, value: i32, range: (i32, i32)) -> String {
    format!(
        r#"<div class="field"><label for="{field}">{label}</label><input type="number" id="{field}" data-field="{field}" value="{value}" min="{min}" max="{max}"></div>"#,
        min = range.0,
        max = range.1,
    )
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn is_hex6(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
