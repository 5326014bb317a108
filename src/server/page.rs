use crate::codegen::RenderOutput;
use crate::params::{Kind, StyleParameters};

use super::css::build_css;
use super::inline_js::build_inline_js;
use super::panels::{build_code_panels, build_preview_panel, build_settings_panel};

pub(super) fn build_configurator_page(
    kind: Kind,
    params: &StyleParameters,
    output: &RenderOutput,
    copy_reset_ms: u64,
) -> String {
    let css = build_css();
    let settings = build_settings_panel(kind, params);
    let preview = build_preview_panel(kind, output);
    let code = build_code_panels(output);
    let inline_js = build_inline_js(output, copy_reset_ms);
    let label = kind.label();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{label} Generator</title>
<style>
{css}
</style>
</head>
<body>
<div class="header">
  <h1>{label} Generator</h1>
  <p>Tune the style, then copy the HTML and CSS.</p>
</div>
<div class="main">
{settings}
{preview}
{code}
</div>
{inline_js}
</body>
</html>"##
    )
}
