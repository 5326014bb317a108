use crate::codegen::RenderOutput;
use super::util::script_json;

/// Client script: posts each field edit, then applies the returned output to
/// the code panes and the preview box. The preview box takes the preview
/// model's style objects as-is.
pub(super) fn build_inline_js(output: &RenderOutput, copy_reset_ms: u64) -> String {
    let initial_json = script_json(output);

    format!(
        r#"<script>
(function() {{
  var initial = {initial_json};

  function applyOutput(out) {{
    document.getElementById('markup-code').textContent = out.markup;
    document.getElementById('stylesheet-code').textContent = out.stylesheet;

    var box = document.getElementById('preview-box');
    box.removeAttribute('style');
    Object.assign(box.style, out.preview.container);

    var tri = document.getElementById('preview-triangle');
    tri.removeAttribute('style');
    if (out.preview.triangle) {{
      Object.assign(tri.style, out.preview.triangle);
    }} else {{
      tri.style.display = 'none';
    }}
    document.getElementById('preview-text').textContent = out.preview.text;
  }}

  function post(url, body) {{
    return fetch(url, {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: body === undefined ? '' : JSON.stringify(body)
    }}).then(function(r) {{ return r.json(); }});
  }}

  function readValue(el) {{
    if (el.type === 'checkbox') return el.checked;
    if (el.type === 'number') return Number(el.value);
    return el.value;
  }}

  var errorLine = document.getElementById('edit-error');

  function sendEdit(el) {{
    var field = el.getAttribute('data-field');
    post('/edit', {{ field: field, value: readValue(el) }}).then(function(res) {{
      errorLine.textContent = res.error || '';
      if (res.output) applyOutput(res.output);
    }});
    // Keep the color picker and its text box in step
    document.querySelectorAll('[data-field="' + field + '"]').forEach(function(other) {{
      if (other === el || other.type === 'checkbox') return;
      if (other.type === 'color' && !/^#[0-9a-fA-F]{{6}}$/.test(el.value)) return;
      other.value = el.value;
    }});
  }}

  document.querySelectorAll('[data-field]').forEach(function(el) {{
    var evt = (el.type === 'checkbox' || el.tagName === 'SELECT') ? 'change' : 'input';
    el.addEventListener(evt, function() {{ sendEdit(el); }});
  }});

  document.querySelectorAll('.copy-btn').forEach(function(btn) {{
    btn.addEventListener('click', function() {{
      post('/copy/' + btn.getAttribute('data-copy')).then(function(res) {{
        return navigator.clipboard.writeText(res.text).then(function() {{
          btn.classList.add('copied');
          btn.textContent = 'Copied!';
          setTimeout(function() {{
            btn.classList.remove('copied');
            btn.textContent = 'Copy';
          }}, res.resetAfterMs || {copy_reset_ms});
        }});
      }});
    }});
  }});

  applyOutput(initial);
}})();
</script>"#
    )
}
