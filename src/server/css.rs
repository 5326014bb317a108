/// Page chrome for the configurator. The generated stylesheet is never mixed
/// in here; the preview box is styled inline from the preview model.
pub(super) fn build_css() -> String {
    r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { width: 100%; min-height: 100%; background: #F9FAFB; color: #111827;
  font-family: system-ui, -apple-system, sans-serif; font-size: 14px; }

/* ── Header ──────────────────────────────────────── */
.header {
  background: linear-gradient(to right, #2563EB, #4338CA);
  padding: 32px 24px; color: #FFF;
}
.header h1 { font-size: 28px; font-weight: 700; }
.header p { margin-top: 4px; color: #DBEAFE; }

/* ── Layout ──────────────────────────────────────── */
.main { max-width: 1280px; margin: 0 auto; padding: 32px 24px; display: grid; gap: 16px; }
.card { background: #FFF; padding: 24px; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.card h2 { font-size: 18px; font-weight: 600; margin-bottom: 12px; }
.code-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
@media (max-width: 768px) { .code-grid, .settings { grid-template-columns: 1fr; } }

/* ── Settings form ───────────────────────────────── */
.settings { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.field label { display: block; font-size: 13px; font-weight: 500; color: #374151; margin-bottom: 4px; }
.field input[type="text"], .field input[type="number"], .field select {
  width: 100%; padding: 8px; border: 1px solid #D1D5DB; border-radius: 6px; font: inherit;
}
.field .color-row { display: flex; gap: 8px; }
.field .color-row input[type="color"] { height: 40px; width: 80px; }
.toggles { display: flex; align-items: center; gap: 16px; }
.toggles label { display: inline-flex; align-items: center; gap: 6px; font-size: 13px; }
.error-line { color: #DC2626; font-size: 12px; min-height: 16px; margin-top: 8px; }

/* ── Preview ─────────────────────────────────────── */
.preview-stage {
  display: flex; align-items: center; justify-content: center;
  height: 160px; background: #F9FAFB; border-radius: 6px;
}

/* ── Code panes ──────────────────────────────────── */
.code-wrap { position: relative; }
.code-wrap pre {
  background: #F9FAFB; padding: 16px; border-radius: 6px; overflow: auto;
  white-space: pre-wrap; font-family: 'JetBrains Mono', monospace; font-size: 12px;
}
.copy-btn {
  position: absolute; top: 8px; right: 8px; background: #FFF; border: 1px solid #E5E7EB;
  color: #6B7280; padding: 2px 8px; border-radius: 4px; cursor: pointer; font: inherit; font-size: 11px;
}
.copy-btn:hover { color: #3B82F6; }
.copy-btn.copied { color: #22C55E; border-color: #22C55E; }
.download { font-size: 12px; color: #4338CA; margin-left: 8px; }
"#
    .to_string()
}
