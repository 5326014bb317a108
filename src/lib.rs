pub mod codegen;
pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod watch;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codegen::{PreviewModel, RenderOutput};
pub use params::{Kind, StyleParameters, TrianglePosition};

/// Render markup, stylesheet, and preview model for one parameter record.
///
/// Pure and total: the same input always gives byte-identical output, and
/// nothing is validated here. Constrain input with
/// [`StyleParameters::validate`] or an [`session::EditSession`] first.
pub fn render(params: &StyleParameters, kind: Kind) -> RenderOutput {
    codegen::generate_full(params, kind)
}

/// Render just the markup string.
pub fn render_markup(params: &StyleParameters, kind: Kind) -> String {
    codegen::generate_markup(params, kind)
}

/// Render just the stylesheet string.
pub fn render_stylesheet(params: &StyleParameters, kind: Kind) -> String {
    codegen::generate_stylesheet(params, kind)
}

/// Render just the preview model.
pub fn render_preview(params: &StyleParameters) -> PreviewModel {
    codegen::generate_preview(params)
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn end_to_end_bubble_defaults() {
        let params = Kind::Bubble.defaults();
        let out = render(&params, Kind::Bubble);

        assert_eq!(out.markup, render_markup(&params, Kind::Bubble));
        assert_eq!(out.stylesheet, render_stylesheet(&params, Kind::Bubble));
        assert_eq!(out.preview, render_preview(&params));
        assert!(out.stylesheet.starts_with(".bubble {\n"));
        assert!(out.stylesheet.ends_with("transform: translateY(-50%);\n}"));
    }

    #[test]
    fn end_to_end_session_to_render() {
        let mut session = session::EditSession::new(Kind::Tooltip);
        session
            .apply(session::FieldEdit::TrianglePosition(TrianglePosition::Right))
            .expect("edit should be accepted");
        session
            .apply(session::FieldEdit::ShadowEnabled(false))
            .expect("edit should be accepted");

        let out = session.output();
        assert_eq!(out, render(session.params(), Kind::Tooltip));
        assert!(out.stylesheet.contains("  border-left: 8px solid #fdffe2;\n"));
        assert!(out.stylesheet.contains("  left: 100%;\n  top: 50%;\n"));
        assert!(!out.stylesheet.contains("filter"));
    }

    #[test]
    fn end_to_end_config_to_render() {
        let overrides = config::StyleOverrides::from_json(
            r##"{"backgroundColor":"#333","textColor":"white","bodyText":"Saved!","trianglePosition":"bottom"}"##,
        )
        .expect("valid JSON");
        let (kind, params) = config::resolve(Kind::Bubble, overrides).expect("valid params");
        let out = render(&params, kind);

        assert!(out.markup.contains("\n  Saved!\n"));
        assert!(out.stylesheet.contains("  color: white;\n"));
        assert!(out.stylesheet.contains("  border-top: 8px solid #333;\n"));
    }
}
