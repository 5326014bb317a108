use serde::Serialize;

use crate::params::{Kind, StyleParameters};

mod markup;
mod preview;
mod stylesheet;


pub use self::markup::generate_markup;
pub use self::preview::{generate_preview, PreviewModel};
pub use self::stylesheet::generate_stylesheet;

// ── Public types ───────────────────────────────────────────────────────

/// Everything one render produces: the two copy-pasteable strings plus the
/// structured model the live preview applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutput {
    pub markup: String,
    pub stylesheet: String,
    pub preview: PreviewModel,
}

// ── Entry point ────────────────────────────────────────────────────────

/// Render all three outputs. Total and deterministic: no validation happens
/// here, out-of-range values are written through as given.
pub fn generate_full(params: &StyleParameters, kind: Kind) -> RenderOutput {
    RenderOutput {
        markup: generate_markup(params, kind),
        stylesheet: generate_stylesheet(params, kind),
        preview: generate_preview(params),
    }
}
