use serde::Serialize;

use crate::geometry::{container_declarations, triangle_declarations, StyleObject};
use crate::params::StyleParameters;

/// Structured form of the rendered element for a live preview box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewModel {
    pub container: StyleObject,
    /// Absent when the triangle is disabled, mirroring the markup.
    pub triangle: Option<StyleObject>,
    pub text: String,
}

pub fn generate_preview(params: &StyleParameters) -> PreviewModel {
    PreviewModel {
        container: container_declarations(params).into(),
        triangle: params
            .triangle_enabled
            .then(|| triangle_declarations(params).into()),
        text: params.body_text.clone(),
    }
}
