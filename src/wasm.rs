//! WASM bindings for the renderer.
//!
//! Exposes rendering to JavaScript via wasm-bindgen.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::config::{resolve, StyleOverrides};
use crate::params::Kind;

/// Render a (possibly partial) camelCase parameter object.
///
/// Returns `{"markup": .., "stylesheet": .., "preview": ..}` as a JSON
/// string, or throws a JS error when the parameters fail validation.
#[wasm_bindgen]
pub fn render_json(params_json: &str, kind: &str) -> Result<String, JsError> {
    let kind: Kind = kind.parse().map_err(|e: crate::error::BubbleError| JsError::new(&e.to_string()))?;
    let overrides = StyleOverrides::from_json(params_json).map_err(|e| JsError::new(&e.to_string()))?;
    let (kind, params) = resolve(kind, overrides).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&crate::render(&params, kind)).map_err(|e| JsError::new(&e.to_string()))
}

/// Session-start parameters for `kind` as a JSON string.
#[wasm_bindgen]
pub fn default_params(kind: &str) -> Result<String, JsError> {
    let kind: Kind = kind.parse().map_err(|e: crate::error::BubbleError| JsError::new(&e.to_string()))?;
    serde_json::to_string(&kind.defaults()).map_err(|e| JsError::new(&e.to_string()))
}
