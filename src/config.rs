//! JSON parameter files layered over per-kind defaults.
//!
//! ```json
//! { "kind": "tooltip", "backgroundColor": "#222", "paddingX": 16 }
//! ```
//!
//! Any field may be left out; missing fields fall through to the next layer
//! down and finally to [`Kind::defaults`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::{Kind, StyleParameters, TrianglePosition};

/// A partial [`StyleParameters`] record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangle_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangle_position: Option<TrianglePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangle_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<i32>,
}

impl StyleOverrides {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Combine two layers; fields set in `top` win.
    pub fn merge(self, top: StyleOverrides) -> StyleOverrides {
        StyleOverrides {
            kind: top.kind.or(self.kind),
            background_color: top.background_color.or(self.background_color),
            text_color: top.text_color.or(self.text_color),
            shadow_enabled: top.shadow_enabled.or(self.shadow_enabled),
            triangle_enabled: top.triangle_enabled.or(self.triangle_enabled),
            body_text: top.body_text.or(self.body_text),
            triangle_position: top.triangle_position.or(self.triangle_position),
            triangle_size: top.triangle_size.or(self.triangle_size),
            padding_x: top.padding_x.or(self.padding_x),
            padding_y: top.padding_y.or(self.padding_y),
            border_radius: top.border_radius.or(self.border_radius),
        }
    }

    /// Overwrite the fields of `base` that this layer sets.
    pub fn apply(self, base: StyleParameters) -> StyleParameters {
        StyleParameters {
            background_color: self.background_color.unwrap_or(base.background_color),
            text_color: self.text_color.unwrap_or(base.text_color),
            shadow_enabled: self.shadow_enabled.unwrap_or(base.shadow_enabled),
            triangle_enabled: self.triangle_enabled.unwrap_or(base.triangle_enabled),
            body_text: self.body_text.unwrap_or(base.body_text),
            triangle_position: self.triangle_position.unwrap_or(base.triangle_position),
            triangle_size: self.triangle_size.unwrap_or(base.triangle_size),
            padding_x: self.padding_x.unwrap_or(base.padding_x),
            padding_y: self.padding_y.unwrap_or(base.padding_y),
            border_radius: self.border_radius.unwrap_or(base.border_radius),
        }
    }
}

/// Read and parse a parameter file.
pub fn load_overrides(path: &Path) -> Result<StyleOverrides> {
    let text = fs::read_to_string(path)?;
    StyleOverrides::from_json(&text)
}

/// Defaults of the effective kind, then `overrides`, then validation.
///
/// The kind comes from the overrides if they name one, else `fallback`.
pub fn resolve(fallback: Kind, overrides: StyleOverrides) -> Result<(Kind, StyleParameters)> {
    let kind = overrides.kind.unwrap_or(fallback);
    let params = overrides.apply(kind.defaults());
    params.validate()?;
    Ok((kind, params))
}
