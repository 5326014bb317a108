//! Declaration tables for the container and the triangle tail.
//!
//! Both the stylesheet text and the preview model are built from the
//! functions in this module, so the two can only ever disagree in
//! formatting, never in geometry.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::params::{StyleParameters, TrianglePosition};

/// The drop shadow is a fixed recipe: offset (0, 2px), 4px blur, 20% black.
pub const SHADOW_FILTER: &str = "drop-shadow(0 2px 4px rgba(0,0,0,0.2))";

/// One `property: value` pair, property in CSS (kebab-case) spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Edges and offsets that make up one tail direction.
struct TailSpec {
    /// The two borders that form the slanted edges.
    transparent: [&'static str; 2],
    /// The border that is painted and becomes the visible triangle.
    colored: &'static str,
    /// Edge the triangle is pushed past (`100%`).
    anchor: &'static str,
    /// Axis the triangle is centered along (`50%`).
    center: &'static str,
    transform: &'static str,
}

fn tail_spec(position: TrianglePosition) -> TailSpec {
    match position {
        TrianglePosition::Top => TailSpec {
            transparent: ["border-left", "border-right"],
            colored: "border-bottom",
            anchor: "bottom",
            center: "left",
            transform: "translateX(-50%)",
        },
        TrianglePosition::Bottom => TailSpec {
            transparent: ["border-left", "border-right"],
            colored: "border-top",
            anchor: "top",
            center: "left",
            transform: "translateX(-50%)",
        },
        TrianglePosition::Left => TailSpec {
            transparent: ["border-top", "border-bottom"],
            colored: "border-right",
            anchor: "right",
            center: "top",
            transform: "translateY(-50%)",
        },
        TrianglePosition::Right => TailSpec {
            transparent: ["border-top", "border-bottom"],
            colored: "border-left",
            anchor: "left",
            center: "top",
            transform: "translateY(-50%)",
        },
    }
}

/// Declarations of the container box, shadow filter last when enabled.
pub fn container_declarations(params: &StyleParameters) -> Vec<Declaration> {
    let mut decls = vec![
        Declaration::new("position", "relative"),
        Declaration::new("display", "inline-block"),
        Declaration::new("background-color", params.background_color.as_str()),
        Declaration::new("color", params.text_color.as_str()),
        Declaration::new(
            "padding",
            format!("{}px {}px", params.padding_y, params.padding_x),
        ),
        Declaration::new("border-radius", format!("{}px", params.border_radius)),
    ];
    if params.shadow_enabled {
        decls.push(Declaration::new("filter", SHADOW_FILTER));
    }
    decls
}

/// Declarations of the zero-size triangle box: three borders sized by
/// `triangle_size`, then the offsets that park it outside the container.
pub fn triangle_declarations(params: &StyleParameters) -> Vec<Declaration> {
    let spec = tail_spec(params.triangle_position);
    let size = params.triangle_size;
    let clear = format!("{size}px solid transparent");

    vec![
        Declaration::new("position", "absolute"),
        Declaration::new("width", "0"),
        Declaration::new("height", "0"),
        Declaration::new(spec.transparent[0], clear.clone()),
        Declaration::new(spec.transparent[1], clear),
        Declaration::new(
            spec.colored,
            format!("{size}px solid {}", params.background_color),
        ),
        Declaration::new(spec.anchor, "100%"),
        Declaration::new(spec.center, "50%"),
        Declaration::new("transform", spec.transform),
    ]
}

/// Ordered declarations that serialize as a JS-style object
/// (`{"backgroundColor": "..."}`), ready for `Object.assign(el.style, ..)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleObject(pub Vec<Declaration>);

impl StyleObject {
    /// Value for a CSS property name (`border-left`), if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Declaration>> for StyleObject {
    fn from(decls: Vec<Declaration>) -> Self {
        Self(decls)
    }
}

impl Serialize for StyleObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for d in &self.0 {
            map.serialize_entry(&to_camel_case(d.property), &d.value)?;
        }
        map.end()
    }
}

/// `border-bottom` -> `borderBottom`.
pub fn to_camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for c in property.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
