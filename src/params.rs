//! Style parameters, presentation kinds, and editing-boundary validation.
//!
//! The generator in [`crate::codegen`] trusts whatever record it is given.
//! Everything in here exists so that the layers feeding it (session edits,
//! parameter files, CLI flags) never hand it a partially invalid record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BubbleError, Result};

/// Allowed triangle size in pixels (inclusive).
pub const TRIANGLE_SIZE_RANGE: (i32, i32) = (4, 20);
/// Allowed horizontal and vertical padding in pixels (inclusive).
pub const PADDING_RANGE: (i32, i32) = (4, 40);
/// Allowed corner radius in pixels (inclusive).
pub const BORDER_RADIUS_RANGE: (i32, i32) = (0, 20);

/// Characters that would end a CSS declaration, open a string or escape, or
/// open markup.
const COLOR_FORBIDDEN: &[char] = &[';', '{', '}', '<', '>', '\\', '"', '\''];

/// Presentation variant. Only the class naming differs between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Bubble,
    Tooltip,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Bubble, Kind::Tooltip];

    /// Class name of the container element (`bubble`, `tooltip`).
    pub fn class_name(self) -> &'static str {
        match self {
            Kind::Bubble => "bubble",
            Kind::Tooltip => "tooltip",
        }
    }

    /// Class name of the triangle marker element (`bubble-triangle`, ...).
    pub fn triangle_class(self) -> &'static str {
        match self {
            Kind::Bubble => "bubble-triangle",
            Kind::Tooltip => "tooltip-triangle",
        }
    }

    /// Human-readable label for page headings.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Bubble => "Bubble",
            Kind::Tooltip => "Tooltip",
        }
    }

    /// Session-start parameters for this kind.
    pub fn defaults(self) -> StyleParameters {
        let (position, text) = match self {
            Kind::Bubble => (TrianglePosition::Left, "This is a bubble message!"),
            Kind::Tooltip => (TrianglePosition::Top, "This is a tooltip message!"),
        };
        StyleParameters {
            background_color: "#fdffe2".to_string(),
            text_color: "#000000".to_string(),
            shadow_enabled: true,
            triangle_enabled: true,
            body_text: text.to_string(),
            triangle_position: position,
            triangle_size: 8,
            padding_x: 12,
            padding_y: 8,
            border_radius: 6,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Kind {
    type Err = BubbleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Kind::Bubble),
            "tooltip" => Ok(Kind::Tooltip),
            _ => Err(BubbleError::UnknownKind(s.to_string())),
        }
    }
}

/// Which edge of the container the triangle sticks out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrianglePosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl TrianglePosition {
    pub const ALL: [TrianglePosition; 4] = [
        TrianglePosition::Top,
        TrianglePosition::Bottom,
        TrianglePosition::Left,
        TrianglePosition::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrianglePosition::Top => "top",
            TrianglePosition::Bottom => "bottom",
            TrianglePosition::Left => "left",
            TrianglePosition::Right => "right",
        }
    }
}

impl fmt::Display for TrianglePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrianglePosition {
    type Err = BubbleError;

    fn from_str(s: &str) -> Result<Self> {
        TrianglePosition::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BubbleError::UnknownPosition(s.to_string()))
    }
}

/// The full parameter record. Rendering is a pure function of this plus a
/// [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleParameters {
    pub background_color: String,
    pub text_color: String,
    pub shadow_enabled: bool,
    pub triangle_enabled: bool,
    /// Inserted into the markup as-is, without escaping.
    pub body_text: String,
    pub triangle_position: TrianglePosition,
    pub triangle_size: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    pub border_radius: i32,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Kind::default().defaults()
    }
}

impl StyleParameters {
    /// Check every constrained field. Stops at the first violation.
    pub fn validate(&self) -> Result<()> {
        check_color("backgroundColor", &self.background_color)?;
        check_color("textColor", &self.text_color)?;
        check_range("triangleSize", self.triangle_size, TRIANGLE_SIZE_RANGE)?;
        check_range("paddingX", self.padding_x, PADDING_RANGE)?;
        check_range("paddingY", self.padding_y, PADDING_RANGE)?;
        check_range("borderRadius", self.border_radius, BORDER_RADIUS_RANGE)?;
        Ok(())
    }
}

pub(crate) fn check_range(field: &'static str, value: i32, range: (i32, i32)) -> Result<()> {
    if value < range.0 || value > range.1 {
        return Err(BubbleError::out_of_range(field, value, range));
    }
    Ok(())
}

pub(crate) fn check_color(field: &'static str, value: &str) -> Result<()> {
    let breaks_out = value.trim().is_empty()
        || value.contains(COLOR_FORBIDDEN)
        || value.contains("/*")
        || value.contains("*/")
        || value.chars().any(char::is_control)
        || !parens_balanced(value);
    if breaks_out {
        return Err(BubbleError::invalid_color(field, value));
    }
    Ok(())
}

/// An unclosed `(` swallows the `;` that ends the declaration.
fn parens_balanced(value: &str) -> bool {
    let mut depth = 0usize;
    for c in value.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_differ_only_in_text_and_position() {
        let bubble = Kind::Bubble.defaults();
        let tooltip = Kind::Tooltip.defaults();
        assert_eq!(bubble.triangle_position, TrianglePosition::Left);
        assert_eq!(tooltip.triangle_position, TrianglePosition::Top);
        assert_eq!(bubble.body_text, "This is a bubble message!");
        assert_eq!(tooltip.body_text, "This is a tooltip message!");

        let aligned = StyleParameters {
            body_text: bubble.body_text.clone(),
            triangle_position: bubble.triangle_position,
            ..tooltip
        };
        assert_eq!(aligned, bubble);
    }

    #[test]
    fn defaults_are_valid() {
        for kind in Kind::ALL {
            kind.defaults().validate().expect("defaults should validate");
        }
    }

    #[test]
    fn class_names() {
        assert_eq!(Kind::Bubble.class_name(), "bubble");
        assert_eq!(Kind::Tooltip.triangle_class(), "tooltip-triangle");
    }

    #[test]
    fn position_parses_case_insensitively() {
        assert_eq!("Left".parse::<TrianglePosition>().unwrap(), TrianglePosition::Left);
        assert_eq!(" bottom ".parse::<TrianglePosition>().unwrap(), TrianglePosition::Bottom);
        assert!(matches!(
            "middle".parse::<TrianglePosition>(),
            Err(BubbleError::UnknownPosition(_))
        ));
    }

    #[test]
    fn kind_parses() {
        assert_eq!("TOOLTIP".parse::<Kind>().unwrap(), Kind::Tooltip);
        assert!(matches!("popover".parse::<Kind>(), Err(BubbleError::UnknownKind(_))));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut p = StyleParameters::default();
        p.triangle_size = 4;
        assert!(p.validate().is_ok());
        p.triangle_size = 20;
        assert!(p.validate().is_ok());
        p.triangle_size = 21;
        assert!(matches!(
            p.validate(),
            Err(BubbleError::OutOfRange { field: "triangleSize", value: 21, .. })
        ));

        let mut p = StyleParameters::default();
        p.border_radius = 0;
        assert!(p.validate().is_ok());
        p.padding_y = 3;
        assert!(matches!(
            p.validate(),
            Err(BubbleError::OutOfRange { field: "paddingY", .. })
        ));
    }

    #[test]
    fn colors_accept_any_css_syntax_but_reject_breakouts() {
        let mut p = StyleParameters::default();
        for ok in ["red", "#fff", "rgb(1, 2, 3)", "hsl(120 50% 50% / 0.5)", "var(--x)"] {
            p.background_color = ok.to_string();
            assert!(p.validate().is_ok(), "{ok} should be accepted");
        }
        for bad in [
            "",
            "   ",
            "red; color: blue",
            "red}",
            "<b>",
            "red /*",
            "red */",
            "re\\64",
            "red\n",
            "red\tblue",
            "\"red",
            "rgb(1, 2, 3",
            "red)",
        ] {
            p.background_color = bad.to_string();
            assert!(
                matches!(p.validate(), Err(BubbleError::InvalidColor { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepted_colors_keep_both_rules_intact() {
        for color in ["red", "rgb(0 0 0 / 50%)", "color-mix(in srgb, red 40%, blue)"] {
            let params = StyleParameters {
                background_color: color.to_string(),
                ..StyleParameters::default()
            };
            params.validate().expect("color should be accepted");
            let css = crate::render_stylesheet(&params, Kind::Bubble);
            assert_eq!(css.matches('{').count(), 2);
            assert_eq!(css.matches('}').count(), 2);
            assert!(css.contains(&format!("  background-color: {color};\n")));
        }
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_value(Kind::Tooltip.defaults()).unwrap();
        assert_eq!(json["backgroundColor"], "#fdffe2");
        assert_eq!(json["trianglePosition"], "top");
        assert_eq!(json["paddingX"], 12);
    }
}
