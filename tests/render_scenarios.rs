use bubble_forge::geometry::SHADOW_FILTER;
use bubble_forge::{render, Kind, StyleParameters, TrianglePosition};

fn all_variants() -> Vec<(Kind, StyleParameters)> {
    let mut out = Vec::new();
    for kind in Kind::ALL {
        for position in TrianglePosition::ALL {
            for (shadow, triangle) in [(true, true), (true, false), (false, true), (false, false)] {
                out.push((
                    kind,
                    StyleParameters {
                        triangle_position: position,
                        shadow_enabled: shadow,
                        triangle_enabled: triangle,
                        ..kind.defaults()
                    },
                ));
            }
        }
    }
    out
}

#[test]
fn scenario_bubble_left_with_shadow() {
    let params = StyleParameters {
        background_color: "#fdffe2".into(),
        text_color: "#000000".into(),
        shadow_enabled: true,
        triangle_enabled: true,
        body_text: "This is a bubble message!".into(),
        triangle_position: TrianglePosition::Left,
        triangle_size: 8,
        padding_x: 12,
        padding_y: 8,
        border_radius: 6,
    };
    assert_eq!(params, Kind::Bubble.defaults());

    let out = render(&params, Kind::Bubble);
    let (container, triangle) = out
        .stylesheet
        .split_once("\n\n")
        .expect("two rule blocks");

    assert!(container.contains("background-color: #fdffe2;"));
    assert!(container.contains("padding: 8px 12px;"));
    assert!(container.contains("border-radius: 6px;"));
    assert!(container.contains(&format!("filter: {SHADOW_FILTER};")));

    assert!(triangle.contains("border-right: 8px solid #fdffe2;"));
    assert!(triangle.contains("right: 100%;"));
    assert!(triangle.contains("top: 50%;"));
    assert!(triangle.contains("transform: translateY(-50%);"));

    assert_eq!(
        out.markup,
        "<div class=\"bubble\">\n  <div class=\"bubble-triangle\"></div>\n  This is a bubble message!\n</div>"
    );
}

#[test]
fn every_variant_is_deterministic() {
    for (kind, params) in all_variants() {
        assert_eq!(render(&params, kind), render(&params, kind));
    }
}

#[test]
fn marker_and_filter_follow_their_toggles() {
    for (kind, params) in all_variants() {
        let out = render(&params, kind);
        let marker = format!(r#"<div class="{}"></div>"#, kind.triangle_class());
        assert_eq!(out.markup.contains(&marker), params.triangle_enabled);
        assert_eq!(out.preview.triangle.is_some(), params.triangle_enabled);
        assert!(out
            .stylesheet
            .contains(&format!(".{} .{} {{", kind.class_name(), kind.triangle_class())));
        assert_eq!(out.stylesheet.contains("filter:"), params.shadow_enabled);
        assert_eq!(out.preview.container.get("filter").is_some(), params.shadow_enabled);
    }
}

#[test]
fn stylesheet_is_well_formed_across_the_parameter_ranges() {
    for size in [4, 12, 20] {
        for padding in [4, 40] {
            for radius in [0, 20] {
                let params = StyleParameters {
                    triangle_size: size,
                    padding_x: padding,
                    padding_y: padding,
                    border_radius: radius,
                    ..Kind::Tooltip.defaults()
                };
                let css = render(&params, Kind::Tooltip).stylesheet;
                assert_eq!(css.matches('{').count(), 2);
                assert_eq!(css.matches('}').count(), 2);
                for line in css.lines().filter(|l| l.starts_with("  ")) {
                    assert!(line.ends_with(';'), "unterminated declaration: {line}");
                    let (prop, value) = line.trim().split_once(": ").expect("property: value");
                    assert!(!prop.is_empty() && value.len() > 1, "empty part in {line}");
                }
                assert!(css.contains(&format!("border-bottom: {size}px solid #fdffe2;")));
            }
        }
    }
}

#[test]
fn preview_json_matches_stylesheet_values() {
    for (kind, params) in all_variants().into_iter().filter(|(_, p)| p.triangle_enabled) {
        let out = render(&params, kind);
        let triangle = out.preview.triangle.as_ref().expect("enabled");
        for d in triangle.declarations() {
            let line = format!("  {}: {};\n", d.property, d.value);
            assert!(out.stylesheet.contains(&line), "{line:?} missing from stylesheet");
        }
    }
}
