//! Tests for SVG module exports.

use super::*;

#[test]
fn exports_are_available() {
    let _: ChartColor = ChartColor::hex("#000");
    let _: TextAnchor = TextAnchor::Middle;
    let _: AxisOrientation = AxisOrientation::Horizontal;
    let _: SvgBuilder = SvgBuilder::new(1.0, 1.0);
}

#[test]
fn elements_compose_into_document() {
    let svg = SvgBuilder::new(120.0, 80.0)
        .push_element(&Axis::horizontal(10.0, 70.0, 100.0))
        .push_element(&Text::new(60.0, 40.0, "mid").with_anchor(TextAnchor::Middle))
        .build();

    assert!(svg.contains(r#"x2="110" y2="70""#));
    assert!(svg.contains(">mid</text>"));
}
