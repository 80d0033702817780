//! SVG generation primitives.
//!
//! Building blocks for standalone SVG documents:
//! - XML prolog and SVG 1.1 doctype, explicit pixel size with matching viewBox
//! - `<title>` as the root's first child for screen readers
//! - escaping of all user-supplied text

mod builder;
mod element;
mod format;
mod style;

pub use builder::{SVG_DOCTYPE, SVG_NAMESPACE, SvgBuilder, XML_DECLARATION};
pub use element::{Axis, AxisOrientation, Line, Rect, SvgElement, Text};
pub use format::{format_coord, xml_escape};
pub use style::{
    AXIS_STROKE, BACKGROUND, ChartColor, FONT_FAMILY, GRID_STROKE, LEGEND_FALLBACK, TextAnchor,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
