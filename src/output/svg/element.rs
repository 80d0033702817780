//! Primitive SVG elements: lines, rectangles, text and axes.

use std::fmt::Write;

use super::format::{format_coord, xml_escape};
use super::style::{AXIS_STROKE, ChartColor, FONT_FAMILY, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A straight line segment.
#[derive(Debug, Clone)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: ChartColor,
    pub stroke_width: Option<f64>,
    pub dash_array: Option<String>,
}

impl Line {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: ChartColor) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width: None,
            dash_array: None,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Render the line dashed, e.g. `"2,2"`.
    #[must_use]
    pub fn with_dash_array(mut self, pattern: impl Into<String>) -> Self {
        self.dash_array = Some(pattern.into());
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}""#,
            format_coord(self.x1),
            format_coord(self.y1),
            format_coord(self.x2),
            format_coord(self.y2),
            self.stroke
        );
        if let Some(width) = self.stroke_width {
            let _ = write!(output, r#" stroke-width="{}""#, format_coord(width));
        }
        if let Some(ref dash) = self.dash_array {
            let _ = write!(output, r#" stroke-dasharray="{dash}""#);
        }
        output.push_str("/>");
        output
    }
}

/// A filled rectangle: bars and legend swatches.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: ChartColor,
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(self.width),
            format_coord(self.height),
            self.fill
        )
    }
}

/// A text label. Content is escaped on render.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}""#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(self.font_size)
        );
        // SVG's implicit anchor is start
        if self.anchor != TextAnchor::Start {
            let _ = write!(output, r#" text-anchor="{}""#, self.anchor);
        }
        let _ = write!(output, ">{}</text>", xml_escape(&self.content));
        output
    }
}

/// Axis line bounding the plotting area.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub color: ChartColor,
    pub stroke_width: f64,
}

impl Axis {
    /// Axis running rightwards from `(x, y)`.
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            x,
            y,
            length,
            color: ChartColor::hex(AXIS_STROKE),
            stroke_width: 2.0,
        }
    }

    /// Axis running downwards from `(x, y)`.
    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            x,
            y,
            length,
            color: ChartColor::hex(AXIS_STROKE),
            stroke_width: 2.0,
        }
    }

    fn end_point(&self) -> (f64, f64) {
        match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y + self.length),
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let (end_x, end_y) = self.end_point();
        Line::new(self.x, self.y, end_x, end_y, self.color.clone())
            .with_stroke_width(self.stroke_width)
            .render()
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
