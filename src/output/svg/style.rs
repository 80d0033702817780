//! SVG styling primitives: colors and text anchoring.

use std::fmt;

use super::format::xml_escape;

/// Chart background fill.
pub const BACKGROUND: &str = "#f9f9f9";
/// Axis and tick stroke.
pub const AXIS_STROKE: &str = "#333";
/// Gridline stroke.
pub const GRID_STROKE: &str = "#ccc";
/// Legend swatch for subjects without an explicit color.
pub const LEGEND_FALLBACK: &str = "#999";
/// Font family used by every text node.
pub const FONT_FAMILY: &str = "Arial";

/// A CSS color value for `fill`/`stroke` attributes. Displays XML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    /// Create a hex color (e.g. `"#4285F4"`).
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a string is a `#RGB` or `#RRGGBB` hex color.
    #[must_use]
    pub fn is_hex(value: &str) -> bool {
        value.strip_prefix('#').is_some_and(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
    }
}

impl From<String> for ChartColor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&xml_escape(&self.0))
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
