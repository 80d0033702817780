//! SVG document builder: prolog, root element and child composition.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord, xml_escape};
use super::style::ChartColor;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" standalone="no"?>"#;
pub const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Builder for standalone SVG documents.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    background: Option<ChartColor>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Accessible `<title>` element, emitted as the root's first child.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Full-canvas background rectangle drawn beneath every element.
    #[must_use]
    pub fn with_background(mut self, color: ChartColor) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    /// In-place variant of [`Self::push_element`] for loops.
    pub fn add<E: SvgElement>(&mut self, element: &E) {
        self.elements.push(element.render());
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();
        let width = format_coord(self.width);
        let height = format_coord(self.height);

        let _ = writeln!(output, "{XML_DECLARATION}");
        let _ = writeln!(output, "{SVG_DOCTYPE}");
        let _ = writeln!(
            output,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="{SVG_NAMESPACE}">"#
        );

        let escaped = xml_escape(&self.title);
        let _ = writeln!(output, r"    <title>{escaped}</title>");

        if let Some(background) = self.background {
            let _ = writeln!(
                output,
                r#"    <rect width="100%" height="100%" fill="{background}"/>"#
            );
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
