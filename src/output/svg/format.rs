//! Text formatting helpers for SVG output.

/// Escape text for embedding in XML character data or attribute values.
///
/// Covers the five predefined XML entities, so the result is safe inside both
/// double- and single-quoted attributes.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate for an SVG attribute.
///
/// Whole numbers print without a fractional part (`250`, not `250.0`);
/// `-0` collapses to `0`.
#[must_use]
pub fn format_coord(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
