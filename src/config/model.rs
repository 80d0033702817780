use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SvgChartsError};
use crate::output::svg::ChartColor;

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_TITLE: &str = "Barchart";

/// Canvas size and title of a chart.
///
/// Rendering may enlarge `width` to fit the bars; it never shrinks it and
/// never touches `height`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub const fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Grow `width` to `required` if it is currently smaller.
    /// Returns whether the width changed.
    pub const fn widen_to(&mut self, required: u32) -> bool {
        if required > self.width {
            self.width = required;
            true
        } else {
            false
        }
    }
}

/// `[chart]` table of a chart file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Chart settings loaded from TOML:
///
/// ```toml
/// [chart]
/// title = "Monthly Sales"
/// width = 800
///
/// [colors]
/// "Product A" = "#FF0000"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartFile {
    #[serde(default)]
    pub chart: ChartSection,

    /// Subject → color overrides, applied in file order.
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl ChartFile {
    /// Reject colors that are not `#RGB`/`#RRGGBB` and zero dimensions.
    ///
    /// # Errors
    /// Returns `SvgChartsError::Config` naming the offending entry.
    pub fn validate(&self) -> Result<()> {
        if let Some((subject, color)) = self
            .colors
            .iter()
            .find(|(_, color)| !ChartColor::is_hex(color))
        {
            return Err(SvgChartsError::Config(format!(
                "invalid color '{color}' for subject '{subject}': expected #RGB or #RRGGBB"
            )));
        }
        if self.chart.width == Some(0) || self.chart.height == Some(0) {
            return Err(SvgChartsError::Config(
                "chart width and height must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlay the `[chart]` values that are present onto `config`.
    pub fn apply_to(&self, config: &mut ChartConfig) {
        if let Some(ref title) = self.chart.title {
            config.title.clone_from(title);
        }
        if let Some(width) = self.chart.width {
            config.width = width;
        }
        if let Some(height) = self.chart.height {
            config.height = height;
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
