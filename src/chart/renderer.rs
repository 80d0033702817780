//! Grouped vertical bar chart renderer.

use std::fs;
use std::path::Path;

use super::color::ColorMap;
use super::data::Dataset;
use super::layout::{
    self, BAR_WIDTH, ChartLayout, LEGEND_SWATCH, MARGIN_LEFT, MARGIN_TOP, TICK_LENGTH,
};
use crate::config::ChartConfig;
use crate::error::{Result, SvgChartsError};
use crate::output::svg::{
    AXIS_STROKE, Axis, BACKGROUND, ChartColor, FONT_FAMILY, GRID_STROKE, LEGEND_FALLBACK, Line,
    Rect, SvgBuilder, Text, TextAnchor,
};

/// Text shown in place of the chart when the dataset is empty.
pub const EMPTY_MESSAGE: &str = "No data available";

const TITLE_X: f64 = 30.0;
const TITLE_Y: f64 = 20.0;
const TITLE_FONT_SIZE: f64 = 20.0;
const GROUP_LABEL_OFFSET: f64 = 20.0;

/// Renders observations as a grouped bar chart, one group per time-slice.
///
/// `render` takes `&mut self` because it may widen the configured width to
/// fit every group; the new width stays visible through [`Self::width`].
/// An instance must not be shared between threads without external locking.
///
/// ```
/// use svg_charts::{BarChart, Observation};
///
/// let mut chart = BarChart::new(
///     vec![
///         Observation::new("Product A", "January", 25),
///         Observation::new("Product B", "January", 15),
///     ],
///     "Monthly Sales",
/// );
/// chart.set_dimensions(800, 400);
/// let svg = chart.render();
/// assert!(svg.contains("Monthly Sales"));
/// ```
#[derive(Debug, Clone)]
pub struct BarChart {
    data: Dataset,
    config: ChartConfig,
    colors: ColorMap,
}

impl BarChart {
    /// Create a 400×300 chart. Every distinct subject gets a palette color.
    #[must_use]
    pub fn new(data: impl Into<Dataset>, title: impl Into<String>) -> Self {
        Self::with_config(data, ChartConfig::new(title))
    }

    #[must_use]
    pub fn with_config(data: impl Into<Dataset>, config: ChartConfig) -> Self {
        let data = data.into();
        let colors = ColorMap::from_subjects(data.distinct_subjects());
        Self {
            data,
            config,
            colors,
        }
    }

    pub const fn set_dimensions(&mut self, width: u32, height: u32) -> &mut Self {
        self.config.set_dimensions(width, height);
        self
    }

    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.config.set_dimensions(width, height);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.config.title = title.into();
        self
    }

    /// Add or override subject colors, keyed by exact subject string.
    pub fn set_colors<K, V>(&mut self, colors: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.colors.merge(colors);
        self
    }

    /// Bar fill for a subject; see [`ColorMap::color_for`].
    #[must_use]
    pub fn color_for(&self, subject: &str) -> String {
        self.colors.color_for(subject)
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.config.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.config.height
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    #[must_use]
    pub const fn colors(&self) -> &ColorMap {
        &self.colors
    }

    #[must_use]
    pub const fn data(&self) -> &Dataset {
        &self.data
    }

    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Produce the SVG document.
    pub fn render(&mut self) -> String {
        if self.data.is_empty() {
            return self.render_empty();
        }

        let groups = self.data.group_by_time_slice();
        let required = layout::required_width(&groups);
        let previous = self.config.width;
        if self.config.widen_to(required) {
            log::debug!("widened chart from {previous}px to {required}px");
        }

        let layout = ChartLayout::compute(&self.data, groups, self.config.width, self.config.height);
        log::debug!(
            "rendering {} groups, {} ticks, max count {}",
            layout.groups.len(),
            layout.ticks.len(),
            layout.max_count
        );

        let mut svg = SvgBuilder::new(layout.width, layout.height)
            .with_title(self.config.title.as_str())
            .with_background(ChartColor::hex(BACKGROUND))
            .push_element(
                &Text::new(TITLE_X, TITLE_Y, self.config.title.as_str())
                    .with_font_size(TITLE_FONT_SIZE),
            );

        draw_axes(&mut svg, &layout);
        draw_ticks(&mut svg, &layout);
        self.draw_bars(&mut svg, &layout);
        self.draw_legend(&mut svg, &layout);

        svg.build()
    }

    fn render_empty(&self) -> String {
        let width = f64::from(self.config.width);
        let height = f64::from(self.config.height);
        SvgBuilder::new(width, height)
            .with_title(self.config.title.as_str())
            .with_background(ChartColor::hex(BACKGROUND))
            .push_raw(format!(
                r#"<text x="50%" y="50%" font-family="{FONT_FAMILY}" font-size="16" text-anchor="middle">{EMPTY_MESSAGE}</text>"#
            ))
            .build()
    }

    fn draw_bars(&self, svg: &mut SvgBuilder, layout: &ChartLayout<'_>) {
        let label_y = layout.height - GROUP_LABEL_OFFSET;
        for group in &layout.groups {
            svg.add(&Text::new(group.label_x, label_y, group.label).with_anchor(TextAnchor::Middle));

            for bar in &group.bars {
                let fill = self.colors.color_for(bar.observation.subject_label());
                svg.add(&Rect {
                    x: bar.x,
                    y: bar.y,
                    width: BAR_WIDTH,
                    height: bar.height,
                    fill: ChartColor::from(fill),
                });
                svg.add(
                    &Text::new(bar.x + BAR_WIDTH / 2.0, bar.y - 5.0, bar.value.to_string())
                        .with_anchor(TextAnchor::Middle),
                );
            }
        }
    }

    /// Legend swatches use exact color-map entries only; subjects without
    /// one are drawn gray rather than with their hash color.
    fn draw_legend(&self, svg: &mut SvgBuilder, layout: &ChartLayout<'_>) {
        for row in &layout.legend {
            let fill = self.colors.get(row.subject).unwrap_or(LEGEND_FALLBACK);
            svg.add(&Rect {
                x: row.x,
                y: row.y,
                width: LEGEND_SWATCH,
                height: LEGEND_SWATCH,
                fill: ChartColor::hex(fill),
            });
            svg.add(&Text::new(row.x + 20.0, row.y + 12.0, row.subject));
        }
    }

    /// Render and write the document to `path`, replacing any existing file.
    /// Returns `false` if the write failed.
    pub fn render_to_file(&mut self, path: impl AsRef<Path>) -> bool {
        match self.try_render_to_file(path.as_ref()) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("could not save chart: {err}");
                false
            }
        }
    }

    /// Like [`Self::render_to_file`] but reports why the write failed.
    ///
    /// # Errors
    /// Returns `SvgChartsError::FileWrite` if the file cannot be written.
    pub fn try_render_to_file(&mut self, path: &Path) -> Result<()> {
        let svg = self.render();
        fs::write(path, svg).map_err(|source| SvgChartsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn draw_axes(svg: &mut SvgBuilder, layout: &ChartLayout<'_>) {
    let baseline = layout.baseline_y();
    svg.add(&Axis::horizontal(
        MARGIN_LEFT,
        baseline,
        layout.plot_right() - MARGIN_LEFT,
    ));
    svg.add(&Axis::vertical(MARGIN_LEFT, MARGIN_TOP, baseline - MARGIN_TOP));
}

fn draw_ticks(svg: &mut SvgBuilder, layout: &ChartLayout<'_>) {
    for tick in &layout.ticks {
        svg.add(
            &Line::new(
                MARGIN_LEFT - TICK_LENGTH,
                tick.y,
                MARGIN_LEFT,
                tick.y,
                ChartColor::hex(AXIS_STROKE),
            )
            .with_stroke_width(1.0),
        );
        svg.add(
            &Line::new(
                MARGIN_LEFT,
                tick.y,
                layout.plot_right(),
                tick.y,
                ChartColor::hex(GRID_STROKE),
            )
            .with_dash_array("2,2"),
        );
        svg.add(
            &Text::new(MARGIN_LEFT - 10.0, tick.y + 5.0, tick.value.to_string())
                .with_anchor(TextAnchor::End),
        );
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
