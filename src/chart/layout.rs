//! Geometry for grouped bar charts.
//!
//! Everything here is pure: given a dataset and canvas size it produces
//! positions, and the renderer turns them into SVG elements.

use std::collections::BTreeSet;

use super::data::{Dataset, Observation, TimeSliceGroup};

pub const MARGIN_LEFT: f64 = 50.0;
pub const MARGIN_RIGHT: f64 = 50.0;
pub const MARGIN_TOP: f64 = 50.0;
pub const MARGIN_BOTTOM: f64 = 50.0;
pub const BAR_WIDTH: f64 = 20.0;
pub const BAR_GAP: f64 = 15.0;
pub const GROUP_GAP: f64 = 40.0;

/// Distance from the y-axis to the first group.
pub const GROUP_OFFSET: f64 = 20.0;
/// Ticks closer than this to the previously drawn tick are dropped.
pub const MIN_TICK_SPACING: f64 = 14.0;
/// Roughly how many labelled steps the y-axis is divided into.
pub const TARGET_TICK_STEPS: f64 = 5.0;

pub const TICK_LENGTH: f64 = 5.0;
pub const LEGEND_INSET: f64 = 150.0;
pub const LEGEND_TOP: f64 = 20.0;
pub const LEGEND_ROW_HEIGHT: f64 = 20.0;
pub const LEGEND_SWATCH: f64 = 15.0;

/// Horizontal space taken by `items` bars placed side by side.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_span(items: usize) -> f64 {
    (items as f64).mul_add(BAR_WIDTH + BAR_GAP, -BAR_GAP)
}

/// Canvas width needed to fit every group at the widest group's span.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn required_width(groups: &[TimeSliceGroup<'_>]) -> u32 {
    let max_items = groups.iter().map(TimeSliceGroup::len).max().unwrap_or(0);
    let total_chart_width = (groups.len() as f64) * (bar_span(max_items) + GROUP_GAP);
    let required = total_chart_width + MARGIN_LEFT + MARGIN_RIGHT;
    required.clamp(0.0, f64::from(u32::MAX)) as u32
}

/// `max(1, ceil(max_count / 5))`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn label_step(max_count: f64) -> u64 {
    ((max_count / TARGET_TICK_STEPS).ceil() as u64).max(1)
}

/// A labelled y-axis tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YTick {
    pub value: u64,
    pub y: f64,
}

/// Y-axis ticks for integer values `0..=max_count`.
///
/// A value is a candidate when it is a multiple of the label step or equals a
/// literal data count. Candidates are walked upward and each one within
/// [`MIN_TICK_SPACING`] of the last drawn tick is skipped, so spacing depends
/// on which values came before it.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn y_ticks(
    max_count: f64,
    literal_counts: impl IntoIterator<Item = u64>,
    baseline_y: f64,
    plot_height: f64,
) -> Vec<YTick> {
    let step = label_step(max_count);
    let top = max_count.floor() as u64;

    // Only multiples of the step and literal counts can qualify, so walk
    // those instead of every integer up to max_count.
    let mut candidates: BTreeSet<u64> = (0..=top / step).map(|k| k * step).collect();
    candidates.extend(
        literal_counts.into_iter().filter(|&c| c <= top),
    );

    let mut ticks = Vec::new();
    let mut last_y: Option<f64> = None;
    for value in candidates {
        let y = baseline_y - (value as f64 / max_count) * plot_height;
        if last_y.is_some_and(|last| (y - last).abs() < MIN_TICK_SPACING) {
            log::trace!("skipping y tick {value}: too close to previous tick");
            continue;
        }
        last_y = Some(y);
        ticks.push(YTick { value, y });
    }
    ticks
}

/// Position of one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot<'a> {
    pub observation: &'a Observation,
    pub x: f64,
    pub y: f64,
    pub height: f64,
    /// Whole-number count, printed as the value label.
    pub value: f64,
}

/// One time-slice group: its centred label and its bars.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSlot<'a> {
    pub label: &'a str,
    pub label_x: f64,
    pub bars: Vec<BarSlot<'a>>,
}

/// Position of one legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow<'a> {
    pub subject: &'a str,
    pub x: f64,
    pub y: f64,
}

/// Fully positioned chart for a fixed canvas size.
#[derive(Debug, Clone)]
pub struct ChartLayout<'a> {
    pub width: f64,
    pub height: f64,
    pub max_count: f64,
    pub plot_height: f64,
    pub ticks: Vec<YTick>,
    pub groups: Vec<GroupSlot<'a>>,
    pub legend: Vec<LegendRow<'a>>,
}

impl<'a> ChartLayout<'a> {
    /// Lay out `data` on a `width` × `height` canvas. The caller is expected
    /// to have widened `width` via [`required_width`] already.
    #[must_use]
    pub fn compute(data: &'a Dataset, groups: Vec<TimeSliceGroup<'a>>, width: u32, height: u32) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);
        let max_count = data.max_count();
        let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline_y = height - MARGIN_BOTTOM;

        let ticks = y_ticks(max_count, data.literal_counts(), baseline_y, plot_height);
        let groups = place_groups(groups, max_count, baseline_y, plot_height);
        let legend = data
            .distinct_subjects()
            .into_iter()
            .zip(0_u32..)
            .map(|(subject, row)| LegendRow {
                subject,
                x: width - LEGEND_INSET,
                y: f64::from(row).mul_add(LEGEND_ROW_HEIGHT, LEGEND_TOP),
            })
            .collect();

        Self {
            width,
            height,
            max_count,
            plot_height,
            ticks,
            groups,
            legend,
        }
    }

    /// Y coordinate of the x-axis.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.height - MARGIN_BOTTOM
    }

    /// X coordinate where the x-axis and gridlines end.
    #[must_use]
    pub fn plot_right(&self) -> f64 {
        self.width - MARGIN_RIGHT
    }
}

fn place_groups<'a>(
    groups: Vec<TimeSliceGroup<'a>>,
    max_count: f64,
    baseline_y: f64,
    plot_height: f64,
) -> Vec<GroupSlot<'a>> {
    let mut cursor = MARGIN_LEFT + GROUP_OFFSET;
    let mut slots = Vec::with_capacity(groups.len());

    for group in groups {
        let span = bar_span(group.len());
        let mut bar_x = cursor;
        let bars = group
            .items
            .into_iter()
            .map(|observation| {
                let value = observation.drawn_count();
                let height = (value / max_count) * plot_height;
                let slot = BarSlot {
                    observation,
                    x: bar_x,
                    y: baseline_y - height,
                    height,
                    value,
                };
                bar_x += BAR_WIDTH + BAR_GAP;
                slot
            })
            .collect();

        slots.push(GroupSlot {
            label: group.label,
            label_x: cursor + span / 2.0,
            bars,
        });
        cursor += span + GROUP_GAP;
    }
    slots
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
