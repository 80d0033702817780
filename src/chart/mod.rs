//! Grouped bar chart engine: input model, color assignment, layout and
//! SVG rendering.

mod color;
mod data;
mod layout;
mod renderer;

pub use color::{ColorMap, DEFAULT_PALETTE, hash_color};
pub use data::{Count, Dataset, Observation, TimeSliceGroup, UNKNOWN_TIME_SLICE};
pub use layout::{
    BAR_GAP, BAR_WIDTH, BarSlot, ChartLayout, GROUP_GAP, GroupSlot, LegendRow, MARGIN_BOTTOM,
    MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, YTick, label_step, required_width, y_ticks,
};
pub use renderer::{BarChart, EMPTY_MESSAGE};
