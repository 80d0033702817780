//! Grouped bar charts rendered as standalone SVG documents, with no graphics
//! library involved.
//!
//! ```
//! use svg_charts::{BarChart, Observation};
//!
//! let mut chart = BarChart::new(
//!     vec![
//!         Observation::new("Product A", "January", 25),
//!         Observation::new("Product B", "January", 15),
//!         Observation::new("Product A", "February", 30),
//!         Observation::new("Product B", "February", 22),
//!     ],
//!     "Monthly Sales",
//! );
//! let svg = chart.render();
//! assert!(svg.starts_with("<?xml"));
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use chart::{BarChart, ColorMap, Count, Dataset, Observation};
pub use config::ChartConfig;
pub use error::{Result, SvgChartsError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_WRITE_FAILED: i32 = 1;
pub const EXIT_INPUT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
