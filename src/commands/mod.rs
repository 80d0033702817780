pub mod colors;
pub mod context;
pub mod render;

pub use colors::{format_colors, run_colors};
pub use context::{build_chart, load_chart_file, load_dataset, prepare, report_error};
pub use render::run_render;
