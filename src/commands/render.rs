use crate::EXIT_SUCCESS;
use crate::chart::BarChart;
use crate::cli::{Cli, RenderArgs};
use crate::config::ChartConfig;
use crate::error::Result;

use super::context::{build_chart, prepare, report_error};

/// Entry point for `svg-charts render`.
#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e),
    }
}

fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<i32> {
    let (data, file) = prepare(&args.dataset, cli)?;
    let mut chart = build_chart(data, ChartConfig::default(), file.as_ref(), &args.dataset.colors);
    apply_overrides(&mut chart, args);

    match args.output {
        Some(ref path) => {
            chart.try_render_to_file(path)?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", chart.render()),
    }
    Ok(EXIT_SUCCESS)
}

/// Command-line title and dimensions beat the chart file.
fn apply_overrides(chart: &mut BarChart, args: &RenderArgs) {
    if args.width.is_some() || args.height.is_some() {
        let width = args.width.unwrap_or_else(|| chart.width());
        let height = args.height.unwrap_or_else(|| chart.height());
        chart.set_dimensions(width, height);
    }
    if let Some(ref title) = args.title {
        chart.set_title(title.clone());
    }
}
