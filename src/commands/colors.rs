use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::chart::BarChart;
use crate::cli::{Cli, ColorsArgs};
use crate::config::ChartConfig;
use crate::error::Result;

use super::context::{build_chart, prepare, report_error};

/// Entry point for `svg-charts colors`.
#[must_use]
pub fn run_colors(args: &ColorsArgs, cli: &Cli) -> i32 {
    match run_colors_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e),
    }
}

fn run_colors_impl(args: &ColorsArgs, cli: &Cli) -> Result<i32> {
    let (data, file) = prepare(&args.dataset, cli)?;
    let chart = build_chart(data, ChartConfig::default(), file.as_ref(), &args.dataset.colors);
    print!("{}", format_colors(&chart));
    Ok(EXIT_SUCCESS)
}

/// One `subject<TAB>color` line per distinct subject, in first-appearance
/// order, resolved the way bars are filled.
#[must_use]
pub fn format_colors(chart: &BarChart) -> String {
    let mut output = String::new();
    for subject in chart.data().distinct_subjects() {
        let _ = writeln!(output, "{subject}\t{}", chart.color_for(subject));
    }
    output
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
