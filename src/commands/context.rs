use std::io;
use std::path::Path;

use crate::chart::{BarChart, Dataset};
use crate::cli::{Cli, DatasetArgs};
use crate::config::{ChartConfig, ChartFile, ConfigLoader, FileConfigLoader};
use crate::error::{Result, SvgChartsError};
use crate::{EXIT_INPUT_ERROR, EXIT_WRITE_FAILED};

/// Read a dataset from a JSON file, or from stdin when the path is `-`.
///
/// # Errors
/// Returns an error if the input cannot be read or is not a JSON array.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let data = if path == Path::new("-") {
        Dataset::from_reader(io::stdin().lock())?
    } else {
        Dataset::from_json_file(path)?
    };
    log::info!("loaded {} observations", data.len());
    Ok(data)
}

/// Resolve the chart file: an explicit `--config` path always loads;
/// otherwise `.svg-charts.toml` is discovered unless `--no-config` is set.
///
/// # Errors
/// Returns an error if a chart file exists but is invalid.
pub fn load_chart_file(
    loader: &impl ConfigLoader,
    explicit: Option<&Path>,
    no_config: bool,
) -> Result<Option<ChartFile>> {
    match explicit {
        Some(path) => loader.load_from_path(path).map(Some),
        None if no_config => Ok(None),
        None => loader.load(),
    }
}

/// Assemble a chart from its dataset, an optional chart file and the
/// command-line color overrides. Later sources win.
#[must_use]
pub fn build_chart(
    data: Dataset,
    mut config: ChartConfig,
    file: Option<&ChartFile>,
    color_overrides: &[(String, String)],
) -> BarChart {
    if let Some(file) = file {
        file.apply_to(&mut config);
    }
    let mut chart = BarChart::with_config(data, config);
    if let Some(file) = file {
        chart.set_colors(file.colors.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    chart.set_colors(color_overrides.iter().cloned());
    chart
}

/// Load everything a command needs to build its chart.
///
/// # Errors
/// Returns an error if the dataset or chart file cannot be loaded.
pub fn prepare(args: &DatasetArgs, cli: &Cli) -> Result<(Dataset, Option<ChartFile>)> {
    let file = load_chart_file(&FileConfigLoader::new(), args.config.as_deref(), cli.no_config)?;
    let data = load_dataset(&args.input)?;
    Ok((data, file))
}

/// Report an error on stderr and map it to an exit code.
#[must_use]
pub fn report_error(err: &SvgChartsError) -> i32 {
    eprintln!("Error: {err}");
    if let Some(source) = std::error::Error::source(err) {
        eprintln!("  Caused by: {source}");
    }
    match err {
        SvgChartsError::FileWrite { .. } => EXIT_WRITE_FAILED,
        _ => EXIT_INPUT_ERROR,
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
