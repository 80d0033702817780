use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::svg::ChartColor;

#[derive(Parser, Debug)]
#[command(name = "svg-charts")]
#[command(author, version, about = "Render grouped bar charts as standalone SVG documents")]
#[command(long_about = "Render grouped bar charts as standalone SVG documents.\n\n\
    Input is a JSON array of {\"subject\", \"timeSlice\", \"count\"} objects.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Failed to write output\n  \
    2 - Input or configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading .svg-charts.toml from the working directory
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a dataset to SVG
    Render(RenderArgs),

    /// Print the color assigned to each subject
    Colors(ColorsArgs),
}

/// Options shared by every command that reads a dataset.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// JSON dataset file (`-` for stdin)
    pub input: PathBuf,

    /// Path to a chart file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Subject color override as SUBJECT=#RRGGBB (repeatable)
    #[arg(long = "color", value_name = "SUBJECT=HEX", value_parser = parse_color_override)]
    pub colors: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Chart title (overrides config)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Canvas width in pixels; may grow to fit the bars
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Write SVG to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ColorsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Parse `SUBJECT=#RRGGBB`. The subject is kept verbatim; only the first
/// `=` separates it from the color.
///
/// # Errors
/// Returns a message if the separator is missing or the color is not hex.
pub fn parse_color_override(value: &str) -> Result<(String, String), String> {
    let (subject, color) = value
        .split_once('=')
        .ok_or_else(|| format!("expected SUBJECT=HEX, got '{value}'"))?;
    if subject.is_empty() {
        return Err("subject must not be empty".to_string());
    }
    let color = color.trim();
    if !ChartColor::is_hex(color) {
        return Err(format!("invalid color '{color}': expected #RGB or #RRGGBB"));
    }
    Ok((subject.to_string(), color.to_string()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
