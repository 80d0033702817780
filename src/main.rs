use clap::Parser;

use svg_charts::cli::{Cli, Commands};
use svg_charts::commands::{run_colors, run_render};
use svg_charts::logging::{init_logging, level_for};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(level_for(cli.verbose, cli.quiet)) {
        eprintln!("Warning: {e}");
    }

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Colors(args) => run_colors(args, &cli),
    };

    std::process::exit(exit_code);
}
