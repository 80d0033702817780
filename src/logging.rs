//! Log backend for the command-line host.
//!
//! The library only talks to the `log` facade; this wires a stderr console
//! appender through log4rs.

use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use crate::error::{Result, SvgChartsError};

/// Map `-v` count and `--quiet` to a level filter.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Call once, before any rendering.
///
/// # Errors
/// Returns `SvgChartsError::Config` if the logger cannot be built or a
/// logger is already installed.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:<5} {t} {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| SvgChartsError::Config(format!("invalid logging config: {e}")))?;

    log4rs::init_config(config)
        .map(|_| ())
        .map_err(|e| SvgChartsError::Config(format!("failed to initialise logging: {e}")))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
