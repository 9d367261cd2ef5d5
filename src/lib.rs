//! IPv4 and IPv6 subnet calculator.
//!
//! The engines in [`processing`] are pure functions over validated
//! [`models`] values; [`output`] renders results and [`config`] holds the
//! options callers pass in.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

pub use config::{CalcOptions, Cli, Command, Ipv6NetworkMode, OutputFormat, UsableRangeMode};
pub use error::{DomainLimitation, ErrorKind, SubnetError};
pub use models::SubnetResult;
pub use processing::calculate;

/// Log target for domain limitations. `log4rs.yml` routes it to the log file
/// only; stderr stays empty for every successful calculation.
pub const LIMITATIONS_TARGET: &str = "subnet_calc::limitations";

/// Logging used when no log4rs file is configured: errors only, to stderr.
/// Stdout is left for results.
pub fn default_log_config() -> Result<log4rs::config::Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Error))?;
    Ok(config)
}

/// Initialise log4rs from `log_config` when one is given, otherwise from
/// [`default_log_config`].
pub fn init_logging(log_config: Option<&str>) -> Result<(), Box<dyn Error>> {
    match log_config {
        Some(path) => {
            log4rs::init_file(path, Default::default())
                .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
            log::debug!("Logging configured from {path}");
        }
        None => {
            log4rs::init_config(default_log_config()?)?;
        }
    }
    Ok(())
}

/// Log every domain limitation attached to a result under [`LIMITATIONS_TARGET`].
pub fn warn_limitations(result: &SubnetResult) {
    for limitation in result.limitations() {
        log::warn!(target: LIMITATIONS_TARGET, "{limitation}");
    }
}
