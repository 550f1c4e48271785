use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_DELAY, DEFAULT_MAX_LEVEL, DEFAULT_URL};
use super::parsers::{parse_bool_env, parse_delay_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "tct",
    version,
    about = "TCP connection timer - find the optimal number of parallel requests for a URL."
)]
pub struct SweepArgs {
    /// URL to fetch on every request
    #[arg(long, short, default_value = DEFAULT_URL)]
    pub url: String,

    /// Maximum number of parallel requests to try
    #[arg(long = "max", short = 'm', default_value = DEFAULT_MAX_LEVEL, value_parser = parse_positive_usize)]
    pub max_level: PositiveUsize,

    /// Delay each request task waits before sending (supports ns/us/ms/s/m/h, 0 disables)
    #[arg(long, short, default_value = DEFAULT_DELAY, value_parser = parse_delay_arg)]
    pub delay: Duration,

    /// Path to a TOML or JSON config file (defaults to ./tct.toml or ./tct.json)
    #[arg(long, short)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by TCT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
