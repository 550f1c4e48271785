use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, SweepArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments that were not set explicitly.
///
/// # Errors
///
/// Returns an error when a config value is out of range or malformed.
pub fn apply_config(
    args: &mut SweepArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "max_level")
        && let Some(max) = config.max
    {
        args.max_level = ensure_positive_usize(max, "max")?;
    }

    if !is_cli(matches, "delay")
        && let Some(delay) = config.delay.as_ref()
    {
        args.delay = delay.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "delay",
                source: err,
            })
        })?;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}
