use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::LoadGenArgs;
use crate::error::{AppError, AppResult, ConfigError};
use crate::run::Rate;

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments. Flags given on the command
/// line always win.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut LoadGenArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "base_url")
        && let Some(url) = config.base_url.clone()
    {
        args.base_url = Some(url);
    }

    if !is_cli(matches, "get_rate")
        && let Some(rate) = config.get_rate
    {
        args.get_rate = ensure_rate(rate, "get_rate")?;
    }

    if !is_cli(matches, "post_rate")
        && let Some(rate) = config.post_rate
    {
        args.post_rate = ensure_rate(rate, "post_rate")?;
    }

    if !is_cli(matches, "duration")
        && let Some(duration) = config.duration.as_ref()
    {
        args.duration = ensure_duration(duration, "duration")?;
    }

    if !is_cli(matches, "issuer")
        && let Some(path) = config.issuer.clone()
    {
        args.issuer = Some(path);
    }

    if !is_cli(matches, "serials")
        && let Some(path) = config.serials.clone()
    {
        args.serials = Some(path);
    }

    if !is_cli(matches, "latency_path")
        && let Some(path) = config.latency_path.clone()
    {
        args.latency_path = Some(path);
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.request_timeout.as_ref()
    {
        args.request_timeout = Some(ensure_timeout(timeout, "request_timeout")?);
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(ensure_timeout(timeout, "connect_timeout")?);
    }

    if !is_cli(matches, "no_ua")
        && let Some(no_ua) = config.no_ua
    {
        args.no_ua = no_ua;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_rate(value: f64, field: &'static str) -> AppResult<Rate> {
    Rate::new(value).map_err(|err| invalid_field(field, err.to_string()))
}

fn ensure_duration(value: &DurationValue, field: &'static str) -> AppResult<Duration> {
    value
        .to_duration()
        .map_err(|err| invalid_field(field, err.to_string()))
}

fn ensure_timeout(value: &DurationValue, field: &'static str) -> AppResult<Duration> {
    let duration = ensure_duration(value, field)?;
    if duration.is_zero() {
        return Err(invalid_field(field, "must be greater than zero".to_owned()));
    }
    Ok(duration)
}

fn invalid_field(field: &'static str, message: String) -> AppError {
    AppError::config(ConfigError::InvalidField { field, message })
}
