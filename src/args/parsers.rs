use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};
use crate::run::Rate;

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

pub(super) fn parse_rate_arg(s: &str) -> AppResult<Rate> {
    s.parse::<Rate>().map_err(AppError::from)
}

/// Run duration. Zero is accepted and stops the run right after start.
pub(super) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration_text(s).map_err(AppError::from)
}

pub(super) fn parse_timeout_arg(s: &str) -> AppResult<Duration> {
    let duration = parse_duration_text(s)?;
    if duration.is_zero() {
        return Err(AppError::validation(ValidationError::TimeoutZero {
            flag: "timeout",
        }));
    }
    Ok(duration)
}

/// Parses `<digits>[ms|s|m|h]`; a missing unit means seconds.
pub(crate) fn parse_duration_text(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 =
        num_part
            .parse()
            .map_err(|err| ValidationError::InvalidDurationNumber {
                value: value.to_owned(),
                source: err,
            })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    match unit {
        "ms" => Ok(Duration::from_millis(number)),
        "s" => Ok(Duration::from_secs(number)),
        "m" => number
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or(ValidationError::DurationOverflow),
        "h" => number
            .checked_mul(60)
            .and_then(|minutes| minutes.checked_mul(60))
            .map(Duration::from_secs)
            .ok_or(ValidationError::DurationOverflow),
        _ => Err(ValidationError::InvalidDurationUnit {
            unit: unit.to_owned(),
        }),
    }
}
