use super::*;

#[test]
fn duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("7", Duration::from_secs(7)),
        ("7s", Duration::from_secs(7)),
        ("3m", Duration::from_secs(180)),
        ("2h", Duration::from_secs(7200)),
        (" 0 ", Duration::ZERO),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_text(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "'{}' parsed as {:?}, expected {:?}",
                input, parsed, expected
            )));
        }
    }
    Ok(())
}

#[test]
fn duration_rejects_garbage() -> AppResult<()> {
    for input in ["", "s10", "10d", "-5s"] {
        if parse_duration_text(input).is_ok() {
            return Err(AppError::validation(format!("Expected '{}' to fail", input)));
        }
    }
    if !matches!(
        parse_duration_text("18446744073709551615h"),
        Err(crate::error::ValidationError::DurationOverflow)
    ) {
        return Err(AppError::validation("Expected overflow"));
    }
    Ok(())
}

#[test]
fn bool_env_values() -> AppResult<()> {
    for value in ["1", "true", "YES", "on"] {
        if !parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected '{}' to be true", value)));
        }
    }
    for value in ["0", "false", "No", "off"] {
        if parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected '{}' to be false", value)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected 'maybe' to fail"));
    }
    Ok(())
}
