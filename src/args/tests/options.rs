use super::*;

#[test]
fn parse_args_full_run() -> AppResult<()> {
    let args = parse_test_args([
        "ocsp-loadgen",
        "--base-url",
        "https://ocsp.example.test/",
        "--get-rate",
        "12.5",
        "--post-rate",
        "3",
        "-t",
        "2m",
        "--issuer",
        "issuer.pem",
        "--serials",
        "serials.txt",
        "--latency-path",
        "latency.json",
        "--request-timeout",
        "1500ms",
        "--connect-timeout",
        "2s",
        "--no-ua",
        "-v",
    ])?;

    let checks = [
        (args.get_rate == Rate::new(12.5)?, "Unexpected get_rate"),
        (args.post_rate == Rate::new(3.0)?, "Unexpected post_rate"),
        (
            args.duration == Duration::from_secs(120),
            "Unexpected duration",
        ),
        (
            args.issuer.as_deref() == Some("issuer.pem"),
            "Unexpected issuer",
        ),
        (
            args.serials.as_deref() == Some("serials.txt"),
            "Unexpected serials",
        ),
        (
            args.latency_path.as_deref() == Some("latency.json"),
            "Unexpected latency_path",
        ),
        (
            args.request_timeout == Some(Duration::from_millis(1500)),
            "Unexpected request_timeout",
        ),
        (
            args.connect_timeout == Some(Duration::from_secs(2)),
            "Unexpected connect_timeout",
        ),
        (args.no_ua, "Expected no_ua"),
        (args.verbose, "Expected verbose"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn zero_duration_is_allowed() -> AppResult<()> {
    let args = parse_test_args(["ocsp-loadgen", "-t", "0"])?;
    if !args.duration.is_zero() {
        return Err(AppError::validation("Expected zero duration"));
    }
    Ok(())
}

#[test]
fn zero_timeout_is_rejected() -> AppResult<()> {
    if parse_test_args(["ocsp-loadgen", "--request-timeout", "0s"]).is_ok() {
        return Err(AppError::validation("Expected zero request timeout to fail"));
    }
    if parse_test_args(["ocsp-loadgen", "--connect-timeout", "0ms"]).is_ok() {
        return Err(AppError::validation("Expected zero connect timeout to fail"));
    }
    Ok(())
}

#[test]
fn bad_rates_are_rejected() -> AppResult<()> {
    for value in ["fast", "NaN", "inf", ""] {
        if parse_test_args(["ocsp-loadgen", "--get-rate", value]).is_ok() {
            return Err(AppError::validation(format!("Expected rate '{}' to fail", value)));
        }
    }
    Ok(())
}

#[test]
fn negative_rate_parses_as_disabled() -> AppResult<()> {
    let args = parse_test_args(["ocsp-loadgen", "--post-rate=-1"])?;
    if args.post_rate.is_enabled() {
        return Err(AppError::validation("Negative rate must not be enabled"));
    }
    Ok(())
}
