use super::*;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["ocsp-loadgen", "-u", "http://localhost:4002"])?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);

    let checks = [
        (
            args.base_url.as_deref() == Some("http://localhost:4002"),
            "Unexpected base_url",
        ),
        (args.get_rate == Rate::DISABLED, "Expected GET disabled"),
        (args.post_rate == Rate::DISABLED, "Expected POST disabled"),
        (
            args.duration == Duration::from_secs(30),
            "Unexpected duration",
        ),
        (args.issuer.is_none(), "Expected issuer to be None"),
        (args.serials.is_none(), "Expected serials to be None"),
        (args.latency_path.is_none(), "Expected latency_path to be None"),
        (
            args.request_timeout.is_none(),
            "Expected request_timeout to be None",
        ),
        (
            args.connect_timeout.is_none(),
            "Expected connect_timeout to be None",
        ),
        (!args.no_ua, "Expected no_ua to be false"),
        (!args.verbose, "Expected verbose to be false"),
        (args.config.is_none(), "Expected config to be None"),
        (args.no_color == expected_no_color, "Unexpected no_color"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}
