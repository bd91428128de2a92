use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing responder base URL (set --base-url or provide in config).")]
    MissingBaseUrl,
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Missing issuer certificate path (set --issuer or provide in config).")]
    MissingIssuer,
    #[error("Missing serials file path (set --serials or provide in config).")]
    MissingSerials,
    #[error("Missing latency output path (set --latency-path or provide in config).")]
    MissingLatencyPath,
    #[error("Invalid rate '{value}'. Expected a non-negative number of requests per second.")]
    InvalidRate { value: String },
    #[error("Invalid boolean value '{value}'.")]
    InvalidBoolean { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("{flag} must be greater than zero.")]
    TimeoutZero { flag: &'static str },
    #[error("Run already started (phase {phase}).")]
    RunAlreadyStarted { phase: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
