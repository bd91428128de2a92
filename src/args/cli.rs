use clap::Parser;
use std::time::Duration;

use crate::run::Rate;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_rate_arg, parse_timeout_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Load generator for OCSP responders - steady GET and POST request rates against one responder, with every request's latency written as JSON lines."
)]
pub struct LoadGenArgs {
    /// OCSP responder base URL. GET requests append the base64 request to it.
    #[arg(long = "base-url", short = 'u')]
    pub base_url: Option<String>,

    /// GET requests per second (fractions allowed, 0 disables GET)
    #[arg(long = "get-rate", default_value = "0", value_parser = parse_rate_arg)]
    pub get_rate: Rate,

    /// POST requests per second (fractions allowed, 0 disables POST)
    #[arg(long = "post-rate", default_value = "0", value_parser = parse_rate_arg)]
    pub post_rate: Rate,

    /// Duration of the run (supports ms/s/m/h; bare numbers are seconds)
    #[arg(
        long = "duration",
        short = 't',
        default_value = "30s",
        value_parser = parse_duration_arg
    )]
    pub duration: Duration,

    /// Issuer certificate (PEM or DER) the requested serials were issued by
    #[arg(long)]
    pub issuer: Option<String>,

    /// File with one hex serial number per line
    #[arg(long)]
    pub serials: Option<String>,

    /// Output file for per-request latency lines (JSON, one object per line)
    #[arg(long = "latency-path")]
    pub latency_path: Option<String>,

    /// Per-request timeout (supports ms/s/m/h). Unset means no timeout.
    #[arg(long = "request-timeout", value_parser = parse_timeout_arg)]
    pub request_timeout: Option<Duration>,

    /// Connection timeout (supports ms/s/m/h). Unset means no timeout.
    #[arg(long = "connect-timeout", value_parser = parse_timeout_arg)]
    pub connect_timeout: Option<Duration>,

    /// Disable the default User-Agent header (ocsp-loadgen/<version>)
    #[arg(long = "no-ua")]
    pub no_ua: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by OCSP_LOADGEN_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./ocsp-loadgen.toml or ./ocsp-loadgen.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
