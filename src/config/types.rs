use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_text;
use crate::error::ValidationError;

/// Values accepted from `ocsp-loadgen.toml` / `ocsp-loadgen.json`. Field names
/// follow the long CLI flags with `_` instead of `-`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "url")]
    pub base_url: Option<String>,
    pub get_rate: Option<f64>,
    pub post_rate: Option<f64>,
    pub duration: Option<DurationValue>,
    pub issuer: Option<String>,
    pub serials: Option<String>,
    pub latency_path: Option<String>,
    pub request_timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub no_ua: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either a bare number of seconds or a suffixed string such as `"750ms"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_text(text),
        }
    }
}
