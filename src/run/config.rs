use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::error::ValidationError;

/// Floor for the tick period so absurd rates cannot produce a zero interval.
const MIN_TICK_INTERVAL: Duration = Duration::from_nanos(1);

/// Requests per second for one method. Zero or negative disables the method.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Rate(f64);

impl Rate {
    pub const DISABLED: Self = Self(0.0);

    /// # Errors
    ///
    /// Returns an error for NaN or infinite values.
    pub fn new(per_second: f64) -> Result<Self, ValidationError> {
        if !per_second.is_finite() {
            return Err(ValidationError::InvalidRate {
                value: per_second.to_string(),
            });
        }
        Ok(Self(per_second))
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.0 > 0.0
    }

    /// Time between ticks, or `None` when the rate is disabled.
    #[must_use]
    pub fn interval(self) -> Option<Duration> {
        if !self.is_enabled() {
            return None;
        }
        let interval = Duration::try_from_secs_f64(self.0.recip()).unwrap_or(Duration::MAX);
        Some(interval.max(MIN_TICK_INTERVAL))
    }
}

impl FromStr for Rate {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed: f64 = value
            .trim()
            .parse()
            .ok()
            .ok_or_else(|| ValidationError::InvalidRate {
                value: value.to_owned(),
            })?;
        Self::new(parsed)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}

/// Responder base URL, always ending in `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Arc<str>);

impl BaseUrl {
    /// # Errors
    ///
    /// Returns an error when the value is empty, not an absolute URL, or not
    /// http/https.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingBaseUrl);
        }
        let mut value = raw.to_owned();
        if !value.ends_with('/') {
            value.push('/');
        }
        let parsed = Url::parse(&value).map_err(|err| ValidationError::InvalidBaseUrl {
            url: raw.to_owned(),
            source: err,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::UnsupportedScheme {
                url: raw.to_owned(),
            });
        }
        Ok(Self(value.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base URL with `suffix` appended verbatim.
    #[must_use]
    pub fn join_raw(&self, suffix: &str) -> String {
        let mut url = String::with_capacity(self.0.len().saturating_add(suffix.len()));
        url.push_str(&self.0);
        url.push_str(suffix);
        url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    base_url: BaseUrl,
    get_rate: Rate,
    post_rate: Rate,
    duration: Duration,
}

impl RunConfig {
    #[must_use]
    pub const fn new(base_url: BaseUrl, get_rate: Rate, post_rate: Rate, duration: Duration) -> Self {
        Self {
            base_url,
            get_rate,
            post_rate,
            duration,
        }
    }

    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    #[must_use]
    pub const fn get_rate(&self) -> Rate {
        self.get_rate
    }

    #[must_use]
    pub const fn post_rate(&self) -> Rate {
        self.post_rate
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}
