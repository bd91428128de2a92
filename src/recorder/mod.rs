//! Latency samples and the sinks that collect them.
mod file;
mod memory;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use file::{LatencyFile, LatencyWriter};
pub use memory::MemoryRecorder;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Method {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single send ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Outcome {
    #[serde(rename = "good")]
    Good,
    /// The request never produced a response (connect, write or timeout failure).
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "unexpected status")]
    UnexpectedStatus,
    #[serde(rename = "read error")]
    ReadError,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Good => "good",
            Outcome::Error => "error",
            Outcome::UnexpectedStatus => "unexpected status",
            Outcome::ReadError => "read error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatencySample {
    pub method: Method,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub outcome: Outcome,
}

impl LatencySample {
    /// Wall-clock time between start and end, in nanoseconds.
    #[must_use]
    pub fn took_nanos(&self) -> i64 {
        self.finished
            .signed_duration_since(self.started)
            .num_nanoseconds()
            .unwrap_or(i64::MAX)
    }
}

/// Append-only sink shared by every in-flight send.
pub trait LatencyRecorder: Send + Sync {
    fn record(&self, sample: LatencySample);
}

/// Sample counts per method and outcome.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    counts: BTreeMap<(Method, Outcome), u64>,
}

impl RecordSummary {
    pub fn add(&mut self, method: Method, outcome: Outcome) {
        let count = self.counts.entry((method, outcome)).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[must_use]
    pub fn count(&self, method: Method, outcome: Outcome) -> u64 {
        self.counts.get(&(method, outcome)).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn method_total(&self, method: Method) -> u64 {
        self.counts
            .iter()
            .filter(|((sample_method, _), _)| *sample_method == method)
            .fold(0u64, |total, (_, count)| total.saturating_add(*count))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |total, count| total.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Method, Outcome, u64)> + '_ {
        self.counts
            .iter()
            .map(|((method, outcome), count)| (*method, *outcome, *count))
    }
}
