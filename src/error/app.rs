use thiserror::Error;

use super::{ConfigError, OcspError, PoolError, RecorderError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("TOML error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("OCSP error: {0}")]
    Ocsp(#[from] OcspError),
    #[error("Request pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("Latency recorder error: {0}")]
    Recorder(#[from] RecorderError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn ocsp<E>(error: E) -> Self
    where
        E: Into<OcspError>,
    {
        error.into().into()
    }

    pub fn pool<E>(error: E) -> Self
    where
        E: Into<PoolError>,
    {
        error.into().into()
    }

    pub fn recorder<E>(error: E) -> Self
    where
        E: Into<RecorderError>,
    {
        error.into().into()
    }
}
