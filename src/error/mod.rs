mod app;
mod config;
mod ocsp;
mod pool;
mod recorder;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use ocsp::OcspError;
pub use pool::PoolError;
pub use recorder::RecorderError;
pub use validation::ValidationError;
