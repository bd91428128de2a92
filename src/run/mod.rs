//! Run configuration, in-flight accounting and the run coordinator.
mod config;
mod coordinator;
mod state;

pub use config::{BaseUrl, Rate, RunConfig};
pub use coordinator::{RunCoordinator, RunPhase, RunReport, StopReason};
pub use state::{InflightGuard, InflightTracker};
