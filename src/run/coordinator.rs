use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::info;

use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{RateScheduler, SendContext};
use crate::pool::RequestPool;
use crate::recorder::{LatencyRecorder, Method};
use crate::shutdown::{InterruptKind, InterruptReceiver, ShutdownSender};
use crate::shutdown_handlers::{shutdown_channel, wait_for_interrupt};

use super::config::RunConfig;
use super::state::InflightTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running,
    StopRequested,
    Drained,
}

impl RunPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Running => "running",
            RunPhase::StopRequested => "stop requested",
            RunPhase::Drained => "drained",
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    DurationElapsed,
    Interrupted(InterruptKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub stop_reason: StopReason,
    pub get_ticks: u64,
    pub post_ticks: u64,
}

/// Drives one timed run: schedulers up, wait for the deadline or an
/// interrupt, stop the schedulers, then drain every send still in flight.
pub struct RunCoordinator {
    config: RunConfig,
    context: SendContext,
    tracker: Arc<InflightTracker>,
    phase: RunPhase,
}

impl RunCoordinator {
    #[must_use]
    pub fn new(
        config: RunConfig,
        client: Client,
        pool: Arc<RequestPool>,
        recorder: Arc<dyn LatencyRecorder>,
    ) -> Self {
        let context = SendContext::new(client, pool, config.base_url().clone(), recorder);
        Self {
            config,
            context,
            tracker: Arc::new(InflightTracker::new()),
            phase: RunPhase::Idle,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> RunPhase {
        self.phase
    }

    #[must_use]
    pub fn tracker(&self) -> &Arc<InflightTracker> {
        &self.tracker
    }

    /// Runs to completion. `interrupts` is the external cancellation input;
    /// a receiver whose senders are all gone never interrupts.
    ///
    /// The drain has no timeout. A send that never completes keeps this
    /// future pending.
    ///
    /// # Errors
    ///
    /// Returns an error when called more than once or when a scheduler task
    /// panics.
    pub async fn run(&mut self, interrupts: InterruptReceiver) -> AppResult<RunReport> {
        if self.phase != RunPhase::Idle {
            return Err(AppError::validation(ValidationError::RunAlreadyStarted {
                phase: self.phase.as_str(),
            }));
        }

        let (stop_tx, _) = shutdown_channel();
        self.phase = RunPhase::Running;
        let get_scheduler = self.start_scheduler(Method::Get, &stop_tx);
        let post_scheduler = self.start_scheduler(Method::Post, &stop_tx);

        let stop_reason = tokio::select! {
            () = sleep(self.config.duration()) => StopReason::DurationElapsed,
            kind = wait_for_interrupt(interrupts) => StopReason::Interrupted(kind),
        };
        match stop_reason {
            StopReason::DurationElapsed => info!("run duration elapsed, stopping"),
            StopReason::Interrupted(kind) => info!("caught {}, stopping", kind),
        }

        self.phase = RunPhase::StopRequested;
        // No receivers means no scheduler was started.
        drop(stop_tx.send(()));
        info!("sent stop signals, waiting");

        let get_ticks = join_scheduler(get_scheduler).await?;
        let post_ticks = join_scheduler(post_scheduler).await?;
        self.tracker.wait_idle().await;
        self.phase = RunPhase::Drained;
        info!("all calls finished");

        Ok(RunReport {
            stop_reason,
            get_ticks,
            post_ticks,
        })
    }

    fn start_scheduler(
        &self,
        method: Method,
        stop_tx: &ShutdownSender,
    ) -> Option<JoinHandle<u64>> {
        let rate = match method {
            Method::Get => self.config.get_rate(),
            Method::Post => self.config.post_rate(),
        };
        let handle = RateScheduler::new(method, rate).spawn(
            self.context.clone(),
            Arc::clone(&self.tracker),
            stop_tx.subscribe(),
        );
        if handle.is_some() {
            info!("{} scheduler started at {}", method, rate);
        }
        handle
    }
}

async fn join_scheduler(handle: Option<JoinHandle<u64>>) -> AppResult<u64> {
    match handle {
        Some(handle) => Ok(handle.await?),
        None => Ok(0),
    }
}
