use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::recorder::Method;
use crate::run::{InflightTracker, Rate};
use crate::shutdown::ShutdownReceiver;

use super::sender::{SendContext, spawn_send};

/// Fires one detached send per tick at a fixed rate until told to stop.
///
/// The rate is captured when the scheduler is built and never changes
/// for the life of the run.
#[derive(Debug, Clone, Copy)]
pub struct RateScheduler {
    method: Method,
    rate: Rate,
}

impl RateScheduler {
    #[must_use]
    pub const fn new(method: Method, rate: Rate) -> Self {
        Self { method, rate }
    }

    /// Starts the tick loop. Returns `None` for a disabled rate; otherwise the
    /// handle resolves to the number of ticks fired once `stop_rx` fires.
    ///
    /// The first tick lands one period after start. A pending stop always
    /// wins over a tick that is due at the same moment.
    #[must_use]
    pub fn spawn(
        self,
        ctx: SendContext,
        tracker: Arc<InflightTracker>,
        mut stop_rx: ShutdownReceiver,
    ) -> Option<JoinHandle<u64>> {
        let period = self.rate.interval()?;
        let method = self.method;
        Some(tokio::spawn(async move {
            let Some(first) = Instant::now().checked_add(period) else {
                // Period beyond the clock's range: nothing is ever due.
                drop(stop_rx.recv().await);
                return 0;
            };
            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut ticks: u64 = 0;
            loop {
                tokio::select! {
                    biased;
                    _ = stop_rx.recv() => break,
                    _ = ticker.tick() => {
                        drop(spawn_send(method, &ctx, &tracker));
                        ticks = ticks.saturating_add(1);
                    }
                }
            }
            debug!("{} scheduler stopped after {} ticks", method, ticks);
            ticks
        }))
    }
}
