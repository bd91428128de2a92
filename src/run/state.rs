use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::Notify;

/// Count of spawned-but-unfinished sends, with a wait-until-zero.
#[derive(Debug, Default)]
pub struct InflightTracker {
    outstanding: AtomicU64,
    idle: Notify,
}

impl InflightTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one outstanding send. The count drops again when the guard
    /// is dropped, whichever way the send ends.
    #[must_use]
    pub fn acquire(self: &Arc<Self>) -> InflightGuard {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        InflightGuard {
            tracker: Arc::clone(self),
        }
    }

    #[must_use]
    pub fn outstanding(&self) -> u64 {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Resolves once no send is outstanding. Returns immediately when the
    /// count is already zero.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }

    fn release(&self) {
        loop {
            let current = self.outstanding.load(Ordering::Acquire);
            let Some(next) = current.checked_sub(1) else {
                break;
            };
            if self
                .outstanding
                .compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                if next == 0 {
                    self.idle.notify_waiters();
                }
                break;
            }
        }
    }
}

#[derive(Debug)]
pub struct InflightGuard {
    tracker: Arc<InflightTracker>,
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        self.tracker.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use std::time::Duration;

    #[tokio::test]
    async fn wait_idle_returns_immediately_when_nothing_is_outstanding() -> AppResult<()> {
        let tracker = Arc::new(InflightTracker::new());
        tokio::time::timeout(Duration::from_millis(100), tracker.wait_idle())
            .await
            .map_err(|_elapsed| AppError::validation("idle tracker should not block"))?;
        Ok(())
    }

    #[tokio::test]
    async fn guards_count_up_and_down() -> AppResult<()> {
        let tracker = Arc::new(InflightTracker::new());
        let first = tracker.acquire();
        let second = tracker.acquire();
        if tracker.outstanding() != 2 {
            return Err(AppError::validation("expected two outstanding"));
        }
        drop(first);
        if tracker.outstanding() != 1 {
            return Err(AppError::validation("expected one outstanding"));
        }
        drop(second);
        if tracker.outstanding() != 0 {
            return Err(AppError::validation("expected zero outstanding"));
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn wait_idle_blocks_until_last_guard_drops() -> AppResult<()> {
        let tracker = Arc::new(InflightTracker::new());
        let guards: Vec<InflightGuard> = (0..5).map(|_| tracker.acquire()).collect();

        let waiter = {
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move { tracker.wait_idle().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        if waiter.is_finished() {
            return Err(AppError::validation("waiter finished while sends were outstanding"));
        }

        for guard in guards {
            tokio::time::sleep(Duration::from_millis(5)).await;
            drop(guard);
        }
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .map_err(|_elapsed| AppError::validation("waiter did not wake after drain"))??;
        if tracker.outstanding() != 0 {
            return Err(AppError::validation("counter should end at zero"));
        }
        Ok(())
    }

    #[tokio::test]
    async fn guard_released_when_task_panics() -> AppResult<()> {
        let tracker = Arc::new(InflightTracker::new());
        let guard = tracker.acquire();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            std::panic::panic_any("send blew up");
        });
        if handle.await.is_ok() {
            return Err(AppError::validation("task should have panicked"));
        }
        if tracker.outstanding() != 0 {
            return Err(AppError::validation("panicking task must still release"));
        }
        Ok(())
    }
}
