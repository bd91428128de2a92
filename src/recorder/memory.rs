use std::sync::{Mutex, MutexGuard};

use super::{LatencyRecorder, LatencySample, RecordSummary};

/// Keeps every sample in memory.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    samples: Mutex<Vec<LatencySample>>,
}

impl MemoryRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(&self) -> Vec<LatencySample> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> RecordSummary {
        let mut summary = RecordSummary::default();
        for sample in self.lock().iter() {
            summary.add(sample.method, sample.outcome);
        }
        summary
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LatencySample>> {
        match self.samples.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl LatencyRecorder for MemoryRecorder {
    fn record(&self, sample: LatencySample) {
        self.lock().push(sample);
    }
}
