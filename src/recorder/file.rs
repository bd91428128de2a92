use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
    sync::mpsc,
    task::JoinHandle,
};
use tracing::warn;

use crate::error::{AppError, AppResult, RecorderError};

use super::{LatencyRecorder, LatencySample, Method, Outcome, RecordSummary};

const LOG_BUFFER_SIZE: usize = 64 * 1024;

/// One JSON line in the latency file.
#[derive(Serialize)]
struct LatencyLine {
    action: Method,
    sent: DateTime<Utc>,
    finished: DateTime<Utc>,
    took: i64,
    #[serde(rename = "type")]
    kind: Outcome,
}

impl From<&LatencySample> for LatencyLine {
    fn from(sample: &LatencySample) -> Self {
        Self {
            action: sample.method,
            sent: sample.started,
            finished: sample.finished,
            took: sample.took_nanos(),
            kind: sample.outcome,
        }
    }
}

/// Recorder handle that forwards samples to a single file writer task.
///
/// Clones share the writer. The file is complete once every clone has been
/// dropped and [`LatencyWriter::finish`] has returned.
#[derive(Debug, Clone)]
pub struct LatencyFile {
    tx: mpsc::UnboundedSender<LatencySample>,
}

/// The task that owns the latency file.
#[derive(Debug)]
pub struct LatencyWriter {
    path: PathBuf,
    handle: JoinHandle<Result<RecordSummary, RecorderError>>,
}

impl LatencyFile {
    /// Creates (or truncates) the file at `path` and starts the writer task.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created.
    pub async fn create(path: &Path) -> Result<(Self, LatencyWriter), RecorderError> {
        let file = File::create(path).await.map_err(|err| RecorderError::Open {
            path: path.to_path_buf(),
            source: err,
        })?;
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(write_samples(file, rx));
        Ok((
            Self { tx },
            LatencyWriter {
                path: path.to_path_buf(),
                handle,
            },
        ))
    }
}

impl LatencyRecorder for LatencyFile {
    fn record(&self, sample: LatencySample) {
        if self.tx.send(sample).is_err() {
            warn!("Latency writer has stopped; dropping sample.");
        }
    }
}

impl LatencyWriter {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Waits for the writer to drain and flush.
    ///
    /// Only returns once every [`LatencyFile`] handle has been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when writing failed or the writer task panicked.
    pub async fn finish(self) -> AppResult<RecordSummary> {
        self.handle.await?.map_err(AppError::from)
    }
}

async fn write_samples(
    file: File,
    mut rx: mpsc::UnboundedReceiver<LatencySample>,
) -> Result<RecordSummary, RecorderError> {
    let mut writer = BufWriter::with_capacity(LOG_BUFFER_SIZE, file);
    let mut buffer: Vec<u8> = Vec::with_capacity(LOG_BUFFER_SIZE);
    let mut summary = RecordSummary::default();

    while let Some(sample) = rx.recv().await {
        serde_json::to_writer(&mut buffer, &LatencyLine::from(&sample))
            .map_err(|err| RecorderError::Serialize { source: err })?;
        buffer.push(b'\n');
        summary.add(sample.method, sample.outcome);

        if buffer.len() >= LOG_BUFFER_SIZE {
            writer
                .write_all(&buffer)
                .await
                .map_err(|err| RecorderError::Io {
                    context: "write latency file",
                    source: err,
                })?;
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        writer
            .write_all(&buffer)
            .await
            .map_err(|err| RecorderError::Io {
                context: "write latency file",
                source: err,
            })?;
    }
    writer.flush().await.map_err(|err| RecorderError::Io {
        context: "flush latency file",
        source: err,
    })?;
    Ok(summary)
}
