use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::AppResult;
use crate::http::build_client;
use crate::ocsp::{IssuerCertificate, read_serials};
use crate::pool::RequestPool;
use crate::recorder::{LatencyFile, RecordSummary};
use crate::run::{RunCoordinator, RunReport, StopReason};
use crate::shutdown_handlers::{interrupt_channel, setup_signal_shutdown_handler, shutdown_channel};

use super::types::RunPlan;

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    let issuer = IssuerCertificate::load(&plan.issuer_path)?;
    info!("loaded issuer {}", issuer.subject());
    let serials = read_serials(&plan.serials_path)?;

    let (latency_file, writer) = LatencyFile::create(&plan.latency_path).await?;

    info!("warming up");
    let pool = RequestPool::build(&serials, &issuer)?;
    info!(
        "finished warm up: {} requests from {} serials",
        pool.len(),
        serials.len()
    );

    let client = build_client(&plan.client)?;
    let (interrupt_tx, interrupt_rx) = interrupt_channel();
    let (done_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&interrupt_tx, &done_tx);

    let mut coordinator = RunCoordinator::new(
        plan.run,
        client,
        Arc::new(pool),
        Arc::new(latency_file),
    );
    let result = coordinator.run(interrupt_rx).await;

    drop(done_tx.send(()));
    drop(signal_handle.await);
    // Last recorder handle; the writer finishes once it is gone.
    drop(coordinator);

    let report = result?;
    let written_to = writer.path().to_path_buf();
    let summary = writer.finish().await?;
    log_report(&report, &summary, &written_to);
    Ok(())
}

fn log_report(report: &RunReport, summary: &RecordSummary, latency_path: &Path) {
    match report.stop_reason {
        StopReason::DurationElapsed => info!("run ended after its full duration"),
        StopReason::Interrupted(kind) => info!("run ended early on {}", kind),
    }
    info!(
        "scheduled {} GET and {} POST requests; {} samples written to {}",
        report.get_ticks,
        report.post_ticks,
        summary.total(),
        latency_path.display()
    );
    for (method, outcome, count) in summary.iter() {
        info!("{} {}: {}", method, outcome, count);
    }
}
