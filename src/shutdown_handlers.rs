use tokio::sync::broadcast;

use crate::shutdown::{
    InterruptKind, InterruptReceiver, InterruptSender, ShutdownReceiver, ShutdownSender,
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Broadcast channel size for stop notifications (single signal fan-out).
const SHUTDOWN_CHANNEL_CAPACITY: usize = 1;
/// A second interrupt while stopping is allowed to queue behind the first.
const INTERRUPT_CHANNEL_CAPACITY: usize = 2;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    broadcast::channel::<()>(SHUTDOWN_CHANNEL_CAPACITY)
}

#[must_use]
pub fn interrupt_channel() -> (InterruptSender, InterruptReceiver) {
    broadcast::channel::<InterruptKind>(INTERRUPT_CHANNEL_CAPACITY)
}

/// Waits for the next interrupt. A closed channel never resolves, so a
/// coordinator without a signal source simply runs to its deadline.
pub async fn wait_for_interrupt(mut interrupts: InterruptReceiver) -> InterruptKind {
    loop {
        match interrupts.recv().await {
            Ok(kind) => return kind,
            Err(broadcast::error::RecvError::Lagged(_)) => {}
            Err(broadcast::error::RecvError::Closed) => std::future::pending::<()>().await,
        }
    }
}

/// Forwards SIGINT (and SIGTERM on Unix) to `interrupt_tx` until `done_tx`
/// fires.
pub fn setup_signal_shutdown_handler(
    interrupt_tx: &InterruptSender,
    done_tx: &ShutdownSender,
) -> tokio::task::JoinHandle<()> {
    let interrupt_tx = interrupt_tx.clone();
    let mut done_rx = done_tx.subscribe();
    tokio::spawn(async move {
        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                tracing::warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                _ = done_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    drop(interrupt_tx.send(InterruptKind::Interrupt));
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    drop(interrupt_tx.send(InterruptKind::Terminate));
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = done_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    drop(interrupt_tx.send(InterruptKind::Interrupt));
                }
            }
        }
    })
}
