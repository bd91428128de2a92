use std::fmt;

use tokio::sync::broadcast;

/// Fan-out stop notification for the rate schedulers and the signal listener.
pub type ShutdownSender = broadcast::Sender<()>;
pub type ShutdownReceiver = broadcast::Receiver<()>;

/// External interrupts delivered to the run coordinator.
pub type InterruptSender = broadcast::Sender<InterruptKind>;
pub type InterruptReceiver = broadcast::Receiver<InterruptKind>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptKind {
    /// Ctrl-C / SIGINT.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl InterruptKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            InterruptKind::Interrupt => "SIGINT",
            InterruptKind::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for InterruptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
