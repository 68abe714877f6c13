//! Shutdown coordination for the agent.

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// Wraps a watch channel holding a single stop flag with exactly one
/// transition: not cancelled → cancelled. The signal listener is the sole
/// writer; the agent's run call observes the flag cooperatively.
pub struct Shutdown {
    /// Watch channel sender holding the stop flag.
    tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator, not yet triggered.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownReceiver {
        ShutdownReceiver {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal.
    ///
    /// Returns `true` when this call performed the transition. Triggering
    /// an already-triggered coordinator is a safe no-op.
    pub fn trigger(&self) -> bool {
        !self.tx.send_replace(true)
    }

    /// Whether shutdown has been triggered.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of the shutdown signal.
pub struct ShutdownReceiver {
    rx: watch::Receiver<bool>,
}

impl ShutdownReceiver {
    /// Wait until shutdown is triggered.
    ///
    /// Resolves immediately when already triggered, and also when the
    /// coordinator was dropped without ever triggering.
    pub async fn cancelled(&mut self) {
        let _ = self.rx.wait_for(|stopped| *stopped).await;
    }

    /// Whether shutdown has been triggered.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }
}
