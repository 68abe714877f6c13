//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (interactive interrupt) or SIGTERM
//! - Translate the first signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The listener fires once and exits; further signals are not processed
//! - Both signals cause identical cancellation behavior

use crate::lifecycle::shutdown::Shutdown;

/// Wait for an OS termination signal.
///
/// Resolves on SIGINT or SIGTERM, whichever arrives first. When a handler
/// cannot be installed the corresponding arm stays pending so the other one
/// still works.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }
}

/// Spawn the signal listener task.
///
/// The task owns the trigger side of the coordinator, waits for the first
/// termination signal, cancels once, and exits.
pub fn spawn_listener(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("termination signal received, shutting down");
        shutdown.trigger();
    })
}
