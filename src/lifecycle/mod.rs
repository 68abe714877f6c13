//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolved settings → Assemble options → Construct agent → Run
//!
//! Shutdown (shutdown.rs):
//!     Signal received → trigger() → run call observes cancellation → Exit
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → trigger graceful shutdown, exactly once
//! ```
//!
//! # Design Decisions
//! - Ordered startup: resolve first, construct next, listener and run last
//! - Any startup error is fatal; nothing is retried
//! - Shutdown is cooperative: the run call is never force-terminated

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
