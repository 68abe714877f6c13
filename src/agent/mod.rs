//! Agent construction and runtime boundary.
//!
//! # Data Flow
//! ```text
//! Resolved Settings
//!     → options.rs (required-value checks, data dir resolution)
//!     → AgentOptions (named, validated fields)
//!     → runtime.rs (Agent::new — token initialization)
//!     → Agent::run (blocks until shutdown fires)
//! ```
//!
//! # Design Decisions
//! - Options are an explicit struct, assembled once, consumed by construction
//! - Check order is fixed: server, remote key, name, data dir, token
//! - The wire protocol behind `run` is owned by the agent runtime, not here

pub mod options;
pub mod runtime;

pub use options::AgentOptions;
pub use runtime::{Agent, AgentError};
