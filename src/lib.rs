//! Outpost Agent Library

pub mod agent;
pub mod cli;
pub mod config;
pub mod lifecycle;

pub use agent::{Agent, AgentOptions};
pub use cli::Cli;
pub use config::Settings;
pub use lifecycle::Shutdown;
