//! Startup orchestration.
//!
//! # Responsibilities
//! - Assemble validated options and construct the agent
//! - Install the signal listener
//! - Hand the primary flow to the agent's blocking run call
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, exit status 1
//! - The signal listener starts only after construction succeeded
//! - Run returning, for any reason, ends the process normally

use thiserror::Error;

use crate::agent::{Agent, AgentError, AgentOptions};
use crate::config::loader::ConfigError;
use crate::config::schema::Settings;
use crate::config::validation::ValidationError;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals;

/// Error type for the startup phase.
///
/// Every variant is terminal: the process either starts fully configured or
/// exits before the signal listener and run call are reached.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Run the agent to completion.
///
/// Consumes the resolved configuration store and owns the cancellation
/// context for the remainder of process life.
pub async fn run(settings: Settings) -> Result<(), StartupError> {
    let options = AgentOptions::from_settings(&settings)?;
    let agent = Agent::new(options)?;

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    signals::spawn_listener(shutdown);

    agent.run(receiver).await?;
    Ok(())
}
