//! Agent runtime boundary.
//!
//! Construction applies the validated options and initializes the agent
//! token; `run` owns the primary flow until shutdown. What the agent speaks
//! to the server once connected is the runtime's own concern.

use std::fs;
use std::io;

use thiserror::Error;
use uuid::Uuid;

use crate::agent::options::AgentOptions;
use crate::lifecycle::shutdown::ShutdownReceiver;

/// Error type for agent construction and runtime failures.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Agent token could not be loaded or created.
    #[error("could not initialize agent token: {0}")]
    Token(#[from] io::Error),
}

/// A configured agent instance.
#[derive(Debug)]
pub struct Agent {
    options: AgentOptions,
    token: String,
}

impl Agent {
    /// Construct an agent from validated options.
    ///
    /// Loads the token persisted in the data directory, creating one on
    /// first start.
    pub fn new(options: AgentOptions) -> Result<Self, AgentError> {
        let token = load_or_create_token(&options)?;
        Ok(Self { options, token })
    }

    /// Token identifying this agent to the server across restarts.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Options the agent was constructed with.
    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    /// Run the agent until the shutdown signal fires or its own lifecycle
    /// ends.
    ///
    /// Cancellation is cooperative: this call observes the signal at its
    /// own suspension points and returns, it is never force-terminated.
    pub async fn run(self, mut shutdown: ShutdownReceiver) -> Result<(), AgentError> {
        tracing::info!(
            server = %self.options.server,
            name = %self.options.name,
            data_dir = %self.options.data_dir.display(),
            "agent running"
        );

        shutdown.cancelled().await;

        tracing::info!("shutdown requested, stopping agent");
        Ok(())
    }
}

/// Read the persisted token, or generate and persist a fresh one.
fn load_or_create_token(options: &AgentOptions) -> Result<String, io::Error> {
    let path = options.token_path();

    match fs::read_to_string(&path) {
        Ok(token) => {
            let token = token.trim().to_string();
            if !token.is_empty() {
                tracing::debug!(path = %path.display(), "agent token loaded");
                return Ok(token);
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    let token = Uuid::new_v4().to_string();
    fs::write(&path, &token)?;
    tracing::info!(path = %path.display(), "new agent token created");
    Ok(token)
}
