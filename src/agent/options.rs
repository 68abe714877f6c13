//! Assembly of validated agent options.

use std::path::PathBuf;

use crate::config::schema::Settings;
use crate::config::validation::{require, resolve_data_dir, ValidationError};

/// Validated configuration applied to the agent at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOptions {
    /// Address of the outpost server.
    pub server: String,

    /// Remote key identifying this agent to the server.
    pub remote_key: String,

    /// Agent display name.
    pub name: String,

    /// Resolved data directory.
    pub data_dir: PathBuf,
}

impl AgentOptions {
    /// Assemble options from the resolved store.
    ///
    /// Each value is checked right before it is consumed; the first missing
    /// setting aborts assembly and later checks never run.
    pub fn from_settings(settings: &Settings) -> Result<Self, ValidationError> {
        let server = require(&settings.server, "target server")?.to_string();
        let remote_key = require(&settings.remote_key, "remote key")?.to_string();
        let name = require(&settings.name, "agent name")?.to_string();
        let data_dir = resolve_data_dir(require(&settings.data_dir, "data dir")?)?;

        Ok(Self {
            server,
            remote_key,
            name,
            data_dir,
        })
    }

    /// Path of the persisted agent token inside the data directory.
    pub fn token_path(&self) -> PathBuf {
        self.data_dir.join("token")
    }
}
