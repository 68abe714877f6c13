//! Command-line flags for the agent process.
//!
//! Flags seed the configuration store; a config file given via `--config`
//! is overlaid on top of them during resolution.

use std::path::PathBuf;

use clap::Parser;

/// Default data directory, expanded against the user's home at validation.
pub const DEFAULT_DATA_DIR: &str = "~/.outpost-agent";

/// Command-line interface of the agent.
#[derive(Debug, Parser)]
#[command(name = "outpost-agent")]
#[command(version, about = "Outpost network agent", long_about = None)]
pub struct Cli {
    /// Read configuration from FILE
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address of the outpost server to connect to
    #[arg(short, long, value_name = "ADDR")]
    pub server: Option<String>,

    /// Remote key identifying this agent to the server
    #[arg(short = 'k', long, value_name = "KEY")]
    pub remote_key: Option<String>,

    /// Store agent data in DIR
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data: String,

    /// Agent display name
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,
}
