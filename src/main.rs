//! Outpost Agent
//!
//! A lightweight node that registers with a remote outpost server and relays
//! traffic on its behalf. This binary owns startup and lifecycle only; the
//! wire protocol lives in the agent runtime.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI flags ──┐
//!               ├──▶ config (resolve: flags, then file overlay)
//!   TOML file ──┘         │
//!                         ▼
//!                  agent::options (required-value checks, data dir)
//!                         │
//!                         ▼
//!                  agent::runtime (construct, token init)
//!                         │
//!                         ▼
//!                  lifecycle::startup ──▶ Agent::run (primary flow)
//!                         │                    ▲
//!                         ▼                    │ cancellation
//!                  lifecycle::signals ──▶ lifecycle::shutdown
//!                  (SIGINT / SIGTERM)     (one-shot trigger)
//! ```
//!
//! Startup is strictly ordered: resolution runs before validation, the
//! signal listener starts only after the agent was constructed, and any
//! error before the run call exits the process with status 1.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outpost_agent::cli::Cli;
use outpost_agent::config::loader;
use outpost_agent::lifecycle::startup::{self, StartupError};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outpost_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "outpost-agent starting");

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }

    tracing::info!("shutdown complete");
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    let settings = loader::resolve(&cli)?;

    tracing::debug!(
        server = %settings.server,
        name = %settings.name,
        data_dir = %settings.data_dir,
        "configuration resolved"
    );

    startup::run(settings).await
}
