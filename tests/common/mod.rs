//! Shared utilities for integration testing.

use std::path::{Path, PathBuf};

use clap::Parser;
use outpost_agent::cli::Cli;

/// Parse CLI flags the way the binary would.
pub fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("outpost-agent").chain(args.iter().copied())).unwrap()
}

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("agent.toml");
    std::fs::write(&path, contents).unwrap();
    path
}
