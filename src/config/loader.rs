//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::Cli;
use crate::config::schema::{FileConfig, Settings};

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be opened or read.
    #[error("could not open config file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file contents do not decode as the agent schema.
    #[error("could not parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load and decode a config file.
///
/// A file that fails to decode is never partially applied.
pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the configuration store from flags and the optional config file.
///
/// Flags seed the store; when `--config` was given the file is decoded and
/// overlaid on top. This is the first step of startup and the only one that
/// reads configuration from the filesystem.
pub fn resolve(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut settings = Settings::from_cli(cli);

    if let Some(path) = &cli.config {
        let file = load(path)?;
        tracing::debug!(path = %path.display(), "config file loaded");
        settings.overlay(file);
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_decodes_all_four_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server = \"proxy:1339\"\nremote-key = \"abc\"\ndata-dir = \"/srv/outpost\"\nname = \"edge-1\""
        )
        .unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.server.as_deref(), Some("proxy:1339"));
        assert_eq!(config.remote_key.as_deref(), Some("abc"));
        assert_eq!(config.data_dir.as_deref(), Some("/srv/outpost"));
        assert_eq!(config.name.as_deref(), Some("edge-1"));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load(Path::new("/nonexistent/agent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/agent.toml"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server = ").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sever = \"typo:1339\"").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
