//! Configuration schema definitions.
//!
//! This module defines the on-disk config record and the resolved store the
//! rest of startup consumes.

use serde::Deserialize;

use crate::cli::Cli;

/// On-disk configuration record.
///
/// Exactly four keys are recognized, all optional at the file level; they
/// become required once resolution has finished. Unknown keys are rejected
/// so a typoed key fails loudly instead of being ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Address of the outpost server.
    pub server: Option<String>,

    /// Remote key identifying this agent to the server.
    #[serde(rename = "remote-key")]
    pub remote_key: Option<String>,

    /// Data directory path.
    #[serde(rename = "data-dir")]
    pub data_dir: Option<String>,

    /// Agent display name.
    pub name: Option<String>,
}

/// Resolved configuration store.
///
/// Seeded from flags, then overlaid with file values. An empty string means
/// the setting was supplied by neither source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub server: String,
    pub remote_key: String,
    pub name: String,
    pub data_dir: String,
}

impl Settings {
    /// Seed the store from command-line flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            server: cli.server.clone().unwrap_or_default(),
            remote_key: cli.remote_key.clone().unwrap_or_default(),
            name: cli.name.clone().unwrap_or_default(),
            data_dir: cli.data.clone(),
        }
    }

    /// Overlay file values onto the store.
    ///
    /// A field overrides the flag value only when the file supplies it
    /// non-empty; absent or empty fields leave the store untouched.
    pub fn overlay(&mut self, file: FileConfig) {
        overlay_field(&mut self.server, file.server);
        overlay_field(&mut self.remote_key, file.remote_key);
        overlay_field(&mut self.name, file.name);
        overlay_field(&mut self.data_dir, file.data_dir);
    }
}

fn overlay_field(slot: &mut String, value: Option<String>) {
    match value {
        Some(value) if !value.is_empty() => *slot = value,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn flags(args: &[&str]) -> Settings {
        let cli =
            Cli::try_parse_from(std::iter::once("outpost-agent").chain(args.iter().copied()))
                .unwrap();
        Settings::from_cli(&cli)
    }

    #[test]
    fn from_cli_maps_every_flag() {
        let settings = flags(&[
            "--server",
            "proxy:1339",
            "--remote-key",
            "abc",
            "--name",
            "edge-1",
            "--data",
            "/var/lib/outpost",
        ]);
        assert_eq!(settings.server, "proxy:1339");
        assert_eq!(settings.remote_key, "abc");
        assert_eq!(settings.name, "edge-1");
        assert_eq!(settings.data_dir, "/var/lib/outpost");
    }

    #[test]
    fn omitted_flags_resolve_to_empty() {
        let settings = flags(&[]);
        assert_eq!(settings.server, "");
        assert_eq!(settings.remote_key, "");
        assert_eq!(settings.name, "");
        assert_eq!(settings.data_dir, crate::cli::DEFAULT_DATA_DIR);
    }

    #[test]
    fn file_wins_where_it_speaks() {
        let mut settings = flags(&["--server", "flag:1", "--name", "flag-name"]);
        settings.overlay(FileConfig {
            server: Some("file:2".into()),
            remote_key: Some("file-key".into()),
            data_dir: Some("/srv/outpost".into()),
            name: Some("file-name".into()),
        });
        assert_eq!(settings.server, "file:2");
        assert_eq!(settings.remote_key, "file-key");
        assert_eq!(settings.name, "file-name");
        assert_eq!(settings.data_dir, "/srv/outpost");
    }

    #[test]
    fn absent_or_empty_file_fields_keep_flag_values() {
        let mut settings = flags(&["--server", "flag:1", "--name", "flag-name"]);
        settings.overlay(FileConfig {
            server: None,
            remote_key: None,
            data_dir: None,
            name: Some(String::new()),
        });
        assert_eq!(settings.server, "flag:1");
        assert_eq!(settings.name, "flag-name");
        assert_eq!(settings.data_dir, crate::cli::DEFAULT_DATA_DIR);
    }
}
