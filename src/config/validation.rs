//! Configuration validation.
//!
//! # Responsibilities
//! - Required-value checks (serde handles syntax, this handles presence)
//! - Data directory resolution: expand `~`, create, verify usability
//!
//! # Design Decisions
//! - Fail fast: the first missing setting is reported, later checks never run
//! - Checks run during option assembly, right before each value is consumed
//! - Errors name the exact setting that is missing or unusable

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required setting resolved to the empty string.
    #[error("no {0} set")]
    MissingOption(&'static str),

    /// Data directory could not be resolved to a usable path.
    #[error("could not use data dir {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that a resolved setting is present.
pub fn require<'a>(value: &'a str, option: &'static str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingOption(option));
    }
    Ok(value)
}

/// Resolve the data directory setting to a usable path.
///
/// A leading `~` expands against the user's home directory; the directory
/// is created when absent.
pub fn resolve_data_dir(raw: &str) -> Result<PathBuf, ValidationError> {
    let path = expand_home(raw).map_err(|source| ValidationError::DataDir {
        path: PathBuf::from(raw),
        source,
    })?;

    std::fs::create_dir_all(&path).map_err(|source| ValidationError::DataDir {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

fn expand_home(raw: &str) -> io::Result<PathBuf> {
    if raw != "~" && !raw.starts_with("~/") {
        return Ok(PathBuf::from(raw));
    }

    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory not found"))?;
    Ok(dirs.home_dir().join(raw.trim_start_matches('~').trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_empty_values() {
        let err = require("", "target server").unwrap_err();
        assert_eq!(err.to_string(), "no target server set");
        assert_eq!(require("proxy:1339", "target server").unwrap(), "proxy:1339");
    }

    #[test]
    fn resolve_creates_missing_directories() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("nested").join("data");

        let resolved = resolve_data_dir(target.to_str().unwrap()).unwrap();
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn resolve_rejects_paths_through_files() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("occupied");
        std::fs::write(&file, "x").unwrap();

        let err = resolve_data_dir(file.join("data").to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ValidationError::DataDir { .. }));
    }

    #[test]
    fn tilde_expands_against_home() {
        let resolved = expand_home("~/.outpost-agent").unwrap();
        assert!(!resolved.starts_with("~"));
        assert!(resolved.ends_with(".outpost-agent"));
    }
}
