//! Local roster snapshot storage.
//!
//! The roster lives as a JSON array of injury records. Default location:
//! `~/.cache/nba-injury-tracker/roster.json`, overridable per call or through
//! the `NBA_INJURY_ROSTER` environment variable.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, TrackerError},
    roster::InjuredPlayer,
    ROSTER_ENV_VAR,
};


/// Path: ~/.cache/nba-injury-tracker/roster.json
pub fn default_roster_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nba-injury-tracker").join("roster.json")
}

/// Explicit path, then the environment variable, then the default.
pub fn resolve_roster_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| {
            std::env::var(ROSTER_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_roster_path)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Load a stored roster.
///
/// Only a file that does not exist is a `MissingRoster` error. A roster that
/// exists but cannot be read is an `Io` error.
pub fn load_roster(path: &Path) -> Result<Vec<InjuredPlayer>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(TrackerError::MissingRoster {
                path: path.display().to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    let injuries: Vec<InjuredPlayer> = serde_json::from_str(&raw)?;
    debug!("loaded {} injuries from {}", injuries.len(), path.display());
    Ok(injuries)
}

/// Persist a roster, creating parent directories as needed.
pub fn save_roster(path: &Path, injuries: &[InjuredPlayer]) -> Result<()> {
    let json = serde_json::to_string_pretty(injuries)?;
    write_string(path, &json)?;
    debug!("saved {} injuries to {}", injuries.len(), path.display());
    Ok(())
}
