//! Import command implementation

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    roster::{provider::parse_roster_document, InjuredPlayer},
    store::{load_roster, resolve_roster_path, save_roster},
    Result, TrackerError,
};

/// Merge freshly imported injuries into an existing roster.
///
/// Records with a known id replace the stored one; new ids are appended.
pub fn merge_injuries(mut existing: Vec<InjuredPlayer>, incoming: Vec<InjuredPlayer>) -> Vec<InjuredPlayer> {
    for injury in incoming {
        match existing.iter_mut().find(|e| e.id == injury.id) {
            Some(slot) => *slot = injury,
            None => existing.push(injury),
        }
    }
    existing
}

/// Parse `document` and merge its injuries into the roster at `roster_path`.
/// Returns the injuries found in the document.
///
/// Only a roster file that does not exist yet counts as an empty store; any
/// other read failure aborts before anything is written.
pub fn import_document(document: &Path, roster_path: &Path) -> Result<Vec<InjuredPlayer>> {
    let raw = fs::read_to_string(document)?;
    let doc: Value = serde_json::from_str(&raw)?;
    let found = parse_roster_document(&doc)?;

    let existing = match load_roster(roster_path) {
        Ok(injuries) => injuries,
        Err(TrackerError::MissingRoster { .. }) => Vec::new(),
        Err(e) => return Err(e),
    };
    save_roster(roster_path, &merge_injuries(existing, found.clone()))?;
    Ok(found)
}

/// Handle the import command
pub fn handle_import(file: PathBuf, roster: Option<PathBuf>, verbose: bool) -> Result<()> {
    let path = resolve_roster_path(roster);
    let found = import_document(&file, &path)?;

    println!(
        "✓ Imported {} injuries into {}",
        found.len(),
        path.display()
    );
    if verbose {
        for injury in &found {
            println!(
                "  [{}] {} - {} ({} teammates)",
                injury.id,
                injury.display_name(),
                injury.status.as_deref().unwrap_or("unknown status"),
                injury.teammates.len()
            );
        }
    }
    Ok(())
}
