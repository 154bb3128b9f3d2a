//! Init command implementation

use std::path::{Path, PathBuf};

use crate::{
    roster::demo::demo_injuries,
    store::{resolve_roster_path, save_roster},
    Result,
};

/// Write the demo roster to `path`. Returns false when a roster already
/// exists and `force` is not set.
pub fn seed_demo_roster(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    save_roster(path, &demo_injuries())?;
    Ok(true)
}

/// Handle the init command
pub fn handle_init(roster: Option<PathBuf>, force: bool) -> Result<()> {
    let path = resolve_roster_path(roster);
    if seed_demo_roster(&path, force)? {
        println!("✓ Demo roster written to {}", path.display());
    } else {
        println!(
            "Roster already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}
