//! Command implementations for the NBA injury tracker CLI

pub mod edit;
pub mod import;
pub mod init;
pub mod injuries;
pub mod project;

use std::path::PathBuf;

use crate::{
    cli::types::InjuryId,
    roster::{demo::demo_injuries, find_injury, InjuredPlayer},
    store::{load_roster, resolve_roster_path},
    Result,
};

/// Load injuries from the demo roster or the resolved roster file.
pub fn load_injuries(roster: Option<PathBuf>, demo: bool) -> Result<Vec<InjuredPlayer>> {
    if demo {
        return Ok(demo_injuries());
    }
    load_roster(&resolve_roster_path(roster))
}

/// Keep only the requested injuries, in the requested order.
///
/// `None` keeps the whole roster. An unknown id is an error.
pub fn select_injuries(
    injuries: Vec<InjuredPlayer>,
    ids: Option<&[InjuryId]>,
) -> Result<Vec<InjuredPlayer>> {
    match ids {
        None => Ok(injuries),
        Some(ids) => ids
            .iter()
            .map(|id| find_injury(&injuries, *id).cloned())
            .collect(),
    }
}
