//! Edit command implementation
//!
//! Applies one field change to the caller's copy of the roster, saves it and
//! re-projects the affected injury from scratch.

use std::path::{Path, PathBuf};

use crate::{
    cli::types::{InjuryId, StatField, TeammateSelector},
    engine::{project_screened, RedistributionFactors},
    report::{build_report, render_text, InjuryReport},
    roster::{find_injury_mut, validate_injury, validate_teammate},
    store::{load_roster, resolve_roster_path, save_roster},
    Result,
};

/// Parameters for the edit command
#[derive(Debug)]
pub struct EditParams {
    pub roster: Option<PathBuf>,
    pub injury: InjuryId,
    pub teammate: TeammateSelector,
    pub field: StatField,
    pub value: f64,
    pub as_json: bool,
}

/// Apply an edit to the roster stored at `path` and return the new report.
///
/// The roster is only written when the edit is accepted.
pub fn apply_edit(
    path: &Path,
    injury_id: InjuryId,
    teammate: &TeammateSelector,
    field: StatField,
    value: f64,
) -> Result<InjuryReport> {
    let mut injuries = load_roster(path)?;
    let injury = find_injury_mut(&mut injuries, injury_id)?;
    injury.set_teammate_field(teammate, field, value)?;

    let edited = injury.clone();
    save_roster(path, &injuries)?;

    let outcome = validate_injury(&edited).and_then(|()| {
        project_screened(&edited, RedistributionFactors::default(), validate_teammate)
    });
    Ok(build_report(&edited, &outcome))
}

/// Handle the edit command
pub fn handle_edit(params: EditParams) -> Result<()> {
    let path = resolve_roster_path(params.roster);
    let report = apply_edit(
        &path,
        params.injury,
        &params.teammate,
        params.field,
        params.value,
    )?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "✓ Set {} of {} to {}",
            params.field, params.teammate, params.value
        );
        println!("{}", render_text(&report));
    }
    Ok(())
}
