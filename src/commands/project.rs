//! Projection command implementation

use std::path::PathBuf;

use log::info;
use rayon::prelude::*;

use crate::{
    cli::types::InjuryId,
    engine::{project_screened, RedistributionFactors},
    report::{build_report, render_text, InjuryReport},
    roster::{validate_injury, validate_teammate, InjuredPlayer},
    Result,
};

use super::{load_injuries, select_injuries};

/// Parameters for the project command
#[derive(Debug, Default)]
pub struct ProjectParams {
    pub roster: Option<PathBuf>,
    pub demo: bool,
    pub injuries: Option<Vec<InjuryId>>,
    pub as_json: bool,
    pub verbose: bool,
    pub minute_factor: Option<f64>,
    pub usage_factor: Option<f64>,
}

/// Validate and project each injury, one report per injury in input order.
///
/// An invalid injury or a degenerate roster becomes the error on its own
/// report. An invalid teammate fills its own slot and is left out of that
/// injury's totals. Everything else is still projected.
pub fn build_reports(
    injuries: &[InjuredPlayer],
    factors: RedistributionFactors,
) -> Vec<InjuryReport> {
    injuries
        .par_iter()
        .map(|injury| {
            let outcome = validate_injury(injury)
                .and_then(|()| project_screened(injury, factors, validate_teammate));
            build_report(injury, &outcome)
        })
        .collect()
}

/// Handle the project command
pub fn handle_project(params: ProjectParams) -> Result<()> {
    let factors = RedistributionFactors::with_overrides(params.minute_factor, params.usage_factor)?;

    if params.verbose {
        if params.demo {
            println!("Loading demo roster...");
        } else {
            println!("Loading roster...");
        }
    }
    let injuries = load_injuries(params.roster, params.demo)?;
    let injuries = select_injuries(injuries, params.injuries.as_deref())?;

    if params.verbose {
        println!(
            "Projecting {} injuries (minute factor {:.2}, usage factor {:.2})...",
            injuries.len(),
            factors.minutes,
            factors.usage
        );
    }
    let reports = build_reports(&injuries, factors);
    info!("projected {} injuries", reports.len());

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if reports.is_empty() {
        println!("No injuries on the roster.");
    } else {
        for report in &reports {
            println!("{}", render_text(report));
        }
    }

    Ok(())
}
