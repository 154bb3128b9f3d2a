//! Injury listing command implementation

use std::path::PathBuf;

use crate::{report::headline, Result};

use super::load_injuries;

/// Handle the injuries command
pub fn handle_injuries(roster: Option<PathBuf>, demo: bool, as_json: bool) -> Result<()> {
    let injuries = load_injuries(roster, demo)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&injuries)?);
        return Ok(());
    }

    println!("{} active injuries", injuries.len());
    for injury in &injuries {
        println!("{}", headline(injury));
        for (idx, tm) in injury.teammates.iter().enumerate() {
            println!(
                "    {}. {} ({}) {:.1} MPG, {:.1}% usage",
                idx, tm.name, tm.position, tm.current_minutes, tm.current_usage
            );
        }
    }
    Ok(())
}
