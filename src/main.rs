//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_injury_tracker::{
    cli::{Commands, Tracker},
    commands::{
        edit::{handle_edit, EditParams},
        import::handle_import,
        init::handle_init,
        injuries::handle_injuries,
        project::{handle_project, ProjectParams},
    },
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = Tracker::parse();

    match app.command {
        Commands::Project {
            source,
            injuries,
            json,
            verbose,
            minute_factor,
            usage_factor,
        } => handle_project(ProjectParams {
            roster: source.roster,
            demo: source.demo,
            injuries,
            as_json: json,
            verbose,
            minute_factor,
            usage_factor,
        })?,

        Commands::Injuries { source, json } => handle_injuries(source.roster, source.demo, json)?,

        Commands::Edit {
            roster,
            injury,
            teammate,
            field,
            value,
            json,
        } => handle_edit(EditParams {
            roster,
            injury,
            teammate,
            field,
            value,
            as_json: json,
        })?,

        Commands::Init { roster, force } => handle_init(roster, force)?,

        Commands::Import {
            file,
            roster,
            verbose,
        } => handle_import(file, roster, verbose)?,
    }

    Ok(())
}
