//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{InjuryId, StatField, TeammateSelector};

/// Where to read the roster from, shared between commands
#[derive(Debug, Args)]
pub struct RosterSource {
    /// Roster file (or set `NBA_INJURY_ROSTER` env var).
    #[clap(long, short)]
    pub roster: Option<PathBuf>,

    /// Use the bundled demo roster instead of a stored one.
    #[clap(long, conflicts_with = "roster")]
    pub demo: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project how each injured player's minutes and usage redistribute.
    ///
    /// Validates every selected injury, runs the redistribution engine and
    /// prints per-teammate projections (or the reason a teammate was skipped).
    Project {
        #[clap(flatten)]
        source: RosterSource,

        /// Only project these injuries (repeatable): `-i 1 -i 3`.
        #[clap(long = "injury", short = 'i')]
        injuries: Option<Vec<InjuryId>>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print progress while loading and projecting.
        #[clap(long)]
        verbose: bool,

        /// Share of the injured player's minutes redistributed (0.0-1.0, default 0.85).
        #[clap(long)]
        minute_factor: Option<f64>,

        /// Share of the injured player's usage redistributed (0.0-1.0, default 0.70).
        #[clap(long)]
        usage_factor: Option<f64>,
    },

    /// List the injuries on the roster.
    Injuries {
        #[clap(flatten)]
        source: RosterSource,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Edit one teammate field in the stored roster and re-project that injury.
    Edit {
        /// Roster file (or set `NBA_INJURY_ROSTER` env var).
        #[clap(long, short)]
        roster: Option<PathBuf>,

        /// Injury whose teammate is edited.
        #[clap(long, short = 'i')]
        injury: InjuryId,

        /// Teammate name or zero-based index.
        #[clap(long, short)]
        teammate: TeammateSelector,

        /// Field to change.
        #[clap(long, short, value_enum)]
        field: StatField,

        /// New value.
        #[clap(long, short = 'v', allow_hyphen_values = true)]
        value: f64,

        /// Output the re-projection as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Seed the roster store with the bundled demo roster.
    Init {
        /// Roster file (or set `NBA_INJURY_ROSTER` env var).
        #[clap(long, short)]
        roster: Option<PathBuf>,

        /// Overwrite an existing roster.
        #[clap(long)]
        force: bool,
    },

    /// Import injuries from a Yahoo fantasy team roster document.
    Import {
        /// Roster document (JSON) to parse.
        #[clap(long)]
        file: PathBuf,

        /// Roster file to write (or set `NBA_INJURY_ROSTER` env var).
        #[clap(long, short)]
        roster: Option<PathBuf>,

        /// Print what was detected.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "nba-injury-tracker",
    about = "Fantasy basketball injury opportunity calculator"
)]
pub struct Tracker {
    #[clap(subcommand)]
    pub command: Commands,
}
