//! NBA Injury Tracker Library
//!
//! Estimates how an injured player's minutes and usage redistribute among
//! teammates and what that does to each teammate's fantasy box score.
//!
//! ## Features
//!
//! - **Redistribution Engine**: pure, deterministic per-teammate projections
//! - **Batch Projection**: many injuries projected in parallel
//! - **Roster Provider**: parse Yahoo fantasy roster documents into injury records
//! - **Local Roster Store**: keep an editable roster snapshot between runs
//! - **Reports**: rounded, display-ready output as text or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_injury_tracker::{engine::project, roster::demo::demo_injuries};
//!
//! let injuries = demo_injuries();
//! for outcome in project(&injuries[0])? {
//!     let result = outcome?;
//!     println!("{}: +{:.1} min", result.teammate.name, result.additional_minutes);
//! }
//! # Ok::<(), nba_injury_tracker::TrackerError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a roster file without passing `--roster` every time:
//! ```bash
//! export NBA_INJURY_ROSTER=~/rosters/pacers.json
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod report;
pub mod roster;
pub mod store;

// Re-export commonly used types
pub use cli::types::{InjuryId, StatField, TeammateSelector};
pub use engine::{project, project_all, ProjectionResult, RedistributionFactors};
pub use error::{Result, TrackerError};
pub use roster::{BoxScoreProfile, InjuredPlayer, TeammateRecord};

pub const ROSTER_ENV_VAR: &str = "NBA_INJURY_ROSTER";
