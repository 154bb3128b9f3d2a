//! Engine output records.

use serde::Serialize;

use crate::{
    cli::types::{InjuryId, StatField},
    error::{Result, TrackerError},
    roster::{BoxScoreProfile, TeammateRecord},
};

/// One teammate's slot in a projection: either a projection or the reason
/// that teammate could not be projected.
pub type TeammateOutcome = Result<ProjectionResult>;

/// Relative increase per counting stat, in percent.
///
/// `None` when the current value is zero and no relative change exists.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatIncreases {
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub steals: Option<f64>,
    pub blocks: Option<f64>,
    pub threes_made: Option<f64>,
}

/// A teammate's projected production after absorbing the injured player's
/// minutes and usage. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    #[serde(flatten)]
    pub teammate: TeammateRecord,
    pub minute_share: f64,
    pub usage_share: f64,
    pub additional_minutes: f64,
    pub additional_usage: f64,
    pub projected_minutes: f64,
    pub projected_usage: f64,
    pub usage_multiplier: f64,
    pub minute_increase_pct: f64,
    pub usage_increase_pct: f64,
    pub projected_stats: BoxScoreProfile,
    pub stat_increase_pct: StatIncreases,
    /// Change in field-goal percentage; expected to be negative as usage rises
    pub field_goal_change_pct: Option<f64>,
    /// Change in turnovers; a rise is a cost, not a gain
    pub turnover_change_pct: Option<f64>,
}

impl ProjectionResult {
    /// Relative change for any box score category.
    pub fn change_pct(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::Pts => self.stat_increase_pct.points,
            StatField::Reb => self.stat_increase_pct.rebounds,
            StatField::Ast => self.stat_increase_pct.assists,
            StatField::Stl => self.stat_increase_pct.steals,
            StatField::Blk => self.stat_increase_pct.blocks,
            StatField::Threes => self.stat_increase_pct.threes_made,
            StatField::Fg => self.field_goal_change_pct,
            StatField::Tov => self.turnover_change_pct,
            StatField::Minutes => Some(self.minute_increase_pct),
            StatField::Usage => Some(self.usage_increase_pct),
        }
    }
}

/// Fantasy value of a stat change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Favorable,
    Unfavorable,
    Neutral,
}

impl Impact {
    /// Classify a change. Turnovers invert: more of them hurts.
    pub fn of(field: StatField, change: f64) -> Self {
        if change == 0.0 || change.is_nan() {
            return Impact::Neutral;
        }
        let rising = change > 0.0;
        let good = match field {
            StatField::Tov => !rising,
            _ => rising,
        };
        if good {
            Impact::Favorable
        } else {
            Impact::Unfavorable
        }
    }
}

/// Result of projecting one injury inside a batch.
#[derive(Debug)]
pub struct InjuryProjection {
    pub injury_id: InjuryId,
    pub outcome: Result<Vec<TeammateOutcome>>,
}

impl InjuryProjection {
    /// Successful teammate projections, skipping per-teammate errors.
    pub fn projections(&self) -> impl Iterator<Item = &ProjectionResult> {
        self.outcome
            .iter()
            .flatten()
            .filter_map(|outcome| outcome.as_ref().ok())
    }

    /// Per-teammate errors, if the injury itself was projectable.
    pub fn teammate_errors(&self) -> impl Iterator<Item = &TrackerError> {
        self.outcome
            .iter()
            .flatten()
            .filter_map(|outcome| outcome.as_ref().err())
    }
}
