//! Opportunity redistribution and stat projection.
//!
//! When a player goes down, a fixed fraction of their minutes and usage is
//! handed to the remaining teammates in proportion to each teammate's current
//! share. Each teammate's box score is then rescaled from per-minute rates:
//!
//! - points, threes and turnovers grow with minutes and `sqrt(usage multiplier)`
//! - assists grow with minutes and `usage multiplier ^ 0.6`
//! - rebounds, steals and blocks grow with minutes only
//! - field-goal percentage drops 2% of its value per unit of usage multiplier
//!
//! Everything here is pure: inputs are borrowed, outputs are new records.

pub mod types;


use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    error::{BaselineField, Result, TrackerError},
    roster::{BoxScoreProfile, InjuredPlayer, TeammateRecord},
};

pub use types::{Impact, InjuryProjection, ProjectionResult, StatIncreases, TeammateOutcome};

/// Share of the injured player's minutes the roster recovers.
pub const MIN_REDISTRIBUTION_FACTOR: f64 = 0.85;
/// Share of the injured player's usage the roster recovers.
pub const USAGE_REDISTRIBUTION_FACTOR: f64 = 0.70;
/// Usage exponent for assists.
pub const ASSIST_USAGE_EXPONENT: f64 = 0.6;
/// Fractional FG% loss per unit increase of the usage multiplier.
pub const FG_PENALTY_PER_USAGE: f64 = 0.02;

/// How much of the injured player's minutes and usage is redistributed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RedistributionFactors {
    pub minutes: f64,
    pub usage: f64,
}

impl Default for RedistributionFactors {
    fn default() -> Self {
        Self {
            minutes: MIN_REDISTRIBUTION_FACTOR,
            usage: USAGE_REDISTRIBUTION_FACTOR,
        }
    }
}

impl RedistributionFactors {
    /// Build factors, each of which must lie in `[0, 1]`.
    pub fn new(minutes: f64, usage: f64) -> Result<Self> {
        for (field, value) in [("minuteFactor", minutes), ("usageFactor", usage)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TrackerError::invalid(
                    "redistribution factors",
                    field,
                    value,
                    "must be between 0 and 1",
                ));
            }
        }
        Ok(Self { minutes, usage })
    }

    /// Defaults with optional overrides, as supplied on the command line.
    pub fn with_overrides(minutes: Option<f64>, usage: Option<f64>) -> Result<Self> {
        let defaults = Self::default();
        Self::new(
            minutes.unwrap_or(defaults.minutes),
            usage.unwrap_or(defaults.usage),
        )
    }
}

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Relative change in percent, or `None` when there is no baseline.
pub fn increase_pct(current: f64, projected: f64) -> Option<f64> {
    usable(current).then(|| (projected - current) / current * 100.0)
}

/// Project every teammate of `injury` with the default factors.
///
/// Returns one outcome per teammate, in roster order. Fails as a whole only
/// when the roster has no minutes or no usage to share from.
pub fn project(injury: &InjuredPlayer) -> Result<Vec<TeammateOutcome>> {
    project_with(injury, RedistributionFactors::default())
}

/// Project every teammate of `injury` with explicit factors.
pub fn project_with(
    injury: &InjuredPlayer,
    factors: RedistributionFactors,
) -> Result<Vec<TeammateOutcome>> {
    project_screened(injury, factors, |_| Ok(()))
}

/// Project with each teammate first passed through `screen`.
///
/// A rejected teammate keeps the screen's error in its slot and is left out
/// of the roster totals, so the accepted teammates split the whole pool. When
/// nothing is accepted the roster is degenerate.
pub fn project_screened<F>(
    injury: &InjuredPlayer,
    factors: RedistributionFactors,
    screen: F,
) -> Result<Vec<TeammateOutcome>>
where
    F: Fn(&TeammateRecord) -> Result<()>,
{
    let screened: Vec<(&TeammateRecord, Result<()>)> = injury
        .teammates
        .iter()
        .map(|teammate| {
            let check = screen(teammate);
            if let Err(e) = &check {
                debug!("screened out {}: {}", teammate.name, e);
            }
            (teammate, check)
        })
        .collect();

    let (total_minutes, total_usage): (f64, f64) = screened
        .iter()
        .filter(|(_, check)| check.is_ok())
        .fold((0.0, 0.0), |(minutes, usage), (teammate, _)| {
            (minutes + teammate.current_minutes, usage + teammate.current_usage)
        });

    if !usable(total_minutes) || !usable(total_usage) {
        warn!(
            "injury {}: degenerate roster (minutes {}, usage {})",
            injury.id, total_minutes, total_usage
        );
        return Err(TrackerError::DegenerateRoster {
            injury_id: injury.id,
            total_minutes,
            total_usage,
        });
    }

    let pool = Pool {
        average_minutes: injury.average_minutes,
        usage_rate: injury.usage_rate,
        factors,
        total_minutes,
        total_usage,
    };

    Ok(screened
        .into_iter()
        .map(|(teammate, check)| check.and_then(|()| pool.project_teammate(teammate)))
        .collect())
}

/// Project many injuries in parallel. Output order matches input order.
pub fn project_all(
    injuries: &[InjuredPlayer],
    factors: RedistributionFactors,
) -> Vec<InjuryProjection> {
    injuries
        .par_iter()
        .map(|injury| InjuryProjection {
            injury_id: injury.id,
            outcome: project_with(injury, factors),
        })
        .collect()
}

/// Roster-wide aggregates shared by every teammate of one injury.
struct Pool {
    average_minutes: f64,
    usage_rate: f64,
    factors: RedistributionFactors,
    total_minutes: f64,
    total_usage: f64,
}

impl Pool {
    fn project_teammate(&self, teammate: &TeammateRecord) -> TeammateOutcome {
        let baseline_error = |field: BaselineField| {
            debug!("skipping {}: zero {}", teammate.name, field);
            TrackerError::InsufficientBaseline {
                teammate: teammate.name.clone(),
                field,
            }
        };
        if !usable(teammate.current_minutes) {
            return Err(baseline_error(BaselineField::Minutes));
        }
        if !usable(teammate.current_usage) {
            return Err(baseline_error(BaselineField::Usage));
        }

        let minute_share = teammate.current_minutes / self.total_minutes;
        let usage_share = teammate.current_usage / self.total_usage;
        let additional_minutes = self.average_minutes * minute_share * self.factors.minutes;
        let additional_usage = self.usage_rate * usage_share * self.factors.usage;
        let projected_minutes = teammate.current_minutes + additional_minutes;
        let projected_usage = teammate.current_usage + additional_usage;
        let usage_multiplier = projected_usage / teammate.current_usage;

        let current = &teammate.stats;
        let projected_stats = scale_box_score(
            current,
            teammate.current_minutes,
            projected_minutes,
            usage_multiplier,
        );

        Ok(ProjectionResult {
            teammate: teammate.clone(),
            minute_share,
            usage_share,
            additional_minutes,
            additional_usage,
            projected_minutes,
            projected_usage,
            usage_multiplier,
            minute_increase_pct: additional_minutes / teammate.current_minutes * 100.0,
            usage_increase_pct: additional_usage / teammate.current_usage * 100.0,
            stat_increase_pct: StatIncreases {
                points: increase_pct(current.points, projected_stats.points),
                rebounds: increase_pct(current.rebounds, projected_stats.rebounds),
                assists: increase_pct(current.assists, projected_stats.assists),
                steals: increase_pct(current.steals, projected_stats.steals),
                blocks: increase_pct(current.blocks, projected_stats.blocks),
                threes_made: increase_pct(current.threes_made, projected_stats.threes_made),
            },
            field_goal_change_pct: increase_pct(
                current.field_goal_pct,
                projected_stats.field_goal_pct,
            ),
            turnover_change_pct: increase_pct(current.turnovers, projected_stats.turnovers),
            projected_stats,
        })
    }
}

/// Rescale a box score from per-minute rates to new minutes and usage.
///
/// The field-goal penalty is linear and unclamped: a usage multiplier above
/// 51 drives the projected FG% below zero. That takes a tiny current usage
/// absorbing a very high-usage player, e.g. 0.1 usage taking on a 100% usage
/// rate.
pub fn scale_box_score(
    stats: &BoxScoreProfile,
    current_minutes: f64,
    projected_minutes: f64,
    usage_multiplier: f64,
) -> BoxScoreProfile {
    let volume = |stat: f64| stat / current_minutes * projected_minutes;
    let shot_boost = usage_multiplier.sqrt();
    let assist_boost = usage_multiplier.powf(ASSIST_USAGE_EXPONENT);

    BoxScoreProfile {
        points: volume(stats.points) * shot_boost,
        threes_made: volume(stats.threes_made) * shot_boost,
        turnovers: volume(stats.turnovers) * shot_boost,
        assists: volume(stats.assists) * assist_boost,
        rebounds: volume(stats.rebounds),
        steals: volume(stats.steals),
        blocks: volume(stats.blocks),
        field_goal_pct: stats.field_goal_pct
            * (1.0 - (usage_multiplier - 1.0) * FG_PENALTY_PER_USAGE),
    }
}
