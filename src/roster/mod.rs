//! Roster records: the injured player, the teammates who absorb the lost
//! production, and their box score profiles.
//!
//! These are the engine's input shapes. Field names serialize in camelCase;
//! the short legacy keys (`avgMinutes`, `currentMin`, `pts`, `fg`, ...) are
//! accepted when reading so hand-edited roster files keep working.

pub mod demo;
pub mod provider;
pub mod validate;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{InjuryId, StatField, TeammateSelector},
    error::{Result, TrackerError},
};

pub use validate::{check_field_value, validate_injury, validate_teammate};

/// Per-game box score rates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreProfile {
    #[serde(alias = "pts")]
    pub points: f64,
    #[serde(alias = "reb")]
    pub rebounds: f64,
    #[serde(alias = "ast")]
    pub assists: f64,
    #[serde(alias = "stl")]
    pub steals: f64,
    #[serde(alias = "blk")]
    pub blocks: f64,
    #[serde(alias = "tov")]
    pub turnovers: f64,
    /// Field-goal percentage on a 0-100 scale
    #[serde(rename = "fieldGoalPct", alias = "fg")]
    pub field_goal_pct: f64,
    #[serde(alias = "threes")]
    pub threes_made: f64,
}

impl BoxScoreProfile {
    /// Read one box score category. Returns `None` for the baseline fields
    /// (minutes, usage) which live on the teammate record.
    pub fn get(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::Pts => Some(self.points),
            StatField::Reb => Some(self.rebounds),
            StatField::Ast => Some(self.assists),
            StatField::Stl => Some(self.steals),
            StatField::Blk => Some(self.blocks),
            StatField::Tov => Some(self.turnovers),
            StatField::Fg => Some(self.field_goal_pct),
            StatField::Threes => Some(self.threes_made),
            StatField::Minutes | StatField::Usage => None,
        }
    }

    fn slot_mut(&mut self, field: StatField) -> Option<&mut f64> {
        match field {
            StatField::Pts => Some(&mut self.points),
            StatField::Reb => Some(&mut self.rebounds),
            StatField::Ast => Some(&mut self.assists),
            StatField::Stl => Some(&mut self.steals),
            StatField::Blk => Some(&mut self.blocks),
            StatField::Tov => Some(&mut self.turnovers),
            StatField::Fg => Some(&mut self.field_goal_pct),
            StatField::Threes => Some(&mut self.threes_made),
            StatField::Minutes | StatField::Usage => None,
        }
    }
}

/// A healthy teammate's current production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateRecord {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(alias = "currentMin")]
    pub current_minutes: f64,
    pub current_usage: f64,
    pub stats: BoxScoreProfile,
}

impl TeammateRecord {
    /// Read any editable field, baseline or box score.
    pub fn field(&self, field: StatField) -> f64 {
        match field {
            StatField::Minutes => self.current_minutes,
            StatField::Usage => self.current_usage,
            other => self.stats.get(other).unwrap_or_default(),
        }
    }

    /// Overwrite one field after checking it is a legal value.
    pub fn set_field(&mut self, field: StatField, value: f64) -> Result<()> {
        check_field_value(&self.name, field, value)?;
        match field {
            StatField::Minutes => self.current_minutes = value,
            StatField::Usage => self.current_usage = value,
            other => {
                if let Some(slot) = self.stats.slot_mut(other) {
                    *slot = value;
                }
            }
        }
        Ok(())
    }
}

/// An injured player and the roster that absorbs their minutes and usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuredPlayer {
    pub id: InjuryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Injury note, e.g. "Achilles"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury: Option<String>,
    /// Availability designation, e.g. "Day-to-Day"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(alias = "avgMinutes")]
    pub average_minutes: f64,
    pub usage_rate: f64,
    #[serde(default)]
    pub teammates: Vec<TeammateRecord>,
}

impl InjuredPlayer {
    /// Player name if known, otherwise the injury id.
    pub fn display_name(&self) -> String {
        self.player
            .clone()
            .unwrap_or_else(|| format!("Injury {}", self.id))
    }

    /// Locate a teammate by index or name.
    pub fn teammate_index(&self, selector: &TeammateSelector) -> Result<usize> {
        selector
            .position_in(self.teammates.iter().map(|t| t.name.as_str()))
            .ok_or_else(|| TrackerError::TeammateNotFound {
                injury_id: self.id,
                teammate: selector.to_string(),
            })
    }

    /// Edit one field of one teammate on this (caller-owned) copy.
    pub fn set_teammate_field(
        &mut self,
        selector: &TeammateSelector,
        field: StatField,
        value: f64,
    ) -> Result<()> {
        let idx = self.teammate_index(selector)?;
        self.teammates[idx].set_field(field, value)
    }
}

/// Find an injury by id.
pub fn find_injury(injuries: &[InjuredPlayer], id: InjuryId) -> Result<&InjuredPlayer> {
    injuries
        .iter()
        .find(|inj| inj.id == id)
        .ok_or(TrackerError::InjuryNotFound { id })
}

/// Find an injury by id for editing.
pub fn find_injury_mut(injuries: &mut [InjuredPlayer], id: InjuryId) -> Result<&mut InjuredPlayer> {
    injuries
        .iter_mut()
        .find(|inj| inj.id == id)
        .ok_or(TrackerError::InjuryNotFound { id })
}
