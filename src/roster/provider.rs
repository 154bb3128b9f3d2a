//! Roster data provider for Yahoo fantasy-sports team roster documents.
//!
//! Turns a `team/{key}/roster` response into injury records: every player
//! with a non-healthy status becomes an [`InjuredPlayer`] whose teammates are
//! the first few other players on the same roster.

use log::debug;
use serde_json::Value;

use crate::{
    cli::types::InjuryId,
    error::{Result, TrackerError},
};

use super::{BoxScoreProfile, InjuredPlayer, TeammateRecord};

/// Stat id carrying minutes played.
pub const MINUTES_STAT_ID: &str = "0";
/// Stat id carrying usage rate, when the league tracks it.
pub const USAGE_STAT_ID: &str = "5";

/// Teammates attached to each injury.
pub const MAX_TEAMMATES: usize = 4;

pub const DEFAULT_TEAMMATE_MINUTES: f64 = 25.0;
pub const DEFAULT_TEAMMATE_USAGE: f64 = 20.0;

/// Roster responses carry no per-category averages, so every teammate starts
/// from this profile until the user edits it.
pub const DEFAULT_TEAMMATE_STATS: BoxScoreProfile = BoxScoreProfile {
    points: 12.0,
    rebounds: 4.5,
    assists: 3.2,
    steals: 0.8,
    blocks: 0.5,
    turnovers: 1.5,
    field_goal_pct: 45.0,
    threes_made: 1.8,
};

const PLAYERS_POINTER: &str = "/fantasy_content/team/1/roster/0/players";
const HEALTHY: &str = "Healthy";

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct MinutesAndUsage {
    minutes: Option<f64>,
    usage: Option<f64>,
}

/// Strings and numbers both show up for ids and values.
fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_at(player: &Value, pointer: &str) -> Option<String> {
    player
        .pointer(pointer)
        .and_then(as_text)
        .filter(|s| !s.is_empty())
}

/// Weekly stats win over season stats when both are present.
fn select_stat_block(player: &Value) -> Option<&Vec<Value>> {
    player
        .get("player_stats_week")
        .or_else(|| player.get("player_stats_season"))?
        .get("stats")?
        .as_array()
}

fn parse_minutes_and_usage(player: &Value) -> MinutesAndUsage {
    let mut parsed = MinutesAndUsage::default();
    let Some(stats) = select_stat_block(player) else {
        return parsed;
    };

    for entry in stats {
        let Some(stat) = entry.get("stat") else {
            continue;
        };
        let Some(stat_id) = stat.get("stat_id").and_then(as_text) else {
            continue;
        };
        // Unparseable values count as zero
        let value = stat.get("value").and_then(as_number).unwrap_or(0.0);
        match stat_id.as_str() {
            MINUTES_STAT_ID => parsed.minutes = Some(value),
            USAGE_STAT_ID => parsed.usage = Some(value),
            _ => {}
        }
    }
    parsed
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| *v > 0.0).unwrap_or(fallback)
}

fn is_injured(player: &Value) -> bool {
    let status = player.get("status").and_then(as_text).unwrap_or_default();
    !status.is_empty() && status != HEALTHY
}

fn parse_teammate(player: &Value) -> TeammateRecord {
    let stats = parse_minutes_and_usage(player);
    TeammateRecord {
        name: text_at(player, "/name/full").unwrap_or_else(|| "Unknown".to_string()),
        position: text_at(player, "/display_position").unwrap_or_default(),
        current_minutes: positive_or(stats.minutes, DEFAULT_TEAMMATE_MINUTES),
        current_usage: positive_or(stats.usage, DEFAULT_TEAMMATE_USAGE),
        stats: DEFAULT_TEAMMATE_STATS,
    }
}

fn parse_player_id(player: &Value) -> Result<InjuryId> {
    let raw = player
        .get("player_id")
        .and_then(as_text)
        .ok_or_else(|| TrackerError::Provider {
            message: "player entry without player_id".to_string(),
        })?;
    raw.parse().map_err(|_| TrackerError::Provider {
        message: format!("player_id is not numeric: {}", raw),
    })
}

fn build_injury(player: &Value, roster: &[&Value]) -> Result<InjuredPlayer> {
    let id = parse_player_id(player)?;
    let stats = parse_minutes_and_usage(player);

    let teammates = roster
        .iter()
        .filter(|other| parse_player_id(other).map(|oid| oid != id).unwrap_or(true))
        .take(MAX_TEAMMATES)
        .map(|other| parse_teammate(other))
        .collect();

    Ok(InjuredPlayer {
        id,
        player: text_at(player, "/name/full"),
        team: text_at(player, "/editorial_team_full_name"),
        position: text_at(player, "/display_position"),
        injury: text_at(player, "/injury_note"),
        status: text_at(player, "/status"),
        average_minutes: stats.minutes.unwrap_or(0.0),
        usage_rate: stats.usage.unwrap_or(0.0),
        teammates,
    })
}

/// Parse a team roster document into its injury records.
pub fn parse_roster_document(doc: &Value) -> Result<Vec<InjuredPlayer>> {
    let entries = doc
        .pointer(PLAYERS_POINTER)
        .and_then(Value::as_array)
        .ok_or_else(|| TrackerError::Provider {
            message: format!("roster document has no players list at {}", PLAYERS_POINTER),
        })?;

    let roster: Vec<&Value> = entries
        .iter()
        .filter_map(|entry| entry.pointer("/player/0"))
        .collect();
    debug!("roster document lists {} players", roster.len());

    roster
        .iter()
        .filter(|player| is_injured(player))
        .map(|player| build_injury(player, &roster))
        .collect()
}
