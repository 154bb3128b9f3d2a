//! Presentation-ready projection reports.
//!
//! Absolute values are rounded to one decimal and relative increases to whole
//! percentages. Reports serialize for `--json` and render to plain text.

use serde::Serialize;
use std::fmt::Write as _;

use crate::{
    cli::types::{InjuryId, StatField},
    engine::{Impact, ProjectionResult, TeammateOutcome},
    error::Result,
    roster::InjuredPlayer,
};


/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a percentage to a whole number.
pub fn round_pct(value: f64) -> i64 {
    value.round() as i64
}

/// One stat's current and projected value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub label: &'static str,
    pub current: f64,
    pub projected: f64,
    pub change_pct: Option<i64>,
    pub impact: Impact,
}

/// Rounded projection for one teammate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub current_minutes: f64,
    pub current_usage: f64,
    pub additional_minutes: f64,
    pub additional_usage: f64,
    pub projected_minutes: f64,
    pub projected_usage: f64,
    pub minute_increase_pct: i64,
    pub usage_increase_pct: i64,
    pub stats: Vec<StatLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateReport {
    pub name: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryReport {
    pub id: InjuryId,
    pub player: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub average_minutes: f64,
    pub usage_rate: f64,
    pub teammates: Vec<TeammateReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn stat_line(result: &ProjectionResult, field: StatField) -> StatLine {
    let current = result.teammate.stats.get(field).unwrap_or_default();
    let projected = result.projected_stats.get(field).unwrap_or_default();
    let change = result.change_pct(field);
    StatLine {
        label: field.label(),
        current,
        projected: round1(projected),
        change_pct: change.map(round_pct),
        impact: Impact::of(field, projected - current),
    }
}

/// Round one engine result for display.
pub fn summarize(result: &ProjectionResult) -> ProjectionSummary {
    ProjectionSummary {
        current_minutes: result.teammate.current_minutes,
        current_usage: result.teammate.current_usage,
        additional_minutes: round1(result.additional_minutes),
        additional_usage: round1(result.additional_usage),
        projected_minutes: round1(result.projected_minutes),
        projected_usage: round1(result.projected_usage),
        minute_increase_pct: round_pct(result.minute_increase_pct),
        usage_increase_pct: round_pct(result.usage_increase_pct),
        stats: StatField::BOX_SCORE
            .iter()
            .map(|field| stat_line(result, *field))
            .collect(),
    }
}

/// Build the report for one injury from its projection outcome.
///
/// Teammate names come from the injury record so errored slots keep their
/// place in the roster order.
pub fn build_report(injury: &InjuredPlayer, outcome: &Result<Vec<TeammateOutcome>>) -> InjuryReport {
    let (teammates, error) = match outcome {
        Ok(outcomes) => (
            injury
                .teammates
                .iter()
                .zip(outcomes)
                .map(|(teammate, outcome)| TeammateReport {
                    name: teammate.name.clone(),
                    position: teammate.position.clone(),
                    projection: outcome.as_ref().ok().map(summarize),
                    error: outcome.as_ref().err().map(|e| e.to_string()),
                })
                .collect(),
            None,
        ),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    InjuryReport {
        id: injury.id,
        player: injury.display_name(),
        team: injury.team.clone(),
        position: injury.position.clone(),
        injury: injury.injury.clone(),
        status: injury.status.clone(),
        average_minutes: injury.average_minutes,
        usage_rate: injury.usage_rate,
        teammates,
        error,
    }
}

fn signed_pct(pct: Option<i64>) -> String {
    match pct {
        Some(p) if p > 0 => format!("+{}%", p),
        Some(p) => format!("{}%", p),
        None => "n/a".to_string(),
    }
}

fn impact_marker(impact: Impact) -> &'static str {
    match impact {
        Impact::Favorable => "▲",
        Impact::Unfavorable => "▼",
        Impact::Neutral => "·",
    }
}

/// One-line headline for an injury, e.g. for listings.
pub fn headline(injury: &InjuredPlayer) -> String {
    let mut line = format!("[{}] {}", injury.id, injury.display_name());
    let context: Vec<&str> = [&injury.team, &injury.position]
        .into_iter()
        .filter_map(|s| s.as_deref())
        .collect();
    if !context.is_empty() {
        let _ = write!(line, " ({})", context.join(" • "));
    }
    for tag in [&injury.injury, &injury.status].into_iter().flatten() {
        let _ = write!(line, " [{}]", tag);
    }
    let _ = write!(
        line,
        " {:.1} MPG, {:.1}% usage",
        injury.average_minutes, injury.usage_rate
    );
    line
}

/// Render a report as plain text.
pub fn render_text(report: &InjuryReport) -> String {
    let mut out = String::new();
    let _ = write!(out, "[{}] {}", report.id, report.player);
    if let Some(team) = &report.team {
        let _ = write!(out, " ({})", team);
    }
    if let Some(status) = &report.status {
        let _ = write!(out, " - {}", status);
    }
    let _ = writeln!(
        out,
        "\n  Lost: {:.1} MPG, {:.1}% usage",
        report.average_minutes, report.usage_rate
    );

    if let Some(error) = &report.error {
        let _ = writeln!(out, "  ⚠ {}", error);
        return out;
    }

    for tm in &report.teammates {
        let _ = writeln!(out, "  {} ({})", tm.name, tm.position);
        if let Some(error) = &tm.error {
            let _ = writeln!(out, "    ⚠ {}", error);
            continue;
        }
        let Some(p) = &tm.projection else {
            continue;
        };
        let _ = writeln!(
            out,
            "    Minutes: {:.1} -> {:.1} (+{:.1}, {})",
            p.current_minutes,
            p.projected_minutes,
            p.additional_minutes,
            signed_pct(Some(p.minute_increase_pct))
        );
        let _ = writeln!(
            out,
            "    Usage:   {:.1}% -> {:.1}% (+{:.1}, {})",
            p.current_usage,
            p.projected_usage,
            p.additional_usage,
            signed_pct(Some(p.usage_increase_pct))
        );
        for line in &p.stats {
            let _ = writeln!(
                out,
                "    {} {:<4} {:>5.1} -> {:>5.1}  {}",
                impact_marker(line.impact),
                line.label,
                line.current,
                line.projected,
                signed_pct(line.change_pct)
            );
        }
        let headline_stat = |label: &str| {
            p.stats
                .iter()
                .find(|s| s.label == label)
                .map(|s| s.projected)
                .unwrap_or_default()
        };
        let _ = writeln!(
            out,
            "    Fantasy impact: {:.1} PTS, {:.1} REB, {:.1} AST per game",
            headline_stat("PTS"),
            headline_stat("REB"),
            headline_stat("AST")
        );
    }
    out
}
