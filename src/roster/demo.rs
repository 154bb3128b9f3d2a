//! Bundled sample roster used by `--demo` and `init`.

use crate::cli::types::InjuryId;

use super::{BoxScoreProfile, InjuredPlayer, TeammateRecord};

/// pts, reb, ast, stl, blk, tov, fg%, 3pm
type Line = [f64; 8];

fn teammate(name: &str, position: &str, minutes: f64, usage: f64, line: Line) -> TeammateRecord {
    let [points, rebounds, assists, steals, blocks, turnovers, field_goal_pct, threes_made] = line;
    TeammateRecord {
        name: name.to_string(),
        position: position.to_string(),
        current_minutes: minutes,
        current_usage: usage,
        stats: BoxScoreProfile {
            points,
            rebounds,
            assists,
            steals,
            blocks,
            turnovers,
            field_goal_pct,
            threes_made,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn injury(
    id: u64,
    player: &str,
    team: &str,
    position: &str,
    note: &str,
    status: &str,
    average_minutes: f64,
    usage_rate: f64,
    teammates: Vec<TeammateRecord>,
) -> InjuredPlayer {
    InjuredPlayer {
        id: InjuryId::new(id),
        player: Some(player.to_string()),
        team: Some(team.to_string()),
        position: Some(position.to_string()),
        injury: Some(note.to_string()),
        status: Some(status.to_string()),
        average_minutes,
        usage_rate,
        teammates,
    }
}

/// Three sample injuries with four rotation teammates each.
pub fn demo_injuries() -> Vec<InjuredPlayer> {
    vec![
        injury(
            1,
            "Tyrese Haliburton",
            "Indiana Pacers",
            "PG",
            "Achilles",
            "Out (Season)",
            34.8,
            29.4,
            vec![
                teammate("Bennedict Mathurin", "SG", 28.5, 24.1, [17.2, 5.8, 2.3, 0.9, 0.4, 2.1, 44.3, 2.4]),
                teammate("Aaron Nesmith", "SF", 27.3, 16.8, [11.8, 3.7, 1.9, 0.8, 0.3, 1.2, 48.1, 1.7]),
                teammate("Obi Toppin", "PF", 23.9, 18.3, [10.3, 3.9, 1.5, 0.5, 0.6, 1.0, 52.7, 1.3]),
                teammate("T.J. McConnell", "PG", 19.7, 14.2, [6.8, 2.8, 5.2, 1.3, 0.1, 0.9, 56.3, 0.2]),
            ],
        ),
        injury(
            2,
            "Kawhi Leonard",
            "LA Clippers",
            "SF",
            "Knee inflammation",
            "Out 2-3 weeks",
            33.2,
            31.7,
            vec![
                teammate("James Harden", "PG", 35.3, 29.8, [21.2, 7.9, 8.5, 1.3, 0.8, 3.5, 42.8, 2.7]),
                teammate("Paul George", "SF", 33.9, 28.3, [23.4, 5.2, 3.5, 1.5, 0.5, 2.8, 45.7, 3.2]),
                teammate("Norman Powell", "SG", 26.1, 22.9, [13.9, 2.6, 1.3, 0.8, 0.3, 1.3, 46.9, 2.1]),
                teammate("Ivica Zubac", "C", 28.7, 16.4, [11.7, 9.2, 1.4, 0.4, 1.2, 1.5, 64.3, 0.0]),
            ],
        ),
        injury(
            3,
            "Joel Embiid",
            "Philadelphia 76ers",
            "C",
            "Knee soreness",
            "Day-to-Day",
            34.6,
            33.8,
            vec![
                teammate("Tyrese Maxey", "PG", 37.2, 30.1, [25.9, 3.7, 6.2, 1.0, 0.5, 2.6, 45.0, 3.1]),
                teammate("Kelly Oubre Jr.", "SF", 32.3, 21.7, [15.4, 5.1, 1.5, 1.1, 0.9, 1.7, 44.6, 1.9]),
                teammate("Tobias Harris", "PF", 30.9, 19.8, [17.2, 6.5, 3.1, 1.0, 0.6, 1.5, 48.7, 1.4]),
                teammate("Paul Reed", "C", 18.4, 15.3, [7.3, 6.0, 0.9, 0.9, 1.1, 1.2, 52.1, 0.0]),
            ],
        ),
    ]
}
