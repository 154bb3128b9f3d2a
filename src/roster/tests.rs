//! Unit tests for roster records, editing and validation

use super::*;
use crate::roster::demo::demo_injuries;

fn sample_teammate() -> TeammateRecord {
    TeammateRecord {
        name: "Obi Toppin".to_string(),
        position: "PF".to_string(),
        current_minutes: 23.9,
        current_usage: 18.3,
        stats: BoxScoreProfile {
            points: 10.3,
            rebounds: 3.9,
            assists: 1.5,
            steals: 0.5,
            blocks: 0.6,
            turnovers: 1.0,
            field_goal_pct: 52.7,
            threes_made: 1.3,
        },
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_keys() {
        let json = r#"{
            "id": 1,
            "player": "Tyrese Haliburton",
            "avgMinutes": 34.8,
            "usageRate": 29.4,
            "teammates": [{
                "name": "Bennedict Mathurin",
                "position": "SG",
                "currentMin": 28.5,
                "currentUsage": 24.1,
                "stats": { "pts": 17.2, "reb": 5.8, "ast": 2.3, "stl": 0.9,
                           "blk": 0.4, "tov": 2.1, "fg": 44.3, "threes": 2.4 }
            }]
        }"#;

        let injury: InjuredPlayer = serde_json::from_str(json).unwrap();
        assert_eq!(injury.id, InjuryId::new(1));
        assert_eq!(injury.average_minutes, 34.8);
        assert_eq!(injury.teammates[0].current_minutes, 28.5);
        assert_eq!(injury.teammates[0].stats.field_goal_pct, 44.3);
        assert_eq!(injury.teammates[0].stats.threes_made, 2.4);
        assert!(injury.team.is_none());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let value = serde_json::to_value(sample_teammate()).unwrap();
        assert_eq!(value["currentMinutes"], 23.9);
        assert_eq!(value["stats"]["fieldGoalPct"], 52.7);
        assert_eq!(value["stats"]["threesMade"], 1.3);
    }

    #[test]
    fn test_demo_roster_survives_json() {
        let demo = demo_injuries();
        let json = serde_json::to_string(&demo).unwrap();
        let back: Vec<InjuredPlayer> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), demo.len());
        assert_eq!(back[2].teammates[3].name, "Paul Reed");
        assert_eq!(back[1].status.as_deref(), Some("Out 2-3 weeks"));
    }
}

#[cfg(test)]
mod edit_tests {
    use super::*;

    #[test]
    fn test_field_reads_baseline_and_box_score() {
        let tm = sample_teammate();
        assert_eq!(tm.field(StatField::Minutes), 23.9);
        assert_eq!(tm.field(StatField::Usage), 18.3);
        assert_eq!(tm.field(StatField::Blk), 0.6);
        assert_eq!(tm.field(StatField::Fg), 52.7);
    }

    #[test]
    fn test_set_field_updates_value() {
        let mut tm = sample_teammate();
        tm.set_field(StatField::Minutes, 30.0).unwrap();
        tm.set_field(StatField::Ast, 4.0).unwrap();
        assert_eq!(tm.current_minutes, 30.0);
        assert_eq!(tm.stats.assists, 4.0);
    }

    #[test]
    fn test_set_field_rejects_invalid_values() {
        let mut tm = sample_teammate();
        assert!(matches!(
            tm.set_field(StatField::Minutes, -1.0),
            Err(TrackerError::InvalidRecord { .. })
        ));
        assert!(matches!(
            tm.set_field(StatField::Fg, 101.0),
            Err(TrackerError::InvalidRecord { .. })
        ));
        assert!(matches!(
            tm.set_field(StatField::Pts, f64::NAN),
            Err(TrackerError::InvalidRecord { .. })
        ));
        // Unchanged after rejected edits
        assert_eq!(tm, sample_teammate());
    }

    #[test]
    fn test_set_teammate_field_by_name_and_index() {
        let mut injury = demo_injuries().remove(0);
        injury
            .set_teammate_field(&TeammateSelector::Name("aaron nesmith".into()), StatField::Pts, 14.0)
            .unwrap();
        injury
            .set_teammate_field(&TeammateSelector::Index(0), StatField::Usage, 26.0)
            .unwrap();
        assert_eq!(injury.teammates[1].stats.points, 14.0);
        assert_eq!(injury.teammates[0].current_usage, 26.0);
    }

    #[test]
    fn test_set_teammate_field_unknown_teammate() {
        let mut injury = demo_injuries().remove(0);
        match injury.set_teammate_field(&TeammateSelector::Index(9), StatField::Pts, 1.0) {
            Err(TrackerError::TeammateNotFound { injury_id, .. }) => {
                assert_eq!(injury_id, InjuryId::new(1))
            }
            other => panic!("Expected TeammateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_find_injury() {
        let injuries = demo_injuries();
        assert_eq!(
            find_injury(&injuries, InjuryId::new(3)).unwrap().player.as_deref(),
            Some("Joel Embiid")
        );
        assert!(matches!(
            find_injury(&injuries, InjuryId::new(99)),
            Err(TrackerError::InjuryNotFound { .. })
        ));
    }

    #[test]
    fn test_display_name_fallback() {
        let mut injury = demo_injuries().remove(0);
        injury.player = None;
        assert_eq!(injury.display_name(), "Injury 1");
    }
}

#[cfg(test)]
mod validate_tests {
    use super::*;

    #[test]
    fn test_demo_roster_is_valid() {
        for injury in demo_injuries() {
            validate_injury(&injury).unwrap();
            for teammate in &injury.teammates {
                validate_teammate(teammate).unwrap();
            }
        }
    }

    #[test]
    fn test_zero_baseline_passes_validation() {
        let mut injury = demo_injuries().remove(0);
        injury.teammates[0].current_minutes = 0.0;
        assert!(validate_injury(&injury).is_ok());
        assert!(validate_teammate(&injury.teammates[0]).is_ok());
    }

    #[test]
    fn test_negative_minutes_rejected() {
        let mut injury = demo_injuries().remove(0);
        injury.average_minutes = -3.0;
        match validate_injury(&injury) {
            Err(TrackerError::InvalidRecord { field, value, .. }) => {
                assert_eq!(field, "averageMinutes");
                assert_eq!(value, -3.0);
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_usage_above_hundred_rejected() {
        let mut injury = demo_injuries().remove(1);
        injury.usage_rate = 130.0;
        assert!(validate_injury(&injury).is_err());

        let mut injury = demo_injuries().remove(1);
        injury.teammates[2].current_usage = 100.5;
        assert!(validate_injury(&injury).is_ok());
        match validate_teammate(&injury.teammates[2]) {
            Err(TrackerError::InvalidRecord { record, field, .. }) => {
                assert_eq!(record, "Norman Powell");
                assert_eq!(field, "usage");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_stat_rejected() {
        let mut injury = demo_injuries().remove(2);
        injury.teammates[3].stats.blocks = f64::INFINITY;
        assert!(matches!(
            validate_teammate(&injury.teammates[3]),
            Err(TrackerError::InvalidRecord { .. })
        ));
    }
}
