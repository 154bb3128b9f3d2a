//! Integration tests for command handlers

use nba_injury_tracker::{
    commands::{
        edit::apply_edit,
        import::import_document,
        init::seed_demo_roster,
        load_injuries,
        project::build_reports,
    },
    roster::demo::demo_injuries,
    store::{load_roster, resolve_roster_path, save_roster},
    InjuryId, RedistributionFactors, StatField, TeammateSelector, TrackerError, ROSTER_ENV_VAR,
};
use serde_json::json;
use std::{fs, path::PathBuf};
use tempfile::tempdir;

#[test]
fn test_resolve_roster_path_from_env() {
    std::env::set_var(ROSTER_ENV_VAR, "/tmp/from-env-roster.json");
    assert_eq!(
        resolve_roster_path(None),
        PathBuf::from("/tmp/from-env-roster.json")
    );

    // Explicit path takes precedence
    let explicit = PathBuf::from("/tmp/explicit.json");
    assert_eq!(resolve_roster_path(Some(explicit.clone())), explicit);

    std::env::remove_var(ROSTER_ENV_VAR);
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");

    assert!(seed_demo_roster(&path, false).unwrap());
    let mut injuries = load_roster(&path).unwrap();
    injuries.truncate(1);
    save_roster(&path, &injuries).unwrap();

    assert!(!seed_demo_roster(&path, false).unwrap());
    assert_eq!(load_roster(&path).unwrap().len(), 1);

    assert!(seed_demo_roster(&path, true).unwrap());
    assert_eq!(load_roster(&path).unwrap().len(), 3);
}

#[test]
fn test_load_injuries_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    save_roster(&path, &demo_injuries()).unwrap();

    let injuries = load_injuries(Some(path), false).unwrap();
    assert_eq!(injuries.len(), 3);
}

#[test]
fn test_edit_reprojects_only_edited_injury() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    seed_demo_roster(&path, false).unwrap();

    let before = build_reports(&load_roster(&path).unwrap(), RedistributionFactors::default());

    let report = apply_edit(
        &path,
        InjuryId::new(1),
        &TeammateSelector::Name("Obi Toppin".to_string()),
        StatField::Minutes,
        32.0,
    )
    .unwrap();
    assert_eq!(report.id, InjuryId::new(1));

    let stored = load_roster(&path).unwrap();
    assert_eq!(stored[0].teammates[2].current_minutes, 32.0);

    let after = build_reports(&stored, RedistributionFactors::default());
    assert_ne!(after[0], before[0]);
    assert_eq!(after[0], report);
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2], before[2]);
}

#[test]
fn test_edit_to_zero_reports_baseline_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    seed_demo_roster(&path, false).unwrap();

    let report = apply_edit(
        &path,
        InjuryId::new(3),
        &TeammateSelector::Index(3),
        StatField::Usage,
        0.0,
    )
    .unwrap();

    assert!(report.error.is_none());
    assert!(report.teammates[3].projection.is_none());
    assert!(report.teammates[3]
        .error
        .as_deref()
        .unwrap()
        .contains("Paul Reed"));
}

#[test]
fn test_rejected_edit_leaves_roster_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    seed_demo_roster(&path, false).unwrap();
    let original = fs::read_to_string(&path).unwrap();

    let result = apply_edit(
        &path,
        InjuryId::new(2),
        &TeammateSelector::Index(0),
        StatField::Fg,
        120.0,
    );
    assert!(matches!(result, Err(TrackerError::InvalidRecord { .. })));

    let result = apply_edit(
        &path,
        InjuryId::new(99),
        &TeammateSelector::Index(0),
        StatField::Pts,
        10.0,
    );
    assert!(matches!(result, Err(TrackerError::InjuryNotFound { .. })));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_import_document_merges_into_store() {
    let dir = tempdir().unwrap();
    let roster_path = dir.path().join("roster.json");
    let doc_path = dir.path().join("team.json");
    seed_demo_roster(&roster_path, false).unwrap();

    let doc = json!({
        "fantasy_content": {
            "team": [
                { "team_key": "428.l.1.t.3" },
                { "roster": [ { "players": [
                    { "player": [{
                        "player_id": "6001",
                        "name": { "full": "Injured Center" },
                        "display_position": "C",
                        "status": "INJ",
                        "injury_note": "Ankle",
                        "player_stats_season": { "stats": [
                            { "stat": { "stat_id": "0", "value": "31.5" } },
                            { "stat": { "stat_id": "5", "value": "27.0" } }
                        ] }
                    }] },
                    { "player": [{
                        "player_id": "6002",
                        "name": { "full": "Healthy Forward" },
                        "display_position": "PF",
                        "status": ""
                    }] }
                ] } ] }
            ]
        }
    });
    fs::write(&doc_path, serde_json::to_string(&doc).unwrap()).unwrap();

    let found = import_document(&doc_path, &roster_path).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, InjuryId::new(6001));

    let stored = load_roster(&roster_path).unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[3].injury.as_deref(), Some("Ankle"));
    assert_eq!(stored[3].teammates[0].name, "Healthy Forward");

    let reports = build_reports(&stored[3..], RedistributionFactors::default());
    assert!(reports[0].error.is_none());
    assert!(reports[0].teammates[0].projection.is_some());
}

#[test]
fn test_import_into_empty_store() {
    let dir = tempdir().unwrap();
    let roster_path = dir.path().join("nested").join("roster.json");
    let doc_path = dir.path().join("team.json");
    fs::write(
        &doc_path,
        r#"{"fantasy_content":{"team":[{},{"roster":[{"players":[]}]}]}}"#,
    )
    .unwrap();

    let found = import_document(&doc_path, &roster_path).unwrap();
    assert!(found.is_empty());
    assert!(load_roster(&roster_path).unwrap().is_empty());
}

#[test]
fn test_import_unreadable_document() {
    let dir = tempdir().unwrap();
    let result = import_document(&dir.path().join("missing.json"), &dir.path().join("r.json"));
    match result {
        Err(TrackerError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_import_keeps_unreadable_roster_intact() {
    let dir = tempdir().unwrap();
    let roster_path = dir.path().join("roster.json");
    let doc_path = dir.path().join("team.json");
    seed_demo_roster(&roster_path, false).unwrap();

    let mut bytes = fs::read(&roster_path).unwrap();
    let at = bytes.windows(6).position(|w| w == b"Tyrese").unwrap();
    bytes[at + 1] = 0xE9;
    fs::write(&roster_path, &bytes).unwrap();

    fs::write(
        &doc_path,
        r#"{"fantasy_content":{"team":[{},{"roster":[{"players":[
            {"player":[{"player_id":"7001","name":{"full":"Hurt Guard"},"status":"O"}]},
            {"player":[{"player_id":"7002","name":{"full":"Fresh Legs"},"status":""}]}
        ]}]}]}}"#,
    )
    .unwrap();

    let result = import_document(&doc_path, &roster_path);
    assert!(matches!(result, Err(TrackerError::Io(_))));
    assert_eq!(fs::read(&roster_path).unwrap(), bytes);
}
