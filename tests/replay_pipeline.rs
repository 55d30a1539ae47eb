//! End-to-end replay-mode test.
//!
//! A raw fixture with two teams, three players (one carrying an unmapped
//! team id), and four log rows for one (team, position) pair across two
//! distinct games must round-trip into a dataset with the hand-computed
//! double-grouped defensive mean and an untouched schedule array.

use assert_json_diff::assert_json_eq;
use euroscout::pipeline::run_replay;
use euroscout::store::write_dataset;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn fixture() -> Value {
    json!({
        "teams": [
            {"id": "MAD", "name": "Real Madrid", "logoUrl": "https://media.proballers.com/mad.svg"},
            {"id": "BAR", "name": "FC Barcelona"}
        ],
        "players": [
            {"id": "1", "name": "Alpha", "teamId": "MAD", "position": "PG", "seasonAvgPts": 11.5},
            {"id": "2", "name": "Beta", "teamId": "BAR", "position": "C", "seasonAvgPts": 9.0},
            {"id": "3", "name": "Gamma", "teamId": "GONE", "position": "SF", "seasonAvgPts": 7.2}
        ],
        "schedule": [
            {"gameId": "MAD_vs_BAR_0", "homeTeamId": "MAD", "awayTeamId": "BAR",
             "gameDate": "2026-09-01T18:00:00Z", "venue": {"city": "Madrid"}}
        ],
        "player_game_logs": [
            {"opponent_team_id": "MAD", "position": "SG", "points": 10, "game_id": "g1"},
            {"opponent_team_id": "MAD", "position": "SG", "points": 5,  "game_id": "g1"},
            {"opponent_team_id": "MAD", "position": "SG", "points": 7,  "game_id": "g2"},
            {"opponent_team_id": "MAD", "position": "SG", "points": 3,  "game_id": "g2"}
        ]
    })
}

#[test]
fn replay_fixture_produces_expected_dataset() {
    let dir = TempDir::new().unwrap();
    let raw_path = dir.path().join("raw_input.json");
    fs::write(&raw_path, serde_json::to_string(&fixture()).unwrap()).unwrap();

    let dataset = run_replay(Some(&raw_path)).unwrap();

    assert_eq!(dataset.teams.len(), 2);
    assert_eq!(dataset.players.len(), 3);
    // Replay passes players through verbatim, unmapped team id included.
    assert_eq!(dataset.players[2].team_id, "GONE");

    // Per-game sums are 15 (g1) and 10 (g2); the mean is 12.5.
    let out = serde_json::to_value(&dataset).unwrap();
    assert_eq!(out["defense_vs_position"]["MAD"]["SG"], 12.5);
    let mad = out["defense_vs_position"]["MAD"].as_object().unwrap();
    assert_eq!(mad.len(), 5);
    for pos in ["PG", "SF", "PF", "C"] {
        assert_eq!(mad[pos], 0.0);
    }

    // Schedule passes through unchanged, nested fields included.
    assert_json_eq!(out["schedule"].clone(), fixture()["schedule"].clone());
}

#[test]
fn replay_output_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let raw_path = dir.path().join("raw_input.json");
    let out_path = dir.path().join("out/euro_data.json");
    fs::write(&raw_path, serde_json::to_string(&fixture()).unwrap()).unwrap();

    let dataset = run_replay(Some(&raw_path)).unwrap();
    write_dataset(&out_path, &dataset).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    let keys: Vec<&str> = written.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["defense_vs_position", "players", "schedule", "teams"]
    );
    assert_eq!(written["teams"][0]["id"], "MAD");
    assert_eq!(
        written["teams"][0]["logoUrl"],
        "https://media.proballers.com/mad.svg"
    );
    assert_eq!(written["players"][0]["seasonAvgPts"], 11.5);
}

#[test]
fn replay_missing_source_is_fatal_and_names_paths() {
    let missing = std::path::Path::new("/no/such/raw_input.json");
    let err = run_replay(Some(missing)).unwrap_err();
    assert!(err.to_string().contains("/no/such/raw_input.json"));
}
