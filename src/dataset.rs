//! Canonical data model for one harvest run.
//!
//! `Team` and `Player` carry the fields the downstream app consumes, plus a
//! flattened `extra` map so replay mode passes unknown raw fields through
//! verbatim instead of dropping them. Schedule rows stay opaque JSON — the
//! pipeline never inspects them.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A team in the canonical dataset.
///
/// `id` is the short uppercase code used everywhere else as the foreign key.
/// `logo_url` and `record` are filled in by the entity resolver and stay
/// untouched afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
    /// Unknown raw fields, passed through verbatim in replay mode.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A player in the canonical dataset.
///
/// Invariant: a non-empty `team_id` always names a real `Team::id`. The
/// cross-reference builder enforces this before assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub season_avg_pts: f64,
    #[serde(default)]
    pub last5_avg_pts: f64,
    /// Unknown raw fields, passed through verbatim in replay mode.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Team id → position → average points allowed per game (two decimals).
///
/// Every team key holds all five positions; unseen positions default to 0.0.
/// BTreeMaps keep the serialized output deterministic.
pub type DefenseMatrix = BTreeMap<String, BTreeMap<Position, f64>>;

/// One raw per-player, per-game scoring row from the replay input.
///
/// `position` is free text and is normalized before aggregation. A missing
/// `game_id` is synthesized from the row's ordinal by the aggregator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGameLogRow {
    #[serde(default)]
    pub opponent_team_id: String,
    #[serde(default)]
    pub position: String,
    /// Kept as raw JSON: non-numeric values coerce to 0.0 downstream.
    #[serde(default)]
    pub points: Value,
    #[serde(default)]
    pub game_id: Option<String>,
}

/// The final artifact of one run. Owned by the orchestrator and written
/// out as the terminal step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub defense_vs_position: DefenseMatrix,
    pub schedule: Vec<Value>,
}

/// Round to one decimal place (player scoring averages).
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places (defense matrix values).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
