//! Defense-vs-position aggregation.
//!
//! Turns raw per-player, per-game scoring rows into a team × position
//! matrix of average points allowed per game. The grouping is double:
//! first (team, position, game) sums all points a position scored against
//! a team in one game across every player who played it, then the mean of
//! those per-game sums is taken per (team, position).
//!
//! Rows without a game id get one synthesized from their ordinal, so
//! id-less rows for the same real game are never merged. That mirrors the
//! source data's literal behavior and stays as-is (open question for
//! product owners, see DESIGN.md).

use crate::dataset::{round2, DefenseMatrix, RawGameLogRow};
use crate::position::{normalize_position, Position, ALL_POSITIONS};
use serde_json::Value;
use std::collections::BTreeMap;

/// Build the defense matrix from raw game-log rows.
///
/// Empty input yields an empty matrix. Every team that appears gets values
/// for all five positions, defaulting to 0.0 where no rows exist.
pub fn defense_vs_position(rows: &[RawGameLogRow]) -> DefenseMatrix {
    if rows.is_empty() {
        return DefenseMatrix::new();
    }

    // Pass 1: sum points per (team, position, game).
    let mut per_game: BTreeMap<(String, Position, String), f64> = BTreeMap::new();
    for (ordinal, row) in rows.iter().enumerate() {
        let position = normalize_position(&row.position);
        let points = coerce_points(&row.points);
        let game_id = row
            .game_id
            .clone()
            .unwrap_or_else(|| ordinal.to_string());
        *per_game
            .entry((row.opponent_team_id.clone(), position, game_id))
            .or_insert(0.0) += points;
    }

    // Pass 2: mean of per-game sums per (team, position).
    let mut totals: BTreeMap<(String, Position), (f64, u32)> = BTreeMap::new();
    for ((team, position, _game), sum) in per_game {
        let entry = totals.entry((team, position)).or_insert((0.0, 0));
        entry.0 += sum;
        entry.1 += 1;
    }

    let mut matrix = DefenseMatrix::new();
    for ((team, position), (total, games)) in totals {
        let row = matrix.entry(team).or_insert_with(empty_position_row);
        row.insert(position, round2(total / f64::from(games)));
    }
    matrix
}

/// All five positions at 0.0, in canonical order.
pub fn empty_position_row() -> BTreeMap<Position, f64> {
    ALL_POSITIONS.iter().map(|p| (*p, 0.0)).collect()
}

/// Coerce a raw JSON points value to a non-negative float.
/// Numbers and numeric strings parse; everything else is 0.0.
fn coerce_points(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    n.max(0.0)
}
