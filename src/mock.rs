//! Synthetic schedule and defense filler for live-mode demos.
//!
//! The source site exposes no schedule or defensive splits, so live mode
//! pads the dataset with randomized filler shaped like the real thing.
//! Nothing here is part of the tested core beyond output shape.

use crate::dataset::{DefenseMatrix, Player, Team};
use crate::defense::empty_position_row;
use crate::position::ALL_POSITIONS;
use chrono::{Duration, Utc};
use rand::Rng;
use serde_json::{json, Value};

/// League average points used for positions with no sampled players.
const DEFAULT_LEAGUE_AVG: f64 = 12.0;

/// Round-robin upcoming games over the next month.
pub fn mock_schedule(teams: &[Team]) -> Vec<Value> {
    let start = Utc::now() + Duration::days(1);
    let mut schedule = Vec::new();

    for (i, home) in teams.iter().enumerate() {
        for (j, away) in teams.iter().enumerate() {
            if i >= j {
                continue;
            }
            let game_date = start + Duration::days(((i + j) % 30) as i64);
            schedule.push(json!({
                "homeTeamId": home.id,
                "awayTeamId": away.id,
                "gameDate": game_date.to_rfc3339(),
                "gameId": format!("{}_vs_{}_{i}_{j}", home.id, away.id),
            }));
        }
    }
    schedule
}

/// Per-team defensive numbers: the league average for each position,
/// scaled by a random factor in [0.75, 1.25], floored at 5.0 points.
pub fn mock_defense(teams: &[Team], players: &[Player]) -> DefenseMatrix {
    let league_avg = league_average_by_position(players);
    let mut rng = rand::thread_rng();

    let mut matrix = DefenseMatrix::new();
    for team in teams {
        let mut row = empty_position_row();
        for position in ALL_POSITIONS {
            let factor: f64 = rng.gen_range(0.75..1.25);
            let allowed = (league_avg[&position] * factor).max(5.0);
            row.insert(position, (allowed * 10.0).round() / 10.0);
        }
        matrix.insert(team.id.clone(), row);
    }
    matrix
}

fn league_average_by_position(
    players: &[Player],
) -> std::collections::BTreeMap<crate::position::Position, f64> {
    let mut totals = std::collections::BTreeMap::new();
    for position in ALL_POSITIONS {
        totals.insert(position, (0.0f64, 0u32));
    }
    for player in players {
        let entry = totals.entry(player.position).or_insert((0.0, 0));
        entry.0 += player.season_avg_pts;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(position, (total, count))| {
            let avg = if count > 0 {
                total / f64::from(count)
            } else {
                DEFAULT_LEAGUE_AVG
            };
            (position, avg)
        })
        .collect()
}
