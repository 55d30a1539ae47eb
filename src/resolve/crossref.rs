//! Player → team cross-referencing.
//!
//! Roster membership is the authoritative source for a player's team: the
//! mapping built from roster pages overrides whatever weaker guess the
//! per-page extractor made. After the override, any team reference that
//! does not name a known team is reset to empty — the dataset invariant
//! is "every non-empty teamId is a real team id", never a dangling one.

use crate::dataset::Player;
use crate::resolve::roster::discover_players;
use std::collections::{BTreeMap, BTreeSet};

/// Authoritative player-id → team-id mapping from roster scans.
#[derive(Debug, Clone, Default)]
pub struct CrossRef {
    assignments: BTreeMap<String, String>,
}

impl CrossRef {
    pub fn new() -> Self {
        CrossRef::default()
    }

    /// Record every player link on one team's roster page.
    /// Later rosters win when a player id appears on more than one.
    pub fn record_roster(&mut self, team_id: &str, roster_html: &str) {
        for player_id in discover_players(roster_html).player_ids {
            self.assignments.insert(player_id, team_id.to_string());
        }
    }

    /// Look up the authoritative team for a player id.
    pub fn team_for(&self, player_id: &str) -> Option<&str> {
        self.assignments.get(player_id).map(String::as_str)
    }

    /// Apply the mapping to resolved players: override team ids where the
    /// roster scan knows better, then clear any reference that is not
    /// among the known team ids.
    pub fn apply(&self, players: &mut [Player], known_teams: &BTreeSet<String>) {
        for player in players.iter_mut() {
            if let Some(team_id) = self.team_for(&player.id) {
                player.team_id = team_id.to_string();
            }
            if !player.team_id.is_empty() && !known_teams.contains(&player.team_id) {
                tracing::debug!(
                    player = %player.id,
                    team = %player.team_id,
                    "dropping dangling team reference"
                );
                player.team_id.clear();
            }
        }
    }
}
