//! Pipeline orchestration — two linear modes, no shared state between them.
//!
//! Replay mode re-derives the dataset from a previously captured raw JSON
//! document. Live mode discovers teams from the fixed listing page,
//! resolves every roster and player page, cross-references memberships,
//! and pads the result with mock schedule/defense filler. Both modes
//! terminate in a single `Dataset`; there are no retries anywhere — a
//! failed fetch is fatal for listing/roster pages and a permanent
//! single-entity skip for player pages.

use crate::dataset::{Dataset, Player, RawGameLogRow, Team};
use crate::defense::defense_vs_position;
use crate::extract::patterns::{BASE_URL, LISTING_URL};
use crate::fetch::HttpClient;
use crate::mock::{mock_defense, mock_schedule};
use crate::resolve::crossref::CrossRef;
use crate::resolve::player::resolve_player;
use crate::resolve::roster::discover_players_at;
use crate::resolve::team::{discover_teams, resolve_team_page};
use crate::store;
use anyhow::Result;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{info, warn};

/// Knobs for live-mode discovery.
#[derive(Debug, Clone)]
pub struct LiveOptions {
    /// Stop team discovery after this many teams.
    pub max_teams: Option<usize>,
    /// Stop collecting player pages after this many; no further player
    /// fetches occur once the cap is reached.
    pub max_players: Option<usize>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Bounded concurrency for player-page fetches. Results are merged in
    /// discovery order regardless.
    pub concurrency: usize,
    /// Site root for roster/player URLs. Overridable for testing.
    pub site_root: String,
    /// Team-listing page seeding discovery. Overridable for testing.
    pub listing_url: String,
}

impl Default for LiveOptions {
    fn default() -> Self {
        LiveOptions {
            max_teams: None,
            max_players: None,
            timeout_ms: 15_000,
            concurrency: 4,
            site_root: BASE_URL.to_string(),
            listing_url: LISTING_URL.to_string(),
        }
    }
}

/// Replay mode: rebuild the dataset from a captured raw JSON document.
///
/// `raw_path` overrides the primary/fallback resolution when given.
pub fn run_replay(raw_path: Option<&Path>) -> Result<Dataset> {
    let path = store::resolve_raw_path(raw_path)?;
    info!("replaying raw input from {}", path.display());
    let raw = store::load_raw(&path)?;
    Ok(build_replay_dataset(&raw))
}

/// Assemble a dataset from one raw JSON document. Pure: `teams`,
/// `schedule`, and `players` pass through verbatim; only the game logs
/// are aggregated.
pub fn build_replay_dataset(raw: &Value) -> Dataset {
    let teams: Vec<Team> = typed_rows(raw, "teams");
    let players: Vec<Player> = typed_rows(raw, "players");
    let schedule: Vec<Value> = raw
        .get("schedule")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    let logs: Vec<RawGameLogRow> = typed_rows(raw, "player_game_logs");
    let defense = defense_vs_position(&logs);
    info!(
        teams = teams.len(),
        players = players.len(),
        log_rows = logs.len(),
        "replay dataset assembled"
    );

    Dataset {
        teams,
        players,
        defense_vs_position: defense,
        schedule,
    }
}

/// Deserialize an array field row by row; a malformed row is skipped with
/// a warning instead of aborting the batch or emitting a blank record.
fn typed_rows<T: serde::de::DeserializeOwned>(raw: &Value, key: &str) -> Vec<T> {
    raw.get(key)
        .and_then(|v| v.as_array())
        .map(|rows| {
            rows.iter()
                .filter_map(|row| match serde_json::from_value(row.clone()) {
                    Ok(typed) => Some(typed),
                    Err(e) => {
                        warn!("skipping malformed {key} row: {e}");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Live mode: discover, resolve, cross-reference, and assemble.
pub async fn run_live(opts: &LiveOptions) -> Result<Dataset> {
    let client = HttpClient::new(opts.timeout_ms);

    // Phase 1: team discovery from the fixed listing page. Fatal on failure.
    let listing = client.get_ok(&opts.listing_url).await?;
    let mut teams = discover_teams(&listing.body, opts.max_teams);
    info!(teams = teams.len(), "discovered teams from listing page");

    // Phase 2: roster pass — resolve each team's crest/record, feed the
    // cross-reference map, and collect the player worklist. Roster fetch
    // failures are fatal; the roster order (and the sorted per-roster URL
    // sets) fix the overall player order.
    let mut xref = CrossRef::new();
    let mut worklist: Vec<String> = Vec::new();
    let mut queued: BTreeSet<String> = BTreeSet::new();

    let site_root = opts.site_root.trim_end_matches('/');
    for team in teams.iter_mut() {
        let roster_url = format!("{site_root}/basketball/team/{}/roster", team.id);
        let roster = client.get_ok(&roster_url).await?;
        resolve_team_page(team, &roster.body);
        xref.record_roster(&team.id, &roster.body);

        for url in discover_players_at(&roster.body, site_root).worklist() {
            if let Some(cap) = opts.max_players {
                if worklist.len() >= cap {
                    break;
                }
            }
            if queued.insert(url.clone()) {
                worklist.push(url);
            }
        }
    }
    info!(players = worklist.len(), "player worklist assembled");

    // Phase 3: player resolution with bounded, order-preserving
    // concurrency. A single page's failure is an isolated skip.
    let responses = client.get_many_ordered(&worklist, opts.concurrency).await;
    let mut players: Vec<Player> = Vec::new();
    for (url, response) in worklist.iter().zip(responses) {
        match response {
            Ok(resp) if resp.is_success() => match resolve_player(url, &resp.body) {
                Some(player) => players.push(player),
                None => warn!("skipping malformed player page: {url}"),
            },
            Ok(resp) => warn!("skipping player page {url}: HTTP {}", resp.status),
            Err(e) => warn!("skipping player page {url}: {e:#}"),
        }
    }

    // Phase 4: roster membership is authoritative; dangling refs reset.
    let known: BTreeSet<String> = teams.iter().map(|t| t.id.clone()).collect();
    xref.apply(&mut players, &known);

    // Phase 5: filler schedule and defensive splits, then assembly.
    let schedule = mock_schedule(&teams);
    let defense = mock_defense(&teams, &players);
    info!(
        teams = teams.len(),
        players = players.len(),
        games = schedule.len(),
        "live dataset assembled"
    );

    Ok(Dataset {
        teams,
        players,
        defense_vs_position: defense,
        schedule,
    })
}
