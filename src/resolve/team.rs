//! Team discovery and per-team resolution.
//!
//! Discovery scans the fixed listing page for roster links, yielding
//! `(code, display name)` pairs in document order, deduplicated by code.
//! Resolution then fills in the crest and the "W-L" record from the
//! team's roster page.

use crate::dataset::Team;
use crate::extract::candidates::resolve_image;
use crate::extract::patterns::TEAM_LISTING_RE;
use crate::extract::scorer::{ImageKind, ScoreContext};
use crate::extract::text::{flatten_text, team_record};
use scraper::Html;
use std::collections::BTreeSet;

/// Enumerate teams from the listing page body, in stable document order.
///
/// Duplicate codes keep the first occurrence. `max_teams` caps the result;
/// discovery stops as soon as the cap is reached.
pub fn discover_teams(html: &str, max_teams: Option<usize>) -> Vec<Team> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut teams = Vec::new();

    for caps in TEAM_LISTING_RE.captures_iter(html) {
        if let Some(cap) = max_teams {
            if teams.len() >= cap {
                break;
            }
        }
        let code = caps[1].to_string();
        let name = caps[2].trim().to_string();
        if name.is_empty() || !seen.insert(code.clone()) {
            continue;
        }
        teams.push(Team {
            id: code,
            name,
            logo_url: None,
            record: None,
            extra: Default::default(),
        });
    }
    teams
}

/// Populate a team's crest and record from its roster page body.
/// Both fields stay `None` when nothing qualifies.
pub fn resolve_team_page(team: &mut Team, html: &str) {
    let document = Html::parse_document(html);
    let ctx = ScoreContext {
        entity_name: &team.name,
        entity_id: &team.id,
    };
    team.logo_url = resolve_image(html, &document, ImageKind::Crest, &ctx);
    team.record = team_record(&flatten_text(&document));
}
