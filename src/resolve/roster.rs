//! Roster-page player discovery.
//!
//! A discovery call is a pure function of page content: it enumerates the
//! numeric player ids and the player-page URLs found in hyperlinks
//! matching the fixed player-path pattern. Both come back as sets, so
//! repeated parses of the same page are idempotent and duplicate-free;
//! the worklist walks the URL set in sorted order before fetching.

use crate::extract::patterns::{BASE_URL, PLAYER_PATH_RE};
use std::collections::BTreeSet;

/// Player ids and page URLs discovered on one roster page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterDiscovery {
    /// Numeric player ids, deduplicated.
    pub player_ids: BTreeSet<String>,
    /// Absolute player-page URLs, deduplicated.
    pub player_urls: BTreeSet<String>,
}

impl RosterDiscovery {
    /// The fetch worklist: URLs in stable sorted order.
    pub fn worklist(&self) -> Vec<String> {
        self.player_urls.iter().cloned().collect()
    }
}

/// Enumerate player links in a roster page body, resolving relative paths
/// against the canonical site root.
pub fn discover_players(html: &str) -> RosterDiscovery {
    discover_players_at(html, BASE_URL)
}

/// Same as [`discover_players`] with an explicit site root (used when the
/// pipeline runs against a non-default host).
pub fn discover_players_at(html: &str, site_root: &str) -> RosterDiscovery {
    let mut discovery = RosterDiscovery::default();
    for caps in PLAYER_PATH_RE.captures_iter(html) {
        let path = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        let id = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if id.is_empty() {
            continue;
        }
        discovery.player_ids.insert(id.to_string());
        discovery
            .player_urls
            .insert(format!("{}{path}", site_root.trim_end_matches('/')));
    }
    discovery
}
