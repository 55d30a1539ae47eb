//! Immutable pattern tables shared by every extractor.
//!
//! All regexes and constant tables live here, compiled once behind
//! `LazyLock` and passed around by reference. Nothing in this module is
//! ever mutated after process start.

use regex::Regex;
use std::sync::LazyLock;

/// Site root for resolving relative asset and page URLs.
pub const BASE_URL: &str = "https://www.proballers.com";

/// Fixed team-listing page that seeds live-mode discovery.
pub const LISTING_URL: &str = "https://www.proballers.com/basketball/league/177/euroleague";

/// Token identifying the site's generic placeholder asset. Any candidate
/// URL containing it is disqualified outright.
pub const PLACEHOLDER_TOKEN: &str = "default-silhouette";

/// CDN host suffixes that earn the trusted-domain bonus.
pub const TRUSTED_CDN_HOSTS: [&str; 4] = [
    "media.proballers.com",
    "images.proballers.com",
    "cdn.euroleague.net",
    "media-cdn.incrowdsports.com",
];

/// Suffix stripped from page titles when extracting player display names.
pub const TITLE_SUFFIX: &str = " | Proballers";

/// Marker preceded by a player's season scoring average in flattened text.
pub const PTS_MARKER: &str = "PTS";

/// Marker that directly follows the position keyword in flattened text.
pub const NATIONALITY_MARKER: &str = "Nationality";

/// Marker opening the last-five-games stat block in flattened text.
pub const LAST5_MARKER: &str = "Last 5";

/// Marker preceding a team's W-L record in roster page text.
pub const RECORD_MARKER: &str = "Record";

/// Player-page path carrying the numeric player id.
pub static PLAYER_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/basketball/player/(\d+)/[a-z0-9-]+").expect("valid regex"));

/// Roster-specific team path — preferred over the generic team path.
pub static TEAM_ROSTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/basketball/team/([A-Z]{2,4})/roster").expect("valid regex"));

/// Generic team-page path.
pub static TEAM_PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/basketball/team/([A-Z]{2,4})\b").expect("valid regex"));

/// Team link on the listing page: code plus display-name slug.
pub static TEAM_LISTING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href="[^"]*/basketball/team/([A-Z]{2,4})/roster"[^>]*>([^<]+)<"#)
        .expect("valid regex")
});

/// Image-like URLs on trusted hosts, scanned from raw document text.
pub static TRUSTED_ASSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"https://(?:media\.proballers\.com|images\.proballers\.com|cdn\.euroleague\.net|media-cdn\.incrowdsports\.com)[^\s"'<>]+\.(?:png|jpe?g|svg|webp)"#,
    )
    .expect("valid regex")
});

/// Inline-JSON direct keys for player photos. A match short-circuits
/// candidate scoring entirely.
pub static DIRECT_PHOTO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:photo|headshot)"\s*:\s*"([^"]+)""#).expect("valid regex")
});

/// Inline-JSON direct keys for team crests.
pub static DIRECT_CREST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:crest|logo)"\s*:\s*"([^"]+)""#).expect("valid regex"));

/// `WxH` dimension pairs embedded in asset URLs.
pub static DIMENSIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,4})x(\d{2,4})").expect("valid regex"));

/// Width / height query parameters on asset URLs.
pub static WIDTH_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]w(?:idth)?=(\d{2,4})").expect("valid regex"));
pub static HEIGHT_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]h(?:eight)?=(\d{2,4})").expect("valid regex"));

/// First float immediately preceding the PTS marker.
pub static PTS_BEFORE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*PTS").expect("valid regex"));

/// Position keyword directly before the nationality marker.
pub static POSITION_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Guard|Forward|Center)\s+Nationality").expect("valid regex"));

/// A standalone W-L digit pair.
pub static RECORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\s*-\s*(\d{1,2})\b").expect("valid regex"));
