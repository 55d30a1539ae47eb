//! Player detail resolution from one fetched player page.
//!
//! Composes the signal extractors into a fully populated `Player`.
//! Name and id are required: a page missing either yields no entity and
//! the caller skips that URL. Everything else degrades to documented
//! defaults (0.0 averages, PG position, empty team code, no image).

use crate::dataset::{round1, Player};
use crate::extract::candidates::resolve_image;
use crate::extract::patterns::{PLAYER_PATH_RE, TITLE_SUFFIX};
use crate::extract::scorer::{ImageKind, ScoreContext};
use crate::extract::team_code::extract_team_code;
use crate::extract::text::{flatten_text, last5_avg_pts, position_keyword, season_avg_pts};
use crate::position::{normalize_position, Position};
use scraper::{Html, Selector};

/// Resolve a player entity from a fetched page.
///
/// Returns `None` when the display name or the numeric id cannot be
/// extracted — never a partial record. A single page's failure must not
/// abort the batch; callers log and move on.
pub fn resolve_player(url: &str, html: &str) -> Option<Player> {
    let id = player_id_from_url(url)?;
    let document = Html::parse_document(html);
    let name = display_name(&document)?;

    let flat = flatten_text(&document);
    let season = round1(season_avg_pts(&flat));
    // No "Last 5" block on the page: fall back to the season average
    // rather than inventing a number.
    let last5 = round1(last5_avg_pts(&flat).unwrap_or(season));
    let position = position_keyword(&flat)
        .map(|kw| normalize_position(&kw))
        .unwrap_or(Position::PG);

    let team_id = extract_team_code(html);

    let ctx = ScoreContext {
        entity_name: &name,
        entity_id: &id,
    };
    let image_url = resolve_image(html, &document, ImageKind::Portrait, &ctx);

    Some(Player {
        id,
        name,
        team_id,
        position,
        image_url,
        season_avg_pts: season,
        last5_avg_pts: last5,
        extra: Default::default(),
    })
}

/// The numeric id embedded in the player URL path. Required.
fn player_id_from_url(url: &str) -> Option<String> {
    PLAYER_PATH_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Display name from the page-title meta field, trailing suffix stripped.
/// `og:title` is preferred; `<title>` is the fallback.
fn display_name(document: &Html) -> Option<String> {
    let raw = og_title(document).or_else(|| title_text(document))?;
    let name = raw
        .strip_suffix(TITLE_SUFFIX)
        .unwrap_or(&raw)
        .trim()
        .to_string();
    (!name.is_empty()).then_some(name)
}

fn og_title(document: &Html) -> Option<String> {
    let sel = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string())
}

fn title_text(document: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>())
}
