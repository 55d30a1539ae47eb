//! Lexicographic candidate scorer for image-like fields.
//!
//! Given competing candidate URLs for a logo or player photo, pick the
//! single best one. Sub-scores are computed independently and compared as
//! an ordered tuple — each sub-score strictly dominates everything after
//! it, so a better shape always beats a better extension, which always
//! beats a trusted CDN, which always beats a textual hint. Ties keep the
//! first-seen candidate, making the scorer stable under permutation of
//! equal-scoring inputs.

use super::patterns::{
    DIMENSIONS_RE, HEIGHT_PARAM_RE, PLACEHOLDER_TOKEN, TRUSTED_CDN_HOSTS, WIDTH_PARAM_RE,
};

/// A provisional value for one field plus nearby descriptive text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The candidate URL.
    pub value: String,
    /// Auxiliary text found near the candidate (alt text, caption,
    /// JSON-LD name). Used only for the weakest sub-score.
    pub hint: String,
}

impl Candidate {
    pub fn new(value: impl Into<String>, hint: impl Into<String>) -> Self {
        Candidate {
            value: value.into(),
            hint: hint.into(),
        }
    }
}

/// What kind of image the caller wants. Shape and extension preferences
/// differ between team crests and player portraits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Team logo: square crops and vector/lossless formats preferred.
    Crest,
    /// Player photo: portrait crops preferred, PNG over SVG.
    Portrait,
}

/// Entity context for the textual-hint sub-score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreContext<'a> {
    /// Display name of the entity the image should depict.
    pub entity_name: &'a str,
    /// The entity's id (player numeric id, team code).
    pub entity_id: &'a str,
}

/// Ordered sub-scores, compared lexicographically via the derived tuple Ord.
type SubScores = (i32, i32, i32, i32);

/// Pick the best qualifying candidate, or `None` when every candidate is
/// disqualified (empty value or the generic placeholder asset).
///
/// Iteration is in supplied order and only a strictly greater score
/// replaces the current best, so the result is deterministic and
/// first-seen-stable.
pub fn best_candidate(
    candidates: &[Candidate],
    kind: ImageKind,
    ctx: &ScoreContext<'_>,
) -> Option<String> {
    let mut best: Option<(SubScores, &Candidate)> = None;

    for candidate in candidates {
        let Some(scores) = score(candidate, kind, ctx) else {
            continue;
        };
        match &best {
            Some((current, _)) if scores <= *current => {}
            _ => best = Some((scores, candidate)),
        }
    }

    best.map(|(_, c)| c.value.clone())
}

/// Score one candidate; `None` means disqualified.
fn score(candidate: &Candidate, kind: ImageKind, ctx: &ScoreContext<'_>) -> Option<SubScores> {
    let url = candidate.value.trim();
    if url.is_empty() || url.contains(PLACEHOLDER_TOKEN) {
        return None;
    }

    Some((
        shape_score(url, kind),
        extension_score(url, kind),
        cdn_score(url),
        hint_score(candidate, ctx),
    ))
}

/// Aspect-ratio preference from `WxH` pairs or width/height query params.
fn shape_score(url: &str, kind: ImageKind) -> i32 {
    let Some(ratio) = aspect_ratio(url) else {
        return 0;
    };
    // Very wide banner crops lose to "unknown" for both kinds.
    if ratio >= 2.5 {
        return -1;
    }
    let portrait = (0.6..0.95).contains(&ratio);
    let square = (0.95..1.15).contains(&ratio);
    match kind {
        ImageKind::Portrait if portrait => 2,
        ImageKind::Portrait if square => 1,
        ImageKind::Crest if square => 2,
        ImageKind::Crest if portrait => 1,
        _ => 0,
    }
}

/// Width/height ratio parsed from the URL, if it carries dimensions.
fn aspect_ratio(url: &str) -> Option<f64> {
    if let Some(caps) = DIMENSIONS_RE.captures(url) {
        let w: f64 = caps[1].parse().ok()?;
        let h: f64 = caps[2].parse().ok()?;
        if h > 0.0 {
            return Some(w / h);
        }
    }
    let w = WIDTH_PARAM_RE
        .captures(url)
        .and_then(|c| c[1].parse::<f64>().ok())?;
    let h = HEIGHT_PARAM_RE
        .captures(url)
        .and_then(|c| c[1].parse::<f64>().ok())?;
    (h > 0.0).then(|| w / h)
}

/// File-extension preference. Crests favor vector/lossless formats;
/// portraits invert that, with PNG above SVG.
fn extension_score(url: &str, kind: ImageKind) -> i32 {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match kind {
        ImageKind::Crest => match ext.as_str() {
            "svg" => 3,
            "png" => 2,
            "webp" => 1,
            _ => 0,
        },
        ImageKind::Portrait => match ext.as_str() {
            "png" => 3,
            "jpg" | "jpeg" => 2,
            "webp" => 1,
            _ => 0,
        },
    }
}

/// Bonus for assets hosted on a known CDN.
fn cdn_score(url: &str) -> i32 {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or("");
    TRUSTED_CDN_HOSTS
        .iter()
        .any(|trusted| host.ends_with(trusted)) as i32
}

/// Weakest signal: the hint mentions the entity name, or the URL carries
/// the entity id or the lowercased first-name token.
fn hint_score(candidate: &Candidate, ctx: &ScoreContext<'_>) -> i32 {
    let name = ctx.entity_name.trim();
    if !name.is_empty() {
        let hint = candidate.hint.to_lowercase();
        if hint.contains(&name.to_lowercase()) {
            return 1;
        }
        if let Some(first) = name.split_whitespace().next() {
            if first.len() > 2 && candidate.value.to_lowercase().contains(&first.to_lowercase()) {
                return 1;
            }
        }
    }
    let id = ctx.entity_id.trim();
    if !id.is_empty() && candidate.value.contains(id) {
        return 1;
    }
    0
}
