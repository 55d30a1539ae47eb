//! Candidate assembly — gather every plausible image URL in a document.
//!
//! Sources are walked in a fixed priority order:
//! 1. an inline-JSON "direct" key (`photo`/`headshot` for portraits,
//!    `crest`/`logo` for crests) anywhere in the raw text — the first hit
//!    short-circuits scoring entirely and is returned JSON-unescaped;
//! 2. JSON-LD blocks: `ImageObject` entries and `image`/`logo` fields,
//!    with the owning object's name as the hint;
//! 3. the page-level `og:image` preview meta tag;
//! 4. a raw-text scan for trusted-CDN asset URLs.
//!
//! The combined list is deduplicated preserving first occurrence, so the
//! downstream scorer's first-seen tie-break respects source priority.

use super::patterns::{BASE_URL, DIRECT_CREST_RE, DIRECT_PHOTO_RE, TRUSTED_ASSET_RE};
use super::scorer::{best_candidate, Candidate, ImageKind, ScoreContext};
use scraper::{Html, Selector};
use serde_json::Value;
use std::collections::HashSet;
use url::Url;

/// Outcome of candidate assembly for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCandidates {
    /// A direct inline-JSON key matched; no scoring takes place.
    Direct(String),
    /// Everything else: candidates for the scorer, in priority order.
    Scored(Vec<Candidate>),
}

/// Resolve the best image URL for an entity from one document.
///
/// Composes [`gather_image_candidates`] with the lexicographic scorer.
/// Returns `None` when nothing qualifies.
pub fn resolve_image(
    html: &str,
    document: &Html,
    kind: ImageKind,
    ctx: &ScoreContext<'_>,
) -> Option<String> {
    match gather_image_candidates(html, document, kind) {
        ImageCandidates::Direct(url) => Some(url),
        ImageCandidates::Scored(cands) => best_candidate(&cands, kind, ctx),
    }
}

/// Assemble image candidates from all sources in fixed priority order.
pub fn gather_image_candidates(html: &str, document: &Html, kind: ImageKind) -> ImageCandidates {
    // Source (a): direct inline-JSON key — short-circuits everything.
    let direct_re = match kind {
        ImageKind::Portrait => &*DIRECT_PHOTO_RE,
        ImageKind::Crest => &*DIRECT_CREST_RE,
    };
    if let Some(caps) = direct_re.captures(html) {
        return ImageCandidates::Direct(unescape_json_string(&caps[1]));
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<Candidate> = Vec::new();
    let mut push = |value: String, hint: String, out: &mut Vec<Candidate>| {
        let value = absolutize(&value);
        if seen.insert(value.clone()) {
            out.push(Candidate::new(value, hint));
        }
    };

    // Source (b): JSON-LD image objects.
    for (value, hint) in jsonld_images(document) {
        push(value, hint, &mut out);
    }

    // Source (c): page-level preview image.
    if let Some(content) = meta_content(document, r#"meta[property="og:image"]"#) {
        let hint = meta_content(document, r#"meta[property="og:title"]"#).unwrap_or_default();
        push(content, hint, &mut out);
    }

    // Source (d): trusted asset URLs anywhere in the raw text.
    for m in TRUSTED_ASSET_RE.find_iter(html) {
        push(m.as_str().to_string(), String::new(), &mut out);
    }

    ImageCandidates::Scored(out)
}

/// Undo JSON string escaping (`\/`, `\uXXXX`, ...) on a captured value.
fn unescape_json_string(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{raw}\""))
        .unwrap_or_else(|_| raw.replace("\\/", "/"))
}

/// Resolve a possibly-relative asset URL against the site root.
fn absolutize(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        return value.to_string();
    }
    Url::parse(BASE_URL)
        .and_then(|base| base.join(value))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// First `content` attribute matching a meta selector.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string())
}

/// Collect `(url, hint)` pairs from every JSON-LD block in the document.
fn jsonld_images(document: &Html) -> Vec<(String, String)> {
    let mut found = Vec::new();
    let Ok(sel) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return found;
    };
    for element in document.select(&sel) {
        let text = element.inner_html();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if let Ok(value) = serde_json::from_str::<Value>(text) {
            walk_jsonld(&value, "", &mut found);
        }
    }
    found
}

/// Recursive JSON-LD walk: ImageObject entries plus `image`/`logo` fields
/// of any object, hinted by the nearest `name`/`caption`.
fn walk_jsonld(value: &Value, parent_name: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            let name = map
                .get("name")
                .or_else(|| map.get("caption"))
                .and_then(|v| v.as_str())
                .unwrap_or(parent_name);

            let is_image_object = map.get("@type").and_then(|t| t.as_str()) == Some("ImageObject");
            if is_image_object {
                if let Some(url) = map
                    .get("contentUrl")
                    .or_else(|| map.get("url"))
                    .and_then(|v| v.as_str())
                {
                    out.push((url.to_string(), name.to_string()));
                }
            }

            for key in ["image", "logo"] {
                if let Some(field) = map.get(key) {
                    collect_image_field(field, name, out);
                }
            }

            for (key, child) in map {
                // image/logo handled above; @graph and nested objects recurse.
                if key.as_str() != "image" && key.as_str() != "logo" {
                    walk_jsonld(child, name, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_jsonld(item, parent_name, out);
            }
        }
        _ => {}
    }
}

/// An `image`/`logo` field may be a string, an object, or an array of either.
fn collect_image_field(field: &Value, hint: &str, out: &mut Vec<(String, String)>) {
    match field {
        Value::String(s) => out.push((s.clone(), hint.to_string())),
        Value::Object(map) => {
            if let Some(url) = map
                .get("contentUrl")
                .or_else(|| map.get("url"))
                .and_then(|v| v.as_str())
            {
                let hint = map
                    .get("name")
                    .or_else(|| map.get("caption"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(hint);
                out.push((url.to_string(), hint.to_string()));
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_image_field(item, hint, out);
            }
        }
        _ => {}
    }
}
