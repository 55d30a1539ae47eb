//! Flattened-text helpers for marker-relative extraction.
//!
//! Several player-page fields live in loose runs of visible text rather
//! than in addressable markup ("14.2 PTS", "Guard Nationality France").
//! These helpers flatten a document to whitespace-normalized text and scan
//! it with the fixed marker patterns from `patterns`.

use super::patterns::{
    LAST5_MARKER, POSITION_KEYWORD_RE, PTS_BEFORE_MARKER_RE, RECORD_MARKER, RECORD_RE,
};
use scraper::{Html, Selector};

/// Collect all visible text under `<body>`, whitespace-normalized.
pub fn flatten_text(document: &Html) -> String {
    if let Ok(sel) = Selector::parse("body") {
        if let Some(body) = document.select(&sel).next() {
            return body
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
        }
    }
    String::new()
}

/// First float immediately preceding the "PTS" marker, or 0.0.
pub fn season_avg_pts(flat: &str) -> f64 {
    PTS_BEFORE_MARKER_RE
        .captures(flat)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Float preceding "PTS" inside the "Last 5" block, if the block exists.
pub fn last5_avg_pts(flat: &str) -> Option<f64> {
    let start = flat.find(LAST5_MARKER)?;
    PTS_BEFORE_MARKER_RE
        .captures(&flat[start..])
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Position keyword (Guard / Forward / Center) directly before the
/// "Nationality" marker. The caller normalizes; absence means default.
pub fn position_keyword(flat: &str) -> Option<String> {
    POSITION_KEYWORD_RE
        .captures(flat)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// A team's "W-L" record string from roster text. Prefers the first digit
/// pair after the "Record" marker, falling back to the first standalone
/// pair anywhere in the text.
pub fn team_record(flat: &str) -> Option<String> {
    let haystack = match flat.find(RECORD_MARKER) {
        Some(idx) => &flat[idx..],
        None => flat,
    };
    RECORD_RE
        .captures(haystack)
        .map(|c| format!("{}-{}", &c[1], &c[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(html: &str) -> String {
        flatten_text(&Html::parse_document(html))
    }

    #[test]
    fn test_flatten_normalizes_whitespace() {
        let text = flat("<html><body><div>14.2\n  <span>PTS</span></div></body></html>");
        assert_eq!(text, "14.2 PTS");
    }

    #[test]
    fn test_season_avg_before_marker() {
        assert_eq!(season_avg_pts("Averages 14.2 PTS 4.1 REB"), 14.2);
        assert_eq!(season_avg_pts("no points here"), 0.0);
    }

    #[test]
    fn test_last5_requires_marker() {
        let flat = "Season 14.2 PTS Last 5 games 18.6 PTS 3.0 REB";
        assert_eq!(last5_avg_pts(flat), Some(18.6));
        assert_eq!(last5_avg_pts("Season 14.2 PTS"), None);
    }

    #[test]
    fn test_position_keyword_before_nationality() {
        let flat = "Height 1.96m Guard Nationality France Age 23";
        assert_eq!(position_keyword(flat).as_deref(), Some("Guard"));
        assert_eq!(position_keyword("Guard of honor"), None);
    }

    #[test]
    fn test_team_record_prefers_marker() {
        let flat = "Founded 1931 Record 12-4 Arena 15-000";
        assert_eq!(team_record(flat).as_deref(), Some("12-4"));
        assert_eq!(team_record("standings 8-9 overall").as_deref(), Some("8-9"));
        assert_eq!(team_record("no numbers"), None);
    }
}
