//! Team-code extraction from hyperlink targets.
//!
//! Roster-specific links are the strongest signal a page belongs to a
//! team, so the roster sub-pattern is preferred over the generic team-page
//! pattern. No match yields an empty string — callers treat empty as
//! "unknown" and must never synthesize a placeholder code.

use super::patterns::{TEAM_PAGE_RE, TEAM_ROSTER_RE};

/// Extract a short uppercase team code from raw document text.
///
/// Returns `""` when neither pattern matches.
pub fn extract_team_code(html: &str) -> String {
    if let Some(caps) = TEAM_ROSTER_RE.captures(html) {
        return caps[1].to_string();
    }
    if let Some(caps) = TEAM_PAGE_RE.captures(html) {
        return caps[1].to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_link_preferred_over_generic() {
        let html = r#"
            <a href="/basketball/team/BAR/2024">history</a>
            <a href="/basketball/team/MAD/roster">roster</a>
        "#;
        assert_eq!(extract_team_code(html), "MAD");
    }

    #[test]
    fn test_generic_team_link_as_fallback() {
        let html = r#"<a href="/basketball/team/OLY/2024">Olympiacos</a>"#;
        assert_eq!(extract_team_code(html), "OLY");
    }

    #[test]
    fn test_no_match_is_empty_not_placeholder() {
        assert_eq!(extract_team_code("<a href=\"/about\">about</a>"), "");
        assert_eq!(extract_team_code(""), "");
    }
}
