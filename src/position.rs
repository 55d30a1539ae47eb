//! Position normalization — collapse free-text position labels into the
//! five canonical codes.
//!
//! The normalizer is a total function: every input maps to one of
//! `PG`, `SG`, `SF`, `PF`, `C`. Unrecognized text falls back to `PG`.
//! That fallback is a deliberate permissive default, not an error —
//! page-scraped labels are too noisy to reject.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical basketball position code.
///
/// Ordering follows the conventional lineup order (PG through C), which is
/// also the iteration order used when filling out defense matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

/// All five positions in canonical order.
pub const ALL_POSITIONS: [Position; 5] = [
    Position::PG,
    Position::SG,
    Position::SF,
    Position::PF,
    Position::C,
];

impl Position {
    /// The short uppercase code for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::PG
    }
}

/// Normalize a free-text position label into a canonical code.
///
/// Resolution order:
/// 1. exact match on the uppercased, trimmed code (`"pg "` → `PG`);
/// 2. fixed long-form table (`"Point Guard"` → `PG`);
/// 3. keyword cascade for page-scraped fragments (`"Shooting"` → `SG`,
///    generic `"Guard"` → `PG`, generic `"Forward"` → `SF`);
/// 4. `PG` when nothing matches.
pub fn normalize_position(raw: &str) -> Position {
    let upper = raw.trim().to_uppercase();

    match upper.as_str() {
        "PG" => return Position::PG,
        "SG" => return Position::SG,
        "SF" => return Position::SF,
        "PF" => return Position::PF,
        "C" => return Position::C,
        _ => {}
    }

    match upper.as_str() {
        "POINT GUARD" => return Position::PG,
        "SHOOTING GUARD" => return Position::SG,
        "SMALL FORWARD" => return Position::SF,
        "POWER FORWARD" => return Position::PF,
        "CENTER" => return Position::C,
        _ => {}
    }

    // Keyword cascade for noisy page fragments. Specific role words are
    // checked before the generic guard/forward buckets.
    let lower = upper.to_lowercase();
    if lower.contains("point") {
        Position::PG
    } else if lower.contains("shoot") {
        Position::SG
    } else if lower.contains("small") {
        Position::SF
    } else if lower.contains("power") {
        Position::PF
    } else if lower.contains("center") {
        Position::C
    } else if lower.contains("guard") {
        Position::PG
    } else if lower.contains("forward") {
        Position::SF
    } else {
        Position::PG
    }
}
