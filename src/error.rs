//! Fatal error taxonomy for the harvest pipeline.
//!
//! Only unrecoverable conditions live here. Pattern misses resolve to
//! documented defaults, malformed player pages become per-entity skips,
//! and dangling team references are reset in place — none of those are
//! errors. See `pipeline` for where each variant is raised.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    /// Replay mode found neither the primary nor the fallback raw input.
    #[error("raw input not found: tried {} and {}", primary.display(), fallback.display())]
    SourceNotFound { primary: PathBuf, fallback: PathBuf },

    /// A fetch came back with a non-2xx status. Fatal for listing and
    /// roster pages; player-page callers downgrade it to a skip.
    #[error("fetch failed for {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },
}

impl ScoutError {
    pub fn source_not_found(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        ScoutError::SourceNotFound {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }
}
