//! Raw-input loading and dataset output.
//!
//! Replay mode reads one raw JSON document; the path resolves to the
//! primary location first, then a fixed fallback, and missing both is the
//! only fatal file error in the system. Output is pretty-printed JSON with
//! parent directories created on demand.

use crate::dataset::Dataset;
use crate::error::ScoutError;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Primary raw-input location, matching the upstream capture layout.
pub const PRIMARY_RAW_PATH: &str = "scraper/raw_input.json";

/// Fixed fallback raw-input location.
pub const FALLBACK_RAW_PATH: &str = "data/raw_input.json";

/// Default dataset output location.
pub const DEFAULT_OUTPUT_PATH: &str = "scraper/euro_data.json";

/// Resolve the raw-input path: an explicit override wins; otherwise try
/// the primary location, then the fallback. Neither existing is fatal and
/// the error names both paths.
pub fn resolve_raw_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(ScoutError::source_not_found(path, FALLBACK_RAW_PATH).into());
    }
    let primary = PathBuf::from(PRIMARY_RAW_PATH);
    if primary.exists() {
        return Ok(primary);
    }
    let fallback = PathBuf::from(FALLBACK_RAW_PATH);
    if fallback.exists() {
        return Ok(fallback);
    }
    Err(ScoutError::source_not_found(primary, fallback).into())
}

/// Load a raw JSON object from disk.
pub fn load_raw(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read raw input: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse raw input: {}", path.display()))
}

/// Write the dataset as pretty-printed JSON, creating parent directories.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output dir: {}", parent.display()))?;
        }
    }
    let text = serde_json::to_string_pretty(dataset).context("failed to serialize dataset")?;
    fs::write(path, text).with_context(|| format!("failed to write dataset: {}", path.display()))
}

/// Pure projection of the raw document's `standings` rows. Missing key
/// yields an empty vector; no extraction logic lives here.
pub fn get_standings(raw: &Value) -> Vec<Value> {
    array_field(raw, "standings")
}

/// Pure projection of the raw document's `player_stats` rows.
pub fn get_player_stats(raw: &Value) -> Vec<Value> {
    array_field(raw, "player_stats")
}

fn array_field(raw: &Value, key: &str) -> Vec<Value> {
    raw.get(key)
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}
