//! Output records and the catalog file writer.

use chrono::{DateTime, Utc};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::category::OutputCategory;
use crate::channels::StreamEntry;
use crate::errors::LiveError;

const SLUG_MAX_LEN: usize = 60;

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// One entry of the catalog consumed by the add-on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    pub id: String,
    pub name: String,
    pub streams: Vec<StreamEntry>,
    pub logo: Option<String>,
    pub category: OutputCategory,
    pub description: String,
    /// UTC, second precision, `Z` suffix
    pub event_start: String,
}

/// `<slug of title, max 60 chars>-<YYYYMMDD>`
pub fn build_event_id(title: &str, start: DateTime<Utc>) -> String {
    let lower = title.to_lowercase();
    let slug = NON_ALNUM_RE.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');
    // slug is ASCII only, byte slicing is safe
    let slug = &slug[..slug.len().min(SLUG_MAX_LEN)];
    format!("{}-{}", slug, start.format("%Y%m%d"))
}

pub fn format_event_start(start: DateTime<Utc>) -> String {
    start.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Serialized catalog: 2-space indented JSON array, non-ASCII kept as is
pub fn render_catalog(events: &[NormalizedEvent]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(events)
}

/// Writes the catalog, creating parent directories. Overwrites any previous file.
pub fn write_catalog(path: &Path, events: &[NormalizedEvent]) -> Result<(), LiveError> {
    let write_err = |e: &dyn std::fmt::Display| LiveError::Write(path.to_path_buf(), e.to_string());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_err(&e))?;
    }
    let content = render_catalog(events).map_err(|e| write_err(&e))?;
    fs::write(path, content).map_err(|e| write_err(&e))?;
    info!("Wrote {} events to {}", events.len(), path.display());
    Ok(())
}
