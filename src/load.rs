//! Loading FAQ batches from exported JSON.
//!
//! Two shapes are accepted, matching what the help-desk backend emits:
//! a bare array of entries, or the search endpoint's envelope
//! `{"count": N, "faqs": [...]}`. Envelope fields other than `faqs` are
//! ignored.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::index::build_index;
use crate::types::{FaqEntry, FaqIndex, SnapshotError};

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryPayload {
    Entries(Vec<FaqEntry>),
    Envelope { faqs: Vec<FaqEntry> },
}

/// Parse a JSON document into an entry batch.
pub fn parse_entries(json: &str) -> Result<Vec<FaqEntry>, serde_json::Error> {
    let payload: EntryPayload = serde_json::from_str(json)?;
    Ok(match payload {
        EntryPayload::Entries(entries) => entries,
        EntryPayload::Envelope { faqs } => faqs,
    })
}

/// Read an entry batch from a JSON file.
pub fn load_entries(path: &Path) -> Result<Vec<FaqEntry>, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let entries = parse_entries(&json).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), entries = entries.len(), "loaded FAQ batch");
    Ok(entries)
}

/// Read a JSON file and build a snapshot from it in one step.
pub fn load_index(path: &Path) -> Result<FaqIndex, LoadError> {
    let entries = load_entries(path)?;
    build_index(entries).map_err(|source| LoadError::Snapshot {
        path: path.to_owned(),
        source,
    })
}

/// Failures while turning a file into a snapshot.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Snapshot {
        path: PathBuf,
        source: SnapshotError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            LoadError::Parse { path, source } => {
                write!(f, "invalid FAQ data in {}: {source}", path.display())
            }
            LoadError::Snapshot { path, source } => {
                write!(f, "invalid FAQ batch in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Snapshot { source, .. } => Some(source),
        }
    }
}
