// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the FAQ snapshot.
//!
//! Everything downstream of this module works against two shapes:
//!
//! - [`FaqEntry`] is one published FAQ row, deserialized straight from the
//!   wire format the help-desk backend emits.
//! - [`FaqIndex`] is an immutable snapshot over a batch of entries, with
//!   lowercase text precomputed once so query-time code never re-folds.
//!
//! ```text
//!   Vec<FaqEntry> ── build_index ──▶ FaqIndex ── search / popular / stats
//!                                       │
//!                                       └── EntryText (lowercased, aligned)
//! ```
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **FAQ_IDS_UNIQUE**: no two entries in an index share a [`FaqId`].
//!   `build_index` rejects violating batches with [`SnapshotError`].
//! - **TEXTS_ALIGNED**: `entries[i]` and `texts[i]` describe the same FAQ.
//!   The arrays must line up. Off-by-one here means garbage results.
//! - **ACTIVE_ORDERED**: `active` holds positions of active entries in
//!   entry order, strictly increasing.
//!
//! Construction lives in [`crate::index`]; nothing mutates an index after
//! it is built.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::keyword_tokens;

// =============================================================================
// NEWTYPES: Type-safe identifiers
// =============================================================================

/// Type-safe FAQ identifier.
///
/// Wraps the backend's integer primary key so an entry id cannot be confused
/// with a position inside the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FaqId(pub u32);

impl FaqId {
    /// Create an id from the raw backend key.
    #[inline]
    pub fn new(id: u32) -> Self {
        FaqId(id)
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for FaqId {
    fn from(id: u32) -> Self {
        FaqId(id)
    }
}

impl From<FaqId> for u32 {
    fn from(id: FaqId) -> Self {
        id.0
    }
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ENTRY TYPES
// =============================================================================

/// One FAQ as published by the help-desk backend.
///
/// Field names follow the backend's JSON casing so an exported FAQ list loads
/// without a translation layer. Nullable text columns arrive as `null` and
/// fold to the empty string on the way in; an empty `category` is the
/// "uncategorized" sentinel everywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: FaqId,
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub question: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub answer: String,
    /// Comma-separated keyword list, e.g. `"password, login, reset"`.
    #[serde(default, deserialize_with = "nullable_string")]
    pub keywords: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub category: String,
    /// Pre-joined haystack for the filter predicate. Left empty, the index
    /// derives it from the other text fields at build time.
    #[serde(default, deserialize_with = "nullable_string")]
    pub searchable_text: String,
    #[serde(default)]
    pub view_count: u64,
    /// Unpublished entries stay in the snapshot for reporting but are
    /// invisible to search.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Accepts `null` where the backend schema allows it.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FaqEntry {
    /// The short text shown under the title in a result card.
    ///
    /// Cards preview the question body, so scoring and highlighting treat
    /// the question as "the preview".
    #[inline]
    pub fn preview(&self) -> &str {
        &self.question
    }

    /// Individual keywords, trimmed, in declaration order.
    pub fn keyword_list(&self) -> Vec<&str> {
        keyword_tokens(&self.keywords).collect()
    }

    /// True when the entry has no category assigned.
    #[inline]
    pub fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }
}

/// Lowercase projections of one entry, computed once at build time.
///
/// **Invariant**: TEXTS_ALIGNED. An `EntryText` never travels alone; it
/// lives in the index slot of the entry it was derived from.
#[derive(Debug, Clone)]
pub(crate) struct EntryText {
    /// Haystack for the filter predicate.
    pub(crate) searchable: String,
    pub(crate) title: String,
    pub(crate) preview: String,
    pub(crate) keywords: String,
    pub(crate) category: String,
    /// Lowercased keyword tokens, for the exact-match bonus.
    pub(crate) keyword_tokens: Vec<String>,
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Immutable snapshot of the FAQ corpus.
///
/// Built once from a batch of entries, then shared freely. All query
/// operations take `&FaqIndex` and allocate only their results, and the
/// struct owns plain data, so a built index is `Send + Sync` without locks.
///
/// This is the whole engine state. There is no incremental update; a changed
/// corpus means a new snapshot.
#[derive(Debug, Clone)]
pub struct FaqIndex {
    pub(crate) entries: Vec<FaqEntry>,
    pub(crate) texts: Vec<EntryText>,
    /// Positions of active entries, in entry order.
    pub(crate) active: Vec<usize>,
}

impl FaqIndex {
    /// All entries in the snapshot, active or not, in build order.
    #[inline]
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Number of entries in the snapshot, active or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of active entries.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Active entries with their positions, in entry order.
    pub(crate) fn iter_active(&self) -> impl Iterator<Item = (usize, &FaqEntry)> {
        self.active.iter().map(move |&pos| (pos, &self.entries[pos]))
    }

    /// Precomputed text for the entry at `pos`.
    ///
    /// TEXTS_ALIGNED guarantees the slot matches `entries[pos]`.
    #[inline]
    pub(crate) fn text(&self, pos: usize) -> &EntryText {
        &self.texts[pos]
    }

    /// Look up an entry by id.
    pub fn entry_by_id(&self, id: FaqId) -> Option<&FaqEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

// =============================================================================
// SEARCH HITS
// =============================================================================

/// One search result: the matched entry plus presentation derived from it.
///
/// `title_marked` and `preview_marked` carry the entry's title and preview
/// with every query occurrence wrapped in mark tags (see [`crate::highlight`]).
/// With an empty query they equal the originals byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub entry: FaqEntry,
    /// Additive relevance score. Zero is possible for category-only matches.
    pub score: u32,
    pub title_marked: String,
    pub preview_marked: String,
}

impl SearchHit {
    #[inline]
    pub fn id(&self) -> FaqId {
        self.entry.id
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Violations detected while building a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// FAQ_IDS_UNIQUE was violated by the input batch.
    DuplicateId { id: FaqId },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::DuplicateId { id } => {
                write!(f, "duplicate FAQ id {id} in snapshot input")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_json(body: &str) -> FaqEntry {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_faq_id_roundtrip() {
        let id = FaqId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(FaqId::from(42u32), id);
        assert_eq!(u32::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_entry_deserializes_backend_shape() {
        let entry = entry_json(
            r#"{
                "id": 7,
                "title": "Password reset",
                "question": "How do I reset my password?",
                "answer": "Use the reset link on the login page.",
                "keywords": "password, reset",
                "category": "account",
                "view_count": 12,
                "is_active": true
            }"#,
        );
        assert_eq!(entry.id, FaqId(7));
        assert_eq!(entry.preview(), "How do I reset my password?");
        assert_eq!(entry.keyword_list(), vec!["password", "reset"]);
        assert!(!entry.is_uncategorized());
        assert_eq!(entry.view_count, 12);
        assert!(entry.is_active);
    }

    #[test]
    fn test_entry_null_and_missing_fields_fold_to_defaults() {
        let entry = entry_json(
            r#"{
                "id": 1,
                "title": "Bare",
                "category": null,
                "keywords": null
            }"#,
        );
        assert_eq!(entry.question, "");
        assert_eq!(entry.answer, "");
        assert_eq!(entry.keywords, "");
        assert_eq!(entry.searchable_text, "");
        assert!(entry.is_uncategorized());
        assert!(entry.is_active);
        assert_eq!(entry.view_count, 0);
    }

    #[test]
    fn test_keyword_list_skips_blank_segments() {
        let entry =
            entry_json(r#"{"id": 2, "title": "k", "keywords": " login , , vpn access "}"#);
        assert_eq!(entry.keyword_list(), vec!["login", "vpn access"]);
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::DuplicateId { id: FaqId(3) };
        assert_eq!(err.to_string(), "duplicate FAQ id 3 in snapshot input");
    }
}
