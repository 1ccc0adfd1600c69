//! FAQ snapshot construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **FAQ_IDS_UNIQUE**: `build_index` rejects batches with duplicate ids
//! 2. **TEXTS_ALIGNED**: `texts[i]` is derived from `entries[i]`, always
//! 3. **ACTIVE_ORDERED**: active positions are strictly increasing
//! 4. **CASE_FOLDED**: every string in an [`EntryText`] is lowercased here,
//!    once; query-time code compares without folding
//!
//! # Searchable text
//!
//! The filter predicate runs against one haystack per entry. When the
//! backend ships a precomputed `searchable_text` it is used as-is (folded);
//! otherwise the haystack is derived from title, question, answer, and
//! keywords joined with single spaces. Category is not part of the
//! haystack, the category filter compares the field directly.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{EntryText, FaqEntry, FaqIndex, SnapshotError};
use crate::utils::keyword_tokens;

/// Build an immutable snapshot from a batch of entries.
///
/// Entry order is preserved; it is the tie-break order for every ranked
/// operation downstream. Inactive entries stay in the snapshot (reports
/// count them) but are skipped by search, popular, and category listings.
pub fn build_index(entries: Vec<FaqEntry>) -> Result<FaqIndex, SnapshotError> {
    // INVARIANT: FAQ_IDS_UNIQUE
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(entry.id) {
            return Err(SnapshotError::DuplicateId { id: entry.id });
        }
    }

    // INVARIANT: TEXTS_ALIGNED
    // One projection per entry, same order, built in one pass.
    let texts: Vec<EntryText> = entries.iter().map(entry_text).collect();

    // INVARIANT: ACTIVE_ORDERED
    let active: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_active)
        .map(|(pos, _)| pos)
        .collect();

    debug!(
        total = entries.len(),
        active = active.len(),
        "built FAQ snapshot"
    );

    Ok(FaqIndex {
        entries,
        texts,
        active,
    })
}

/// Lowercase projections for one entry.
fn entry_text(entry: &FaqEntry) -> EntryText {
    let searchable = if entry.searchable_text.is_empty() {
        derive_searchable(entry)
    } else {
        entry.searchable_text.to_lowercase()
    };
    let keywords = entry.keywords.to_lowercase();
    let keyword_tokens = keyword_tokens(&keywords).map(str::to_owned).collect();

    EntryText {
        searchable,
        title: entry.title.to_lowercase(),
        preview: entry.preview().to_lowercase(),
        keywords,
        category: entry.category.to_lowercase(),
        keyword_tokens,
    }
}

/// Fallback haystack: title, question, answer, keywords.
fn derive_searchable(entry: &FaqEntry) -> String {
    let mut haystack = String::with_capacity(
        entry.title.len() + entry.question.len() + entry.answer.len() + entry.keywords.len() + 3,
    );
    for part in [
        entry.title.as_str(),
        entry.question.as_str(),
        entry.answer.as_str(),
        entry.keywords.as_str(),
    ] {
        if part.is_empty() {
            continue;
        }
        if !haystack.is_empty() {
            haystack.push(' ');
        }
        haystack.push_str(part);
    }
    haystack.to_lowercase()
}
