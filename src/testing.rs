//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test builders to avoid
//! duplication.

#![doc(hidden)]

use crate::types::{FaqEntry, FaqId};

/// Create a minimal active entry: title and keywords, nothing else.
///
/// This is the canonical builder used across all tests.
pub fn make_entry(id: u32, title: &str, keywords: &str) -> FaqEntry {
    FaqEntry {
        id: FaqId(id),
        title: title.to_string(),
        question: String::new(),
        answer: String::new(),
        keywords: keywords.to_string(),
        category: String::new(),
        searchable_text: String::new(),
        view_count: 0,
        is_active: true,
    }
}

/// Create an entry with every field explicit.
#[allow(clippy::too_many_arguments)]
pub fn make_entry_full(
    id: u32,
    title: &str,
    question: &str,
    answer: &str,
    keywords: &str,
    category: &str,
    view_count: u64,
    is_active: bool,
) -> FaqEntry {
    FaqEntry {
        id: FaqId(id),
        title: title.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        keywords: keywords.to_string(),
        category: category.to_string(),
        searchable_text: String::new(),
        view_count,
        is_active,
    }
}

/// Create an entry with a category.
pub fn make_entry_with_category(id: u32, title: &str, category: &str) -> FaqEntry {
    FaqEntry {
        category: category.to_string(),
        ..make_entry(id, title, "")
    }
}

/// Create an entry with a view count, for popularity ordering.
pub fn make_entry_viewed(id: u32, title: &str, view_count: u64) -> FaqEntry {
    FaqEntry {
        view_count,
        ..make_entry(id, title, "")
    }
}
