// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reversible match highlighting.
//!
//! Search results carry their title and preview with every query occurrence
//! wrapped in [`MARK_OPEN`]/[`MARK_CLOSE`]. The marking is pure string
//! annotation over the original entry text; the entry itself is never
//! touched, so "clearing" a search is just rendering the unmarked fields
//! again.
//!
//! The query is matched as a literal. [`regex::escape`] neutralizes every
//! metacharacter before the pattern is built, so a query like `a.b*c` only
//! matches the exact substring `a.b*c`, never `aXbYYc`.
//!
//! # Round-trip law
//!
//! For any text without literal mark tags:
//!
//! ```text
//! strip_marks(highlighter.mark(text)) == text
//! ```
//!
//! Marking inserts tags around slices of the original and changes nothing
//! else, matched slices keep their original casing.

use regex::{Regex, RegexBuilder};

/// Opening emphasis marker inserted around matches.
pub const MARK_OPEN: &str = "<mark>";

/// Closing emphasis marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Byte range of one query occurrence within a marked text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

/// Compiled, reusable matcher for one query.
///
/// Compiling the pattern once per search keeps highlighting O(text) per
/// entry instead of O(query compilation) per entry.
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// `None` marks nothing: empty query, or a pattern the engine refused.
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build a matcher for a normalized query.
    ///
    /// An empty query yields an inert highlighter whose [`mark`] is the
    /// identity function.
    ///
    /// [`mark`]: Highlighter::mark
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Highlighter { pattern: None };
        }
        // The pattern is an escaped literal, so build can only fail on the
        // engine's size limit; a query that long marks nothing.
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok();
        Highlighter { pattern }
    }

    /// True when this highlighter will never mark anything.
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.pattern.is_none()
    }

    /// Wrap every case-insensitive occurrence of the query in mark tags.
    ///
    /// Matched slices are copied verbatim, original casing included.
    /// Occurrences are non-overlapping, leftmost first.
    pub fn mark(&self, text: &str) -> String {
        let pattern = match &self.pattern {
            Some(pattern) => pattern,
            None => return text.to_owned(),
        };

        let mut marked = String::with_capacity(text.len() + MARK_OPEN.len() + MARK_CLOSE.len());
        let mut tail = 0;
        for found in pattern.find_iter(text) {
            marked.push_str(&text[tail..found.start()]);
            marked.push_str(MARK_OPEN);
            marked.push_str(found.as_str());
            marked.push_str(MARK_CLOSE);
            tail = found.end();
        }
        marked.push_str(&text[tail..]);
        marked
    }

    /// Byte spans of every occurrence, for callers that render their own
    /// emphasis instead of splicing tags.
    pub fn spans(&self, text: &str) -> Vec<MatchSpan> {
        match &self.pattern {
            Some(pattern) => pattern
                .find_iter(text)
                .map(|found| MatchSpan {
                    start: found.start(),
                    end: found.end(),
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Remove mark tags, recovering the text passed to [`Highlighter::mark`].
pub fn strip_marks(text: &str) -> String {
    text.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}
