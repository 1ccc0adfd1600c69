// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring for FAQ search.
//!
//! A hit's score is the sum of four independent clauses, each gated on the
//! normalized query:
//!
//! ```text
//! score = 10·[title contains q]
//!       +  5·[keywords contains q]
//!       +  2·[preview contains q]
//!       + 20·[title == q  OR  some keyword token == q]
//! ```
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## EXACT_DOMINANCE
//! The exact-match bonus alone MUST outweigh every combination of the three
//! partial clauses:
//!
//! ```text
//! EXACT_MATCH_BONUS > TITLE_MATCH_SCORE + KEYWORD_MATCH_SCORE + PREVIEW_MATCH_SCORE
//! ```
//!
//! With current values: `20 > 10 + 5 + 2 = 17` ✓
//!
//! An entry whose title or keyword token equals the query verbatim ranks
//! above any entry that merely contains it, no matter how many fields the
//! latter matches.
//!
//! ## CASE_FOLDED
//! Every comparison here runs lowercase-on-lowercase, the exact-match bonus
//! included. The raw entry text never reaches this module; scoring reads the
//! precomputed [`EntryText`] projections, and callers normalize the query
//! with [`crate::utils::normalize_query`] first.
//!
//! The clauses accumulate. A title that both contains and equals the query
//! collects `10 + 20`; a term that appears in title, keywords, and preview
//! and equals a keyword token reaches the maximum score of 37.

use crate::types::EntryText;

/// Score for the query appearing anywhere in the title.
pub const TITLE_MATCH_SCORE: u32 = 10;

/// Score for the query appearing anywhere in the comma-separated keyword
/// string. One flat bonus however many keywords match.
pub const KEYWORD_MATCH_SCORE: u32 = 5;

/// Score for the query appearing anywhere in the preview text.
pub const PREVIEW_MATCH_SCORE: u32 = 2;

/// Bonus when the title, or one keyword token, equals the query verbatim.
///
/// INVARIANT: EXACT_DOMINANCE. Must stay above the sum of the three partial
/// scores so verbatim matches always rank first.
pub const EXACT_MATCH_BONUS: u32 = 20;

/// Largest score a single entry can collect.
pub const MAX_SCORE: u32 =
    TITLE_MATCH_SCORE + KEYWORD_MATCH_SCORE + PREVIEW_MATCH_SCORE + EXACT_MATCH_BONUS;

/// Compute the relevance score of one entry against a normalized query.
///
/// `query` must already be trimmed and lowercased; an empty query scores
/// zero (the empty string is a substring of everything, so scoring it would
/// hand every entry a meaningless 17).
pub(crate) fn relevance_score(text: &EntryText, query: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }

    let mut score = 0;

    if text.title.contains(query) {
        score += TITLE_MATCH_SCORE;
    }
    if text.keywords.contains(query) {
        score += KEYWORD_MATCH_SCORE;
    }
    if text.preview.contains(query) {
        score += PREVIEW_MATCH_SCORE;
    }
    if is_exact_match(text, query) {
        score += EXACT_MATCH_BONUS;
    }

    score
}

/// Verbatim match: the whole title, or one trimmed keyword token.
fn is_exact_match(text: &EntryText, query: &str) -> bool {
    text.title == query || text.keyword_tokens.iter().any(|token| token == query)
}
