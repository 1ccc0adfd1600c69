//! Interactive filter state over a shared snapshot.
//!
//! A [`SearchSession`] is what a UI layer drives: it remembers the current
//! query and category, re-runs the filter pipeline when either changes, and
//! reports whether a "clear" affordance should be visible. The session owns
//! no entry data; it borrows the snapshot and stays cheap to construct.
//!
//! # State transitions
//!
//! ```text
//!   Idle ──set_query / set_category──▶ Filtered
//!   Filtered ──clear (or both filters emptied)──▶ Idle
//! ```
//!
//! Setting one filter never resets the other: changing the category while
//! a query is live re-runs the same two-predicate filter, and vice versa.
//! Only [`clear`] resets both at once.
//!
//! [`clear`]: SearchSession::clear

use crate::search::search;
use crate::types::{FaqIndex, SearchHit};
use crate::utils::normalize_query;

/// Whether any filter is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// No query, no category: the full listing is showing.
    Idle,
    /// At least one filter set.
    Filtered,
}

/// One UI session's filters over a snapshot.
///
/// The stored query is always normalized (trimmed, lowercased), so a
/// whitespace-only input is indistinguishable from no query at all.
#[derive(Debug, Clone)]
pub struct SearchSession<'a> {
    index: &'a FaqIndex,
    query: String,
    category: String,
}

impl<'a> SearchSession<'a> {
    /// Start an idle session over a snapshot.
    pub fn new(index: &'a FaqIndex) -> Self {
        SearchSession {
            index,
            query: String::new(),
            category: String::new(),
        }
    }

    /// The normalized query currently applied.
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The category currently applied, empty when unfiltered.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current position in the idle/filtered lifecycle.
    pub fn state(&self) -> FilterState {
        if self.has_filter() {
            FilterState::Filtered
        } else {
            FilterState::Idle
        }
    }

    /// True when a clear affordance should be visible.
    #[inline]
    pub fn has_filter(&self) -> bool {
        !self.query.is_empty() || !self.category.is_empty()
    }

    /// Replace the query, keep the category, and re-run the filter.
    pub fn set_query(&mut self, query: &str) -> Vec<SearchHit> {
        self.query = normalize_query(query);
        self.results()
    }

    /// Replace the category, keep the query, and re-run the filter.
    pub fn set_category(&mut self, category: &str) -> Vec<SearchHit> {
        self.category = category.to_owned();
        self.results()
    }

    /// Programmatic entry point for sibling modules (shortcut buttons,
    /// auto-answer links). Identical to typing the query: the current
    /// category stays applied.
    pub fn search_faq(&mut self, query: &str) -> Vec<SearchHit> {
        self.set_query(query)
    }

    /// Drop both filters and return the full listing.
    ///
    /// The returned hits carry unmarked text, so rendering them restores
    /// every title and preview byte-identical to the pre-search state.
    pub fn clear(&mut self) -> Vec<SearchHit> {
        self.query.clear();
        self.category.clear();
        self.results()
    }

    /// Run the current filters against the snapshot.
    pub fn results(&self) -> Vec<SearchHit> {
        search(self.index, &self.query, &self.category)
    }
}
