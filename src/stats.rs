//! Popularity ranking and corpus statistics.
//!
//! Pure reads over the snapshot, independent of any search state: the
//! popular listing ignores whatever query or category filter a session
//! currently holds.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{FaqEntry, FaqIndex};

/// How many entries a popular listing shows by default.
pub const DEFAULT_POPULAR_LIMIT: usize = 5;

/// Label standing in for an empty category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// The most-viewed active entries, descending by view count.
///
/// Ties keep entry order (stable sort). Fewer entries than `limit` means
/// all of them come back; inactive entries never appear.
pub fn popular(index: &FaqIndex, limit: usize) -> Vec<&FaqEntry> {
    let mut ranked: Vec<&FaqEntry> = index.iter_active().map(|(_, entry)| entry).collect();
    ranked.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    ranked.truncate(limit);
    ranked
}

/// Active entries tallied per category, the empty category under
/// [`UNCATEGORIZED`].
///
/// A `BTreeMap` keeps the listing deterministic for display and tests.
pub fn category_stats(index: &FaqIndex) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for (_, entry) in index.iter_active() {
        let label = if entry.is_uncategorized() {
            UNCATEGORIZED
        } else {
            entry.category.as_str()
        };
        *stats.entry(label.to_owned()).or_insert(0) += 1;
    }
    stats
}

/// Per-category slice of a [`StatsReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: usize,
    pub views: u64,
}

/// The single most-viewed active entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostViewed {
    pub title: String,
    pub views: u64,
}

/// Corpus-wide statistics for the admin report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_faqs: usize,
    pub active_faqs: usize,
    pub inactive_faqs: usize,
    /// Sum over every entry, inactive included; retired FAQs keep their
    /// view history.
    pub total_views: u64,
    /// Mean views per active entry.
    pub avg_views_per_faq: f64,
    /// Active entries per category, sorted by label.
    pub category_stats: Vec<CategoryStat>,
    pub most_viewed_faq: Option<MostViewed>,
}

/// Build the full statistics report for a snapshot.
pub fn stats_report(index: &FaqIndex) -> StatsReport {
    let total_faqs = index.len();
    let active_faqs = index.active_count();
    let total_views: u64 = index.entries().iter().map(|entry| entry.view_count).sum();

    let mut per_category: BTreeMap<String, (usize, u64)> = BTreeMap::new();
    for (_, entry) in index.iter_active() {
        let label = if entry.is_uncategorized() {
            UNCATEGORIZED.to_owned()
        } else {
            entry.category.clone()
        };
        let slot = per_category.entry(label).or_insert((0, 0));
        slot.0 += 1;
        slot.1 += entry.view_count;
    }

    let most_viewed_faq = popular(index, 1).first().map(|entry| MostViewed {
        title: entry.title.clone(),
        views: entry.view_count,
    });

    StatsReport {
        total_faqs,
        active_faqs,
        inactive_faqs: total_faqs - active_faqs,
        total_views,
        avg_views_per_faq: total_views as f64 / active_faqs.max(1) as f64,
        category_stats: per_category
            .into_iter()
            .map(|(category, (count, views))| CategoryStat {
                category,
                count,
                views,
            })
            .collect(),
        most_viewed_faq,
    }
}
