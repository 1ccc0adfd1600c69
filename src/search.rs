//! The search operation: filter, rank, annotate.
//!
//! A search runs three steps over the snapshot:
//!
//! 1. **Filter.** An active entry survives when
//!    `(query empty OR haystack contains query) AND (category empty OR
//!    entry.category == category)`. The haystack is the precomputed
//!    lowercase searchable text; the category compares exact.
//! 2. **Rank.** With a non-empty query, survivors are scored
//!    (see [`crate::scoring`]) and stable-sorted descending, so equal
//!    scores keep their original relative order.
//! 3. **Annotate.** Each hit carries its title and preview with query
//!    occurrences wrapped in mark tags (see [`crate::highlight`]).
//!
//! With both inputs empty the whole pipeline short-circuits: the full
//! active set comes back in entry order, unscored and unmarked, with no
//! sort and no pattern build.
//!
//! Every call is a pure function of `(index, query, category)`. Nothing
//! here mutates the snapshot, so calls can interleave freely.

use tracing::debug;

use crate::highlight::Highlighter;
use crate::scoring::relevance_score;
use crate::types::{FaqEntry, FaqIndex, SearchHit};
use crate::utils::normalize_query;

/// Search the snapshot for entries matching a free-text query and an
/// optional category.
///
/// `query` is trimmed and lowercased before matching; `category` matches
/// the entry field verbatim, empty meaning "any". The result is never an
/// error: no match is an empty vector.
pub fn search(index: &FaqIndex, query: &str, category: &str) -> Vec<SearchHit> {
    let query = normalize_query(query);

    // Fast path: no filters at all. Full active set, entry order, nothing
    // to score or mark.
    if query.is_empty() && category.is_empty() {
        let hits: Vec<SearchHit> = index
            .iter_active()
            .map(|(_, entry)| passthrough_hit(entry))
            .collect();
        debug!(hits = hits.len(), "search passthrough");
        return hits;
    }

    let highlighter = Highlighter::new(&query);
    let mut hits: Vec<SearchHit> = index
        .iter_active()
        .filter(|(pos, entry)| {
            (query.is_empty() || index.text(*pos).searchable.contains(query.as_str()))
                && (category.is_empty() || entry.category == category)
        })
        .map(|(pos, entry)| SearchHit {
            entry: entry.clone(),
            score: relevance_score(index.text(pos), &query),
            title_marked: highlighter.mark(&entry.title),
            preview_marked: highlighter.mark(entry.preview()),
        })
        .collect();

    // Stable sort: ties keep entry order. Category-only searches skip the
    // sort entirely and stay in entry order.
    if !query.is_empty() {
        hits.sort_by(|a, b| b.score.cmp(&a.score));
    }

    debug!(
        query = %query,
        category = %category,
        hits = hits.len(),
        "search complete"
    );
    hits
}

/// Hit for an unfiltered listing: zero score, unmarked text.
fn passthrough_hit(entry: &FaqEntry) -> SearchHit {
    SearchHit {
        entry: entry.clone(),
        score: 0,
        title_marked: entry.title.clone(),
        preview_marked: entry.preview().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::testing::{make_entry, make_entry_full, make_entry_with_category};
    use crate::types::FaqIndex;

    fn snapshot(entries: Vec<FaqEntry>) -> FaqIndex {
        build_index(entries).unwrap()
    }

    #[test]
    fn test_search_finds_matches() {
        let index = snapshot(vec![
            make_entry(1, "Password Reset", "password,login"),
            make_entry(2, "File Upload Limit", "upload,file"),
        ]);

        let hits = search(&index, "password", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.title, "Password Reset");
        // Title contains (10), keyword string contains (5), exact keyword
        // token (20).
        assert_eq!(hits[0].score, 35);
    }

    #[test]
    fn test_search_empty_inputs_return_all_in_order() {
        let index = snapshot(vec![
            make_entry(1, "First", ""),
            make_entry(2, "Second", ""),
            make_entry(3, "Third", ""),
        ]);

        let hits = search(&index, "", "");
        let titles: Vec<&str> = hits.iter().map(|h| h.entry.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
        assert!(hits.iter().all(|h| h.score == 0));
        assert!(hits.iter().all(|h| h.title_marked == h.entry.title));
    }

    #[test]
    fn test_search_category_only_keeps_entry_order() {
        let index = snapshot(vec![
            make_entry_with_category(1, "Apple", "fruit"),
            make_entry_with_category(2, "Carrot", "vegetable"),
            make_entry_with_category(3, "Banana", "fruit"),
        ]);

        let hits = search(&index, "", "fruit");
        let titles: Vec<&str> = hits.iter().map(|h| h.entry.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana"]);
        assert!(hits.iter().all(|h| h.score == 0));
    }

    #[test]
    fn test_search_category_is_exact() {
        let index = snapshot(vec![make_entry_with_category(1, "Apple", "fruit")]);
        assert!(search(&index, "", "fru").is_empty());
        assert!(search(&index, "", "Fruit").is_empty());
    }

    #[test]
    fn test_search_both_predicates_must_hold() {
        let mut vpn = make_entry_with_category(1, "VPN Setup", "network");
        vpn.keywords = "vpn,remote".to_owned();
        let mut wifi = make_entry_with_category(2, "Office WiFi", "network");
        wifi.keywords = "wifi".to_owned();

        let index = snapshot(vec![vpn, wifi]);
        let hits = search(&index, "vpn", "network");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.title, "VPN Setup");
        assert!(search(&index, "vpn", "billing").is_empty());
    }

    #[test]
    fn test_search_no_match_is_empty_not_error() {
        let index = snapshot(vec![make_entry(1, "Anything", "")]);
        assert!(search(&index, "xyz-nonexistent", "").is_empty());
    }

    #[test]
    fn test_ranking_descends_with_stable_ties() {
        let index = snapshot(vec![
            make_entry_full(1, "Storage", "Where is my quota shown?", "", "", "", 0, true),
            make_entry(2, "Quota Limits", ""),
            make_entry(3, "Raising your quota", ""),
        ]);

        let hits = search(&index, "quota", "");
        let ids: Vec<u32> = hits.iter().map(|h| h.entry.id.get()).collect();
        // Two title matches (10) tie and keep entry order; the preview
        // match (2) trails.
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let index = snapshot(vec![make_entry(1, "Password Reset", "")]);
        let hits = search(&index, "  PASSWORD  ", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, search(&index, "password", "")[0].score);
    }

    #[test]
    fn test_hits_carry_marked_text() {
        let index = snapshot(vec![make_entry_full(
            1,
            "Password Reset",
            "Reset your password here.",
            "",
            "",
            "",
            0,
            true,
        )]);

        let hits = search(&index, "password", "");
        assert_eq!(hits[0].title_marked, "<mark>Password</mark> Reset");
        assert_eq!(
            hits[0].preview_marked,
            "Reset your <mark>password</mark> here."
        );
        // The entry itself stays pristine.
        assert_eq!(hits[0].entry.title, "Password Reset");
    }

    #[test]
    fn test_search_skips_inactive_entries() {
        let mut retired = make_entry(1, "Password policy (old)", "password");
        retired.is_active = false;
        let index = snapshot(vec![retired, make_entry(2, "Password Reset", "password")]);

        let hits = search(&index, "password", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.id.get(), 2);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let index = snapshot(vec![
            make_entry(1, "Versioning a.b*c explained", ""),
            make_entry(2, "aXbYYc pattern", ""),
        ]);

        let hits = search(&index, "a.b*c", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.id.get(), 1);
        assert!(hits[0].title_marked.contains("<mark>a.b*c</mark>"));
    }
}
