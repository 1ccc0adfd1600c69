//! Criterion benchmarks for the FAQ search pipeline.
//!
//! Simulates realistic help-desk corpus sizes:
//! - small:  ~50 FAQs   (single product)
//! - medium: ~400 FAQs  (mature help center)
//! - large:  ~2000 FAQs (multi-product suite)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use responsa::testing::make_entry_full;
use responsa::{build_index, match_message, popular, search, stats_report, FaqEntry, FaqIndex};

// ============================================================================
// SYNTHETIC CORPUS
// ============================================================================

struct CorpusSize {
    name: &'static str,
    entries: usize,
}

const SIZES: [CorpusSize; 3] = [
    CorpusSize {
        name: "small",
        entries: 50,
    },
    CorpusSize {
        name: "medium",
        entries: 400,
    },
    CorpusSize {
        name: "large",
        entries: 2000,
    },
];

const TOPICS: [&str; 8] = [
    "password", "invoice", "shipping", "upload", "account", "refund", "login", "notification",
];

const CATEGORIES: [&str; 5] = ["account", "billing", "shipping", "storage", ""];

/// Deterministic corpus: topic words cycle through titles, questions, and
/// keywords so common queries hit a realistic fraction of entries.
fn synthetic_corpus(count: usize) -> Vec<FaqEntry> {
    (0..count)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let other = TOPICS[(i / TOPICS.len()) % TOPICS.len()];
            make_entry_full(
                i as u32 + 1,
                &format!("How do I manage my {topic} settings ({i})?"),
                &format!("I have a question about {topic} and {other}."),
                &format!("Open the {topic} panel and follow the steps."),
                &format!("{topic}, {other}, support"),
                CATEGORIES[i % CATEGORIES.len()],
                (i as u64 * 37) % 1000,
                i % 7 != 0,
            )
        })
        .collect()
}

fn synthetic_index(count: usize) -> FaqIndex {
    build_index(synthetic_corpus(count)).expect("synthetic ids are unique")
}

// ============================================================================
// SEARCH BENCHMARKS
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in &SIZES {
        let index = synthetic_index(size.entries);
        group.throughput(Throughput::Elements(size.entries as u64));

        group.bench_with_input(BenchmarkId::new("query", size.name), &index, |b, index| {
            b.iter(|| search(index, black_box("password"), black_box("")))
        });
        group.bench_with_input(
            BenchmarkId::new("query_and_category", size.name),
            &index,
            |b, index| b.iter(|| search(index, black_box("password"), black_box("billing"))),
        );
        group.bench_with_input(
            BenchmarkId::new("category_only", size.name),
            &index,
            |b, index| b.iter(|| search(index, black_box(""), black_box("account"))),
        );
        group.bench_with_input(BenchmarkId::new("browse", size.name), &index, |b, index| {
            b.iter(|| search(index, black_box(""), black_box("")))
        });
        group.bench_with_input(BenchmarkId::new("miss", size.name), &index, |b, index| {
            b.iter(|| search(index, black_box("zzzzzzzz"), black_box("")))
        });
    }
    group.finish();
}

// ============================================================================
// SNAPSHOT CONSTRUCTION
// ============================================================================

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");
    for size in &SIZES {
        let corpus = synthetic_corpus(size.entries);
        group.throughput(Throughput::Elements(size.entries as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size.name),
            &corpus,
            |b, corpus| b.iter(|| build_index(black_box(corpus.clone()))),
        );
    }
    group.finish();
}

// ============================================================================
// REPORTS AND AUTO-ANSWERS
// ============================================================================

fn bench_reports(c: &mut Criterion) {
    let index = synthetic_index(400);

    c.bench_function("popular_top5_medium", |b| {
        b.iter(|| popular(black_box(&index), black_box(5)))
    });
    c.bench_function("stats_report_medium", |b| {
        b.iter(|| stats_report(black_box(&index)))
    });
    c.bench_function("match_message_medium", |b| {
        b.iter(|| match_message(black_box(&index), black_box("my password stopped working")))
    });
}

criterion_group!(benches, bench_search, bench_build_index, bench_reports);
criterion_main!(benches);
