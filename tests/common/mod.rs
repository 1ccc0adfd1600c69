//! Shared fixtures for the integration and property suites.

#![allow(dead_code)]

use responsa::{build_index, FaqEntry, FaqIndex};

// Re-export canonical test builders from responsa::testing
pub use responsa::testing::{
    make_entry, make_entry_full, make_entry_viewed, make_entry_with_category,
};

// ============================================================================
// SAMPLE HELP-DESK CORPUS
// ============================================================================

/// A small help-desk corpus exercising every ranking clause.
///
/// Landmarks the tests rely on:
/// - entry 1 collects the maximum score for "password" (title, keyword
///   string, preview, and an exact keyword token)
/// - entry 5 contains "billing" only in its answer text, so it passes the
///   filter yet scores zero
/// - entry 6 is retired with the highest view count of all, so any listing
///   that shows it has an active-only bug
pub fn sample_corpus() -> Vec<FaqEntry> {
    vec![
        make_entry_full(
            1,
            "How do I reset my password?",
            "I forgot my password and cannot sign in to my account.",
            "Open Settings, choose Security, then Reset password. We email you a link.",
            "password, login, reset",
            "account",
            342,
            true,
        ),
        make_entry_full(
            2,
            "Where is my invoice?",
            "I need a copy of last month's invoice for my records.",
            "Every invoice lives under Billing history in your profile.",
            "invoice, billing, receipt",
            "billing",
            120,
            true,
        ),
        make_entry_full(
            3,
            "Change billing address",
            "How can I update the address printed on receipts?",
            "Edit the address under Billing details and save.",
            "address, billing",
            "billing",
            95,
            true,
        ),
        make_entry_full(
            4,
            "Enable two-factor authentication",
            "Is there an extra security step for signing in?",
            "Turn on two-factor authentication under Security.",
            "2fa, security, totp",
            "account",
            77,
            true,
        ),
        make_entry_full(
            5,
            "Cancel my subscription",
            "I want to stop my plan at the end of the month.",
            "Choose Cancel plan under Billing. Access continues until the period ends.",
            "cancel, subscription, plan",
            "billing",
            514,
            true,
        ),
        make_entry_full(
            6,
            "Legacy importer guide",
            "How did the old importer work?",
            "The importer was retired in 2023.",
            "import",
            "",
            999,
            false,
        ),
        make_entry_full(
            7,
            "Shipping times",
            "How long does delivery usually take?",
            "Orders ship within two business days.",
            "shipping, delivery",
            "shipping",
            215,
            true,
        ),
        make_entry_full(
            8,
            "Password requirements",
            "What are the rules for choosing a new password?",
            "At least twelve characters with one digit.",
            "security",
            "account",
            31,
            true,
        ),
    ]
}

/// The sample corpus built into a snapshot.
pub fn sample_index() -> FaqIndex {
    build_index(sample_corpus()).expect("sample corpus has unique ids")
}

/// The sample corpus in the backend's export envelope shape.
pub fn sample_export_json() -> String {
    let corpus = sample_corpus();
    serde_json::json!({
        "success": true,
        "count": corpus.len(),
        "faqs": corpus,
    })
    .to_string()
}

/// Ids of a hit list, in result order.
pub fn hit_ids(hits: &[responsa::SearchHit]) -> Vec<u32> {
    hits.iter().map(|hit| hit.entry.id.get()).collect()
}

/// Scores of a hit list, in result order.
pub fn hit_scores(hits: &[responsa::SearchHit]) -> Vec<u32> {
    hits.iter().map(|hit| hit.score).collect()
}
