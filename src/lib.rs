//! FAQ search and relevance ranking over an immutable in-memory snapshot.
//!
//! This crate models the question-search half of a help-desk system: a batch
//! of FAQ entries loads once into a [`FaqIndex`] snapshot, and every
//! operation on it (free-text search, category filtering, popularity
//! listings, chat auto-answers) is a pure read that allocates only its
//! result.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐      ┌───────────┐      ┌────────────────────┐
//! │  load.rs  │─────▶│  index.rs │─────▶│     search.rs      │
//! │  (JSON    │      │ (FaqIndex │      │ (filter, scoring,  │
//! │  exports) │      │  snapshot)│      │  rank, highlight)  │
//! └───────────┘      └───────────┘      └────────────────────┘
//!                          │                       ▲
//!                          ▼                       │
//!             ┌───────────────────────┐    ┌───────────────┐
//!             │  stats.rs / answer.rs │    │  session.rs   │
//!             │  (popularity, auto-   │    │ (query +      │
//!             │   answer resolution)  │    │  category     │
//!             └───────────────────────┘    │  filter state)│
//!                                          └───────────────┘
//! ```
//!
//! | Module      | Responsibility                                      |
//! |-------------|-----------------------------------------------------|
//! | `types`     | Entries, the snapshot, hits, build errors           |
//! | `index`     | Snapshot construction and lowercase projections     |
//! | `search`    | Two-predicate filter, ranking, marked-up hits       |
//! | `scoring`   | Additive relevance weights                          |
//! | `highlight` | Reversible literal highlighting                     |
//! | `session`   | Idle/filtered state held across a user's searches   |
//! | `stats`     | Popularity listings and the corpus report           |
//! | `answer`    | Chat-message auto-answer resolution                 |
//! | `load`      | Reading FAQ exports from disk                       |
//!
//! # Usage
//!
//! ```ignore
//! use responsa::{build_index, load_entries, search, SearchSession};
//!
//! let entries = load_entries(Path::new("faqs.json"))?;
//! let index = build_index(entries)?;
//!
//! // One-shot search: "password" anywhere, any category.
//! let hits = search(&index, "password", "");
//!
//! // Or hold filter state across a user's session.
//! let mut session = SearchSession::new(&index);
//! session.set_query("password");
//! let narrowed = session.set_category("account");
//! ```

// Module declarations
mod answer;
pub mod highlight;
mod index;
mod load;
pub mod scoring;
mod search;
mod session;
pub mod stats;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use answer::{best_answer, match_message};
pub use highlight::{strip_marks, Highlighter, MatchSpan};
pub use index::build_index;
pub use load::{load_entries, load_index, parse_entries, LoadError};
pub use search::search;
pub use session::{FilterState, SearchSession};
pub use stats::{category_stats, popular, stats_report, CategoryStat, MostViewed, StatsReport};
pub use types::{FaqEntry, FaqId, FaqIndex, SearchHit, SnapshotError};
pub use utils::{message_tokens, normalize_query};
