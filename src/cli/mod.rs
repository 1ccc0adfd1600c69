// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the responsa command-line interface.
//!
//! Five subcommands over a FAQ export file: `search` runs the filter and
//! ranking pipeline, `popular` lists the most viewed entries, `categories`
//! tallies active entries per category, `stats` prints the corpus report,
//! and `answer` resolves a free-form chat message to its best FAQ. Every
//! subcommand takes `--json` for machine-readable output on stdout.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "responsa",
    about = "FAQ search and relevance ranking over exported help-desk data",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search FAQ entries and display ranked results
    Search {
        /// Path to the FAQ export (JSON)
        file: String,

        /// Free-text query; empty lists every active entry
        ///
        /// The query is trimmed and matched case-insensitively against each
        /// entry's combined title, question, answer, and keyword text. Hits
        /// come back ranked by relevance with matches marked in the title
        /// and preview.
        #[arg(default_value = "")]
        query: String,

        /// Keep only entries with exactly this category label
        #[arg(short, long, default_value = "")]
        category: String,

        /// Show at most N hits (all by default)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit the result envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the most viewed FAQ entries
    Popular {
        /// Path to the FAQ export (JSON)
        file: String,

        /// Number of entries to show
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tally active FAQ entries per category
    Categories {
        /// Path to the FAQ export (JSON)
        file: String,

        /// Emit the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the corpus statistics report
    Stats {
        /// Path to the FAQ export (JSON)
        file: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a chat message to its best matching FAQ
    Answer {
        /// Path to the FAQ export (JSON)
        file: String,

        /// The user message to match
        ///
        /// The message is split into words and an entry matches when any
        /// word appears in its text or category. The most viewed match
        /// wins.
        message: String,

        /// Emit the resolution as JSON
        #[arg(long)]
        json: bool,
    },
}
