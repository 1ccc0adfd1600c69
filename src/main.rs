use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use responsa::{
    category_stats, load_index, match_message, popular, search, stats_report, SearchHit,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean. Silent unless
    // RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            file,
            query,
            category,
            limit,
            json,
        } => run_search(&file, &query, &category, limit, json),
        Commands::Popular { file, limit, json } => run_popular(&file, limit, json),
        Commands::Categories { file, json } => run_categories(&file, json),
        Commands::Stats { file, json } => run_stats(&file, json),
        Commands::Answer {
            file,
            message,
            json,
        } => run_answer(&file, &message, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_search(
    file: &str,
    query: &str,
    category: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let index = load_index(Path::new(file))?;
    let mut hits = search(&index, query, category);
    let total = hits.len();
    if let Some(limit) = limit {
        hits.truncate(limit);
    }

    if json {
        let envelope = serde_json::json!({
            "query": query,
            "category": category,
            "count": total,
            "faqs": hits,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    let query_label = if query.trim().is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{}\"", query.trim())
    };
    let category_label = if category.is_empty() {
        "(all)".to_string()
    } else {
        category.to_string()
    };

    println!();
    display::section_top("SEARCH");
    display::row(&format!("  query:    {}", query_label));
    display::row(&format!("  category: {}", category_label));
    display::section_mid(&format!("{} HITS", total));
    display::row("");
    if hits.is_empty() {
        let none = display::themed(display::GRAY, &[], "no entries matched");
        display::row(&format!("  {}", none));
        display::row("");
    }
    for hit in &hits {
        print_hit(hit);
    }
    if hits.len() < total {
        let more = format!("showing {} of {} hits", hits.len(), total);
        display::row(&format!("  {}", display::themed(display::GRAY, &[], &more)));
        display::row("");
    }
    display::section_bot();
    println!();
    Ok(())
}

fn print_hit(hit: &SearchHit) {
    let title = display::clip_visible(&display::render_marks(&hit.title_marked), 60);
    let id = display::themed(display::GRAY, &[], &format!("#{}", hit.id()));
    display::row(&format!(
        "  {}  {} {}",
        display::score_value(hit.score),
        title,
        id
    ));

    let preview = display::clip_visible(&display::render_marks(&hit.preview_marked), 68);
    if !preview.is_empty() {
        display::row(&format!("       {}", preview));
    }
    display::row(&format!(
        "       {} · {} views",
        display::category_badge(&hit.entry.category),
        hit.entry.view_count
    ));
    display::row("");
}

fn run_popular(file: &str, limit: usize, json: bool) -> Result<()> {
    let index = load_index(Path::new(file))?;
    let top = popular(&index, limit);

    if json {
        let envelope = serde_json::json!({
            "count": top.len(),
            "faqs": top,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    println!();
    display::section_top("POPULAR");
    display::row(&format!(
        "  top {} of {} active entries",
        top.len(),
        index.active_count()
    ));
    display::row("");
    if top.is_empty() {
        let none = display::themed(display::GRAY, &[], "no active entries");
        display::row(&format!("  {}", none));
    }
    for (rank, entry) in top.iter().enumerate() {
        let title = display::clip_visible(&entry.title, 44);
        display::row(&format!(
            "  {:>2}. {} views  {} {}",
            rank + 1,
            display::views_value(entry.view_count),
            display::pad_right(&title, 44),
            display::category_badge(&entry.category)
        ));
    }
    display::row("");
    display::section_bot();
    println!();
    Ok(())
}

fn run_categories(file: &str, json: bool) -> Result<()> {
    let index = load_index(Path::new(file))?;
    let stats = category_stats(&index);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!();
    display::section_top("CATEGORIES");
    display::row(&format!(
        "  {} categories across {} active entries",
        stats.len(),
        index.active_count()
    ));
    display::row("");
    if stats.is_empty() {
        let none = display::themed(display::GRAY, &[], "no active entries");
        display::row(&format!("  {}", none));
    }
    for (category, count) in &stats {
        display::row(&format!(
            "  {} {:>4}",
            display::pad_right(&display::category_badge(category), 32),
            count
        ));
    }
    display::row("");
    display::section_bot();
    println!();
    Ok(())
}

fn run_stats(file: &str, json: bool) -> Result<()> {
    let index = load_index(Path::new(file))?;
    let report = stats_report(&index);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    display::double_header();
    display::title("FAQ STATISTICS");
    display::double_footer();
    println!();

    display::section_top("TOTALS");
    display::row(&format!("  Entries:         {:>8}", report.total_faqs));
    display::row(&format!("  Active:          {:>8}", report.active_faqs));
    display::row(&format!("  Inactive:        {:>8}", report.inactive_faqs));
    display::row(&format!("  Total views:     {:>8}", report.total_views));
    display::row(&format!(
        "  Views per FAQ:   {:>8.1}",
        report.avg_views_per_faq
    ));

    display::section_mid("CATEGORIES");
    if report.category_stats.is_empty() {
        let none = display::themed(display::GRAY, &[], "no active entries");
        display::row(&format!("  {}", none));
    }
    for stat in &report.category_stats {
        display::row(&format!(
            "  {} {:>4} entries  {} views",
            display::pad_right(&display::category_badge(&stat.category), 32),
            stat.count,
            display::views_value(stat.views)
        ));
    }

    if let Some(most) = &report.most_viewed_faq {
        display::section_mid("MOST VIEWED");
        display::row(&format!(
            "  {}  ({} views)",
            display::clip_visible(&most.title, 60),
            most.views
        ));
    }
    display::section_bot();
    println!();
    Ok(())
}

fn run_answer(file: &str, message: &str, json: bool) -> Result<()> {
    let index = load_index(Path::new(file))?;
    let candidates = match_message(&index, message);
    let best = candidates.first().copied();

    if json {
        let envelope = serde_json::json!({
            "matched": best.is_some(),
            "candidates": candidates.len(),
            "answer": best.map(|entry| entry.answer.as_str()),
            "faq": best,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    println!();
    display::section_top("ANSWER");
    match best {
        Some(entry) => {
            display::row(&format!(
                "  {}",
                display::styled(&[display::BOLD], &entry.title)
            ));
            display::row(&format!(
                "  {} · {} views",
                display::category_badge(&entry.category),
                entry.view_count
            ));
            display::row("");
            for line in wrap_text(&entry.answer, 74) {
                display::row(&format!("  {}", line));
            }
            if candidates.len() > 1 {
                display::row("");
                let more = format!("{} other entries matched", candidates.len() - 1);
                display::row(&format!("  {}", display::themed(display::GRAY, &[], &more)));
            }
        }
        None => {
            let miss = display::themed(display::RED, &[], "no FAQ matched this message");
            display::row(&format!("  {}", miss));
        }
    }
    display::section_bot();
    println!();
    Ok(())
}

/// Greedy word wrap, paragraph breaks preserved.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}
