//! Output formatting for ranked vocabulary tables.
//!
//! Three formats:
//! - Plain: bare `<item> <count>` lines for piping into other tools
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::corpus::Ranked;

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    /// What was ranked: "verbs", "functions", or "words".
    pub kind: String,
    pub path: String,
    pub files_discovered: usize,
    pub files_parsed: usize,
    pub files_skipped: usize,
    pub total: usize,
    pub unique: usize,
    pub results: Vec<JsonEntry>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonEntry {
    pub item: String,
    pub count: usize,
}

/// Write bare `<item> <count>` lines.
pub fn write_plain(ranked: &Ranked) {
    for (item, count) in &ranked.entries {
        println!("{} {}", item, count);
    }
}

/// Write results in JSON format.
pub fn write_json(kind: &str, path: &str, ranked: &Ranked) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        kind: kind.to_string(),
        path: path.to_string(),
        files_discovered: ranked.stats.discovered,
        files_parsed: ranked.stats.parsed,
        files_skipped: ranked.stats.unreadable + ranked.stats.invalid,
        total: ranked.total,
        unique: ranked.unique,
        results: ranked
            .entries
            .iter()
            .map(|(item, count)| JsonEntry {
                item: item.clone(),
                count: *count,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results in pretty (human-readable) format.
pub fn write_pretty(kind: &str, path: &str, ranked: &Ranked) {
    println!();
    print!("  ");
    print!("{}", "codeverbs".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Corpus:  ".dimmed());
    println!("{}", path);
    print!("  {}", "Ranking: ".dimmed());
    println!("{}", kind);
    println!();

    println!(
        "  {} discovered, {} parsed, {} skipped",
        ranked.stats.discovered,
        ranked.stats.parsed,
        ranked.stats.unreadable + ranked.stats.invalid
    );
    println!(
        "  {} occurrences, {} unique",
        ranked.total, ranked.unique
    );
    println!();

    if ranked.entries.is_empty() {
        println!("  {}", "(nothing to rank)".dimmed());
        println!();
        return;
    }

    let width = ranked
        .entries
        .iter()
        .map(|(item, _)| item.len())
        .max()
        .unwrap_or(0);

    for (position, (item, count)) in ranked.entries.iter().enumerate() {
        println!(
            "  {:>3}  {:<width$}  {}",
            format!("{}.", position + 1).dimmed(),
            item,
            count.to_string().bold(),
            width = width
        );
    }
    println!();
}
