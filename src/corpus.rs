//! Corpus-level orchestration: discover files, parse trees, extract
//! naming tokens, aggregate frequencies.
//!
//! Per-file failures (unreadable content, malformed syntax) are reported
//! and recovered locally; nothing short of an unusable scan root aborts
//! a run. File discovery is sorted so that rankings are reproducible:
//! ties are broken by first-seen order, which depends on scan order.

use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::parser::{extract_function_names, extract_names, SyntaxTree};
use crate::rank::FrequencyTable;
use crate::tagger::Tagger;
use crate::words::{is_reserved, split_words};

/// Source file extension that defines corpus membership.
pub const SOURCE_EXTENSION: &str = "py";

/// Options controlling corpus discovery and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Sub-directories of the root to scan as one merged corpus.
    /// Empty means the root itself.
    pub projects: Vec<String>,
    /// Glob patterns excluded from the scan, relative to the root.
    pub excluded_paths: Vec<String>,
    /// Suppress the progress bar and the scan summary.
    pub quiet: bool,
}

/// Counters describing one corpus scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    /// Files discovered with the source extension.
    pub discovered: usize,
    /// Files parsed into a tree.
    pub parsed: usize,
    /// Files whose content could not be read.
    pub unreadable: usize,
    /// Files rejected by the parser.
    pub invalid: usize,
}

/// A ranked frequency table plus the statistics behind it.
#[derive(Debug, Clone)]
pub struct Ranked {
    /// Top entries, descending by count, ties in first-seen order.
    pub entries: Vec<(String, usize)>,
    /// Total occurrences across the corpus.
    pub total: usize,
    /// Distinct items across the corpus.
    pub unique: usize,
    pub stats: ScanStats,
}

struct Corpus {
    trees: Vec<SyntaxTree>,
    stats: ScanStats,
}

/// Rank the verbs used in function names under `root`.
pub fn top_verbs(
    root: &Path,
    options: &ScanOptions,
    tagger: &Tagger,
    n: usize,
) -> anyhow::Result<Ranked> {
    let corpus = load_corpus(root, options)?;
    let mut table = FrequencyTable::new();
    for name in function_names(&corpus) {
        for (verb, _) in tagger.verbs_in(&name) {
            table.add(verb);
        }
    }
    Ok(ranked(table, n, corpus.stats))
}

/// Rank the function names declared under `root`.
pub fn top_function_names(root: &Path, options: &ScanOptions, n: usize) -> anyhow::Result<Ranked> {
    let corpus = load_corpus(root, options)?;
    let mut table = FrequencyTable::new();
    for name in function_names(&corpus) {
        table.add(name);
    }
    Ok(ranked(table, n, corpus.stats))
}

/// Rank the words appearing in plain name references under `root`.
pub fn top_words(root: &Path, options: &ScanOptions, n: usize) -> anyhow::Result<Ranked> {
    let corpus = load_corpus(root, options)?;
    let mut table = FrequencyTable::new();
    for tree in &corpus.trees {
        for name in extract_names(tree) {
            if is_reserved(&name) {
                continue;
            }
            for word in split_words(&name) {
                table.add(word.to_string());
            }
        }
    }
    Ok(ranked(table, n, corpus.stats))
}

/// Corpus-wide function-name sequence, dunder names filtered out.
fn function_names(corpus: &Corpus) -> Vec<String> {
    corpus
        .trees
        .iter()
        .flat_map(extract_function_names)
        .filter(|name| !is_reserved(name))
        .collect()
}

fn ranked(table: FrequencyTable<String>, n: usize, stats: ScanStats) -> Ranked {
    Ranked {
        total: table.total(),
        unique: table.distinct(),
        entries: table.top(n),
        stats,
    }
}

/// Recursively collect source files under the scan roots, sorted for
/// deterministic ordering. Hidden directories are skipped.
pub fn collect_sources(root: &Path, options: &ScanOptions) -> anyhow::Result<Vec<PathBuf>> {
    let excludes = build_globset(&options.excluded_paths)?;

    let roots: Vec<PathBuf> = if options.projects.is_empty() {
        vec![root.to_path_buf()]
    } else {
        options.projects.iter().map(|p| root.join(p)).collect()
    };

    let mut files = Vec::new();
    for scan_root in &roots {
        for entry in WalkDir::new(scan_root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                !(e.file_type().is_dir() && name.starts_with('.'))
            })
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("  {} {}", "WARN ".yellow(), err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
                continue;
            }
            if let Some(excludes) = &excludes {
                let relative = path.strip_prefix(root).unwrap_or(path);
                if excludes.is_match(relative) {
                    continue;
                }
            }
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(Some(builder.build()?))
}

/// Read and parse every discovered file.
///
/// An unreadable file is reported and treated as empty (zero
/// identifiers); a malformed file is reported and skipped. Progress is
/// shown on stderr while the corpus is scanned.
fn load_corpus(root: &Path, options: &ScanOptions) -> anyhow::Result<Corpus> {
    let files = collect_sources(root, options)?;

    let mut stats = ScanStats {
        discovered: files.len(),
        ..Default::default()
    };

    let progress = if options.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("  {spinner} scanning {pos}/{len} {wide_msg}")
                .expect("progress template is well-formed"),
        );
        bar
    };

    let mut trees = Vec::with_capacity(files.len());
    for file in &files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                stats.unreadable += 1;
                progress.suspend(|| {
                    eprintln!("  {} {}: {}", "WARN ".yellow(), file.display(), err)
                });
                String::new()
            }
        };

        match SyntaxTree::parse(&content) {
            Ok(tree) => {
                stats.parsed += 1;
                trees.push(tree);
            }
            Err(err) => {
                stats.invalid += 1;
                progress.suspend(|| {
                    eprintln!("  {} {}: {}", "WARN ".yellow(), file.display(), err)
                });
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if !options.quiet {
        eprintln!(
            "  {} {} files, {} parsed, {} skipped",
            "scanned".dimmed(),
            stats.discovered,
            stats.parsed,
            stats.unreadable + stats.invalid
        );
    }

    Ok(Corpus { trees, stats })
}
