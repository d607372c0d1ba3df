//! End-to-end pipeline tests over the fixture corpora in testdata/.

use std::path::PathBuf;

use codeverbs::{top_function_names, top_verbs, top_words, ScanOptions, Tagger};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn options() -> ScanOptions {
    ScanOptions {
        quiet: true,
        ..Default::default()
    }
}

#[test]
fn test_verb_ranking_over_blog_corpus() {
    let tagger = Tagger::with_builtin_lexicon();
    let ranked = top_verbs(&fixture("blog"), &options(), &tagger, 10).unwrap();

    // create and delete both occur twice; create was seen first.
    assert_eq!(ranked.entries[0], ("create".to_string(), 2));
    assert_eq!(ranked.entries[1], ("delete".to_string(), 2));

    let words: Vec<&str> = ranked.entries.iter().map(|(w, _)| w.as_str()).collect();
    assert!(words.contains(&"publish"));
    assert!(words.contains(&"parse"));
    assert!(words.contains(&"render"));

    // Nouns from the same names never make the verb table.
    assert!(!words.contains(&"post"));
    assert!(!words.contains(&"title"));
    assert!(!words.contains(&"date"));
    assert!(!words.contains(&"draft"));
}

#[test]
fn test_function_name_ranking_over_blog_corpus() {
    let ranked = top_function_names(&fixture("blog"), &options(), 5).unwrap();

    assert_eq!(ranked.entries[0], ("create_post".to_string(), 2));
    assert_eq!(ranked.entries.len(), 5);

    // Dunder definitions exist in the fixtures but are never ranked.
    assert!(ranked
        .entries
        .iter()
        .all(|(name, _)| !name.starts_with("__")));
}

#[test]
fn test_word_ranking_over_blog_corpus() {
    let ranked = top_words(&fixture("blog"), &options(), 50).unwrap();
    let words: Vec<&str> = ranked.entries.iter().map(|(w, _)| w.as_str()).collect();

    // Plain references split into words; case is preserved.
    assert!(words.contains(&"post"));
    assert!(words.contains(&"payload"));
    assert!(words.contains(&"SLUG"));
    assert!(words.contains(&"PATTERN"));
}

#[test]
fn test_malformed_file_is_skipped_not_fatal() {
    let tagger = Tagger::with_builtin_lexicon();
    let ranked = top_verbs(&fixture("mixed"), &options(), &tagger, 10).unwrap();

    assert_eq!(ranked.stats.discovered, 2);
    assert_eq!(ranked.stats.parsed, 1);
    assert_eq!(ranked.stats.invalid, 1);

    // Only the parsable file contributes.
    assert_eq!(ranked.entries, vec![("check".to_string(), 2)]);
}

#[test]
fn test_rankings_are_deterministic() {
    let tagger = Tagger::with_builtin_lexicon();
    let first = top_verbs(&fixture("blog"), &options(), &tagger, 10).unwrap();
    let second = top_verbs(&fixture("blog"), &options(), &tagger, 10).unwrap();
    assert_eq!(first.entries, second.entries);
}

#[test]
fn test_top_size_zero_yields_empty_ranking() {
    let ranked = top_function_names(&fixture("blog"), &options(), 0).unwrap();
    assert!(ranked.entries.is_empty());
    assert!(ranked.total > 0);
}

#[test]
fn test_project_subset_restricts_the_corpus() {
    let options = ScanOptions {
        projects: vec!["mixed".to_string()],
        quiet: true,
        ..Default::default()
    };
    let ranked = top_function_names(&fixture(""), &options, 10).unwrap();

    let names: Vec<&str> = ranked.entries.iter().map(|(n, _)| n.as_str()).collect();
    assert!(names.contains(&"check_status"));
    assert!(!names.contains(&"create_post"));
}
