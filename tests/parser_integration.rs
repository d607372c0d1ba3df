//! Integration tests for the syntax tree provider and walker.
//!
//! These run against the fixture files in testdata/ rather than inline
//! snippets, so the extraction rules are exercised on realistic sources.

use std::fs;
use std::path::PathBuf;

use codeverbs::{extract_function_names, extract_names, ParseError, SyntaxTree};

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name);
    fs::read_to_string(path).expect("fixture should be readable")
}

#[test]
fn test_models_fixture_function_names() {
    let source = read_fixture("blog/models.py");
    let tree = SyntaxTree::parse(&source).expect("fixture should parse");

    assert_eq!(
        extract_function_names(&tree),
        vec![
            "__init__",
            "publish",
            "save_draft",
            "__init__",
            "delete_draft"
        ]
    );
}

#[test]
fn test_views_fixture_names_are_references_only() {
    let source = read_fixture("blog/views.py");
    let tree = SyntaxTree::parse(&source).expect("fixture should parse");
    let names = extract_names(&tree);

    // Parameters and declared names never show up as references.
    assert!(names.contains(&"post".to_string()));
    assert!(names.contains(&"models".to_string()));
    assert!(!names.contains(&"render_post".to_string()));
    assert!(!names.contains(&"title".to_string()));
}

#[test]
fn test_util_fixture_preserves_reference_case() {
    let source = read_fixture("blog/util.py");
    let tree = SyntaxTree::parse(&source).expect("fixture should parse");
    let names = extract_names(&tree);

    let pattern_refs = names.iter().filter(|n| *n == "SLUG_PATTERN").count();
    assert_eq!(pattern_refs, 2);
}

#[test]
fn test_broken_fixture_is_a_parse_error() {
    let source = read_fixture("mixed/broken.py");
    let err = SyntaxTree::parse(&source).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn test_walker_reaches_deeply_nested_scopes() {
    let source = r#"
def level_one():
    def level_two():
        def level_three():
            class Inner:
                def level_four(self):
                    pass
            return Inner
        return level_three
    return level_two
"#;
    let tree = SyntaxTree::parse(source).expect("snippet should parse");
    assert_eq!(
        extract_function_names(&tree),
        vec!["level_one", "level_two", "level_three", "level_four"]
    );
}
