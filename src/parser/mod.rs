//! Tree-sitter based syntax tree provider for Python sources.
//!
//! This module provides:
//! - `SyntaxTree`: a parsed source file, rejected outright on syntax errors
//! - `NodeKind`: the closed set of node variants the walker consumes
//! - `walker`: full-tree extraction of identifier and function-name tokens

pub mod walker;

use thiserror::Error;
use tree_sitter::{Language, Node, Parser as TsParser, Point};

pub use walker::{extract_function_names, extract_names};

/// Errors raised while turning source text into a usable tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bundled grammar is incompatible with the linked tree-sitter.
    #[error("python grammar unavailable: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    /// The parser gave up without producing a tree.
    #[error("parser produced no tree")]
    NoTree,
    /// The source is malformed; position of the first offending node.
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

/// The node variants relevant to vocabulary extraction.
///
/// The provider folds tree-sitter's open-ended runtime node kinds into
/// this closed set so the walker can pattern-match instead of comparing
/// kind strings. `Name` is a plain name reference; identifiers in
/// declaration-name, attribute, keyword-argument, parameter, or import
/// positions are `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A plain name reference, original case preserved.
    Name(String),
    /// A function definition carrying its declared name.
    FunctionDef(String),
    /// Anything else.
    Other,
}

/// A successfully parsed Python source file.
///
/// Parsing is strict: a tree containing error nodes is rejected, so every
/// `SyntaxTree` handed to the walker is fully well-formed.
#[derive(Debug)]
pub struct SyntaxTree {
    tree: tree_sitter::Tree,
    source: String,
}

impl SyntaxTree {
    /// Parse Python source text into a tree.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut parser = TsParser::new();
        let language: Language = tree_sitter_python::LANGUAGE.into();
        parser.set_language(&language)?;

        let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;

        let root = tree.root_node();
        if root.has_error() {
            let point = first_error_point(root);
            return Err(ParseError::Syntax {
                line: point.row + 1,
                column: point.column,
            });
        }

        Ok(Self {
            tree,
            source: source.to_string(),
        })
    }

    pub(crate) fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Fold a node into the closed variant set.
    ///
    /// `field` is the node's field name within its parent, as reported by
    /// the traversal cursor.
    pub(crate) fn classify(&self, node: Node<'_>, field: Option<&str>) -> NodeKind {
        match node.kind() {
            "function_definition" => {
                let name = node
                    .child_by_field_name("name")
                    .and_then(|n| n.utf8_text(self.source.as_bytes()).ok())
                    .unwrap_or("");
                NodeKind::FunctionDef(name.to_string())
            }
            "identifier" if is_reference_position(node, field) => {
                let text = node.utf8_text(self.source.as_bytes()).unwrap_or("");
                NodeKind::Name(text.to_string())
            }
            _ => NodeKind::Other,
        }
    }
}

/// Whether an identifier node stands for a plain name reference.
///
/// Declared names, attribute accessors, keyword-argument names, formal
/// parameters and import components name things rather than refer to
/// them, so they are excluded.
fn is_reference_position(node: Node<'_>, field: Option<&str>) -> bool {
    let Some(parent) = node.parent() else {
        return true;
    };
    !matches!(
        (parent.kind(), field),
        ("function_definition" | "class_definition", Some("name"))
            | ("attribute", Some("attribute"))
            | ("keyword_argument", Some("name"))
            | ("parameters" | "lambda_parameters" | "typed_parameter", _)
            | ("default_parameter" | "typed_default_parameter", Some("name"))
            | ("dotted_name" | "aliased_import", _)
    )
}

/// Locate the first error or missing node under `root`.
fn first_error_point(root: Node<'_>) -> Point {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return node.start_position();
        }
        // Descend only into subtrees that actually contain the error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return root.start_position();
            }
        }
    }
}
