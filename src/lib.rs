//! codeverbs - mines Python corpora for naming vocabulary.
//!
//! codeverbs answers a lexical question about a codebase: which verbs do
//! its authors reach for when naming functions? It parses every Python
//! file into a syntax tree, extracts identifier tokens, splits them
//! along snake_case boundaries, tags each word grammatically, and ranks
//! the resulting vocabulary by frequency across the whole corpus.
//!
//! # Architecture
//!
//! The pipeline runs strictly forward, one stage feeding the next:
//!
//! - `parser`: tree-sitter based syntax tree provider and walker
//! - `words`: identifier decomposition and the dunder filter
//! - `tagger`: lexicon-backed part-of-speech tagging and verb selection
//! - `rank`: frequency counting with first-seen tie-breaking
//! - `corpus`: file discovery and corpus-wide orchestration
//! - `config`: optional YAML scan configuration
//! - `report`: plain, pretty, and JSON output
//! - `cli`: command-line driver

pub mod cli;
pub mod config;
pub mod corpus;
pub mod parser;
pub mod rank;
pub mod report;
pub mod tagger;
pub mod words;

pub use config::Config;
pub use corpus::{
    collect_sources, top_function_names, top_verbs, top_words, Ranked, ScanOptions, ScanStats,
};
pub use parser::{extract_function_names, extract_names, NodeKind, ParseError, SyntaxTree};
pub use rank::{top_n, FrequencyTable};
pub use tagger::{Lexicon, LexiconError, LexiconSource, PosTag, Tagger};
pub use words::{is_reserved, split_words};
