//! Lexicon resource resolution: local file, cached remote bundle, or the
//! compiled-in default.
//!
//! Remote bundles are cached under the project cache directory so a URL
//! is fetched at most once per machine, not once per run.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::PosTag;

/// Compiled-in default lexicon.
const BUILTIN: &str = include_str!("lexicon.tsv");

/// Timeout for fetching a remote bundle.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while obtaining or reading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon: {0}")]
    Io(#[from] std::io::Error),
    #[error("network error fetching lexicon: {0}")]
    Network(#[from] reqwest::Error),
    #[error("lexicon bundle unavailable: {0}")]
    Unavailable(String),
    #[error("malformed lexicon line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Where to obtain the tagger's lexicon bundle.
///
/// An explicit `path` wins over `url`; with neither set, the compiled-in
/// default is used. Failure to obtain an explicitly requested source is
/// an error, never a silent fallback.
#[derive(Debug, Clone, Default)]
pub struct LexiconSource {
    pub path: Option<PathBuf>,
    pub url: Option<String>,
}

/// A word-to-tag mapping.
#[derive(Debug)]
pub struct Lexicon {
    entries: HashMap<String, PosTag>,
}

impl Lexicon {
    /// The compiled-in default lexicon.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN).expect("builtin lexicon is well-formed")
    }

    /// Parse lexicon text: one `word<tab>tag` entry per line, `#` comments.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let (word, tag) = match (parts.next(), parts.next(), parts.next()) {
                (Some(word), Some(tag), None) => (word, tag),
                _ => {
                    return Err(LexiconError::Malformed {
                        line: number + 1,
                        reason: "expected exactly two fields".to_string(),
                    })
                }
            };
            let tag = PosTag::parse(tag).ok_or_else(|| LexiconError::Malformed {
                line: number + 1,
                reason: format!("unknown tag {:?}", tag),
            })?;
            entries.insert(word.to_lowercase(), tag);
        }
        Ok(Self { entries })
    }

    /// Load a lexicon from a file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Look up the tag recorded for a word (expects lowercase input).
    pub fn lookup(&self, word: &str) -> Option<PosTag> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a lexicon from the configured source.
pub fn resolve(source: &LexiconSource) -> Result<Lexicon, LexiconError> {
    if let Some(path) = &source.path {
        return Lexicon::from_file(path);
    }
    if let Some(url) = &source.url {
        return fetch_cached(url);
    }
    Ok(Lexicon::builtin())
}

/// Fetch a remote bundle, reusing the on-disk cache when present.
fn fetch_cached(url: &str) -> Result<Lexicon, LexiconError> {
    let cached = cache_path(url);

    if let Some(path) = &cached {
        if path.exists() {
            return Lexicon::from_file(path);
        }
    }

    let text = fetch(url)?;
    let lexicon = Lexicon::parse(&text)?;

    if let Some(path) = &cached {
        let _ = fs::write(path, &text);
    }

    Ok(lexicon)
}

/// Cache file location for a bundle URL, if a cache dir is available.
fn cache_path(url: &str) -> Option<PathBuf> {
    let dir = ProjectDirs::from("", "", "codeverbs").map(|dirs| dirs.cache_dir().join("lexicon"))?;
    fs::create_dir_all(&dir).ok()?;
    // Sanitize the URL for use as a filename.
    let filename = url.replace([':', '/', '?', '&', '=', '#'], "_");
    Some(dir.join(format!("{}.tsv", filename)))
}

/// Blocking GET of a lexicon bundle.
fn fetch(url: &str) -> Result<String, LexiconError> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = reqwest::Client::builder()
            .user_agent(concat!("codeverbs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let response = client.get(url).timeout(FETCH_TIMEOUT).send().await?;

        if !response.status().is_success() {
            return Err(LexiconError::Unavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    })
}
