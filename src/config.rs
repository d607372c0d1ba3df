//! Scan configuration for codeverbs.
//!
//! A config file is optional; every field has a sensible default so the
//! CLI works on a bare directory with no setup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["codeverbs.yaml", ".codeverbs.yaml"];

/// Default result size when neither flag nor config specifies one.
pub const DEFAULT_TOP: usize = 10;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Sub-directories of the scan root to treat as one merged corpus.
    /// Empty means the root itself is the corpus.
    #[serde(default)]
    pub projects: Vec<String>,
    /// Default result size.
    #[serde(default)]
    pub top: Option<usize>,
    /// Glob patterns for paths to exclude from the scan
    /// (e.g. "**/migrations/**", "**/vendor/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Lexicon resource overrides for the tagger.
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,
}

/// Where the tagger's lexicon comes from.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LexiconConfig {
    /// Local lexicon file; wins over `url`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Remote bundle URL, fetched once and cached.
    #[serde(default)]
    pub url: Option<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Look for a config file in the current directory.
    pub fn discover() -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Result size, honoring the default.
    pub fn top_or_default(&self) -> usize {
        self.top.unwrap_or(DEFAULT_TOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
projects:
  - django
  - flask
top: 20
excluded_paths:
  - "**/migrations/**"
lexicon:
  url: "https://example.org/lexicon.tsv"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.projects, vec!["django", "flask"]);
        assert_eq!(config.top_or_default(), 20);
        assert_eq!(config.excluded_paths.len(), 1);
        assert!(config.lexicon.unwrap().url.is_some());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.projects.is_empty());
        assert_eq!(config.top_or_default(), DEFAULT_TOP);
        assert!(config.excluded_paths.is_empty());
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn test_parse_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("codeverbs.yaml");
        fs::write(&path, "top: 5\n").unwrap();

        let config = Config::parse_file(&path).unwrap();
        assert_eq!(config.top_or_default(), 5);
    }
}
