//! Command-line interface for codeverbs.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_TOP};
use crate::corpus::{self, ScanOptions};
use crate::report;
use crate::tagger::{LexiconSource, Tagger};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Mine Python corpora for naming vocabulary.
///
/// codeverbs parses every Python file under a directory, pulls out the
/// names their authors chose, and ranks the vocabulary: the verbs inside
/// function names, the function names themselves, or the words inside
/// plain identifiers.
#[derive(Parser)]
#[command(name = "codeverbs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the verbs used in function names
    Verbs(ScanArgs),
    /// Rank function names across the corpus
    #[command(visible_alias = "funcs")]
    Functions(ScanArgs),
    /// Rank the words used in plain identifiers
    Words(ScanArgs),
    /// Create a starter config file from a template
    Init(InitArgs),
}

/// What a scan command ranks.
#[derive(Debug, Clone, Copy)]
pub enum ScanKind {
    Verbs,
    Functions,
    Words,
}

impl ScanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanKind::Verbs => "verbs",
            ScanKind::Functions => "functions",
            ScanKind::Words => "words",
        }
    }
}

/// Arguments shared by the scan commands.
#[derive(Parser)]
pub struct ScanArgs {
    /// Corpus root directory
    pub path: PathBuf,

    /// Number of entries to report
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Output format: pretty, plain, or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Path to config YAML (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lexicon file overriding the built-in one
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "codeverbs.yaml")]
    pub output: PathBuf,

    /// Template to use
    #[arg(short, long, default_value = "default")]
    pub template: String,

    /// List available templates
    #[arg(short, long)]
    pub list: bool,
}

/// Available config templates.
struct Template {
    name: &'static str,
    description: &'static str,
    content: &'static str,
}

static TEMPLATES: &[Template] = &[
    Template {
        name: "default",
        description: "Scan one directory with a small exclude list",
        content: include_str!("templates/default.yaml"),
    },
    Template {
        name: "multi-project",
        description: "Merge several project checkouts into one corpus",
        content: include_str!("templates/multi-project.yaml"),
    },
];

/// Run a scan command.
pub fn run_scan(kind: ScanKind, args: &ScanArgs) -> anyhow::Result<i32> {
    // Validate format
    if !matches!(args.format.as_str(), "pretty" | "plain" | "json") {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'plain', or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Load config if present
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    // Check the corpus root
    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };
    if !metadata.is_dir() {
        eprintln!("Error: {:?} is not a directory", args.path);
        return Ok(EXIT_ERROR);
    }

    let top = args.top.or(config.top).unwrap_or(DEFAULT_TOP);
    let options = ScanOptions {
        projects: config.projects.clone(),
        excluded_paths: config.excluded_paths.clone(),
        quiet: args.quiet,
    };

    let ranked = match kind {
        ScanKind::Verbs => {
            // The tagger's lexicon must resolve before any per-file work;
            // a missing resource is a startup failure, not a scan failure.
            let source = lexicon_source(args, &config);
            let tagger = match Tagger::ensure_initialized(&source) {
                Ok(tagger) => tagger,
                Err(e) => {
                    eprintln!("Error: cannot initialize tagger: {}", e);
                    return Ok(EXIT_ERROR);
                }
            };
            corpus::top_verbs(&args.path, &options, tagger, top)?
        }
        ScanKind::Functions => corpus::top_function_names(&args.path, &options, top)?,
        ScanKind::Words => corpus::top_words(&args.path, &options, top)?,
    };

    let path_str = args.path.to_string_lossy();
    match args.format.as_str() {
        "plain" => report::write_plain(&ranked),
        "json" => report::write_json(kind.as_str(), &path_str, &ranked)?,
        _ => report::write_pretty(kind.as_str(), &path_str, &ranked),
    }

    Ok(EXIT_SUCCESS)
}

/// Load the config named by the flag, or a discovered one, or defaults.
fn load_config(args: &ScanArgs) -> anyhow::Result<Config> {
    match &args.config {
        Some(path) => Config::parse_file(path),
        None => match Config::discover() {
            Some(path) => Config::parse_file(&path),
            None => Ok(Config::default()),
        },
    }
}

/// Combine the lexicon flag with the config's lexicon section.
fn lexicon_source(args: &ScanArgs, config: &Config) -> LexiconSource {
    let configured = config.lexicon.clone().unwrap_or_default();
    LexiconSource {
        path: args.lexicon.clone().or(configured.path),
        url: configured.url,
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.list {
        return list_templates();
    }

    let template = match TEMPLATES.iter().find(|t| t.name == args.template) {
        Some(t) => t,
        None => {
            eprintln!("Error: unknown template {:?}", args.template);
            eprintln!("Run 'codeverbs init --list' to see available templates");
            return Ok(EXIT_ERROR);
        }
    };

    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, template.content) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!(
        "Created {} from template '{}'",
        args.output.display(),
        template.name
    );
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to fit your corpus", args.output.display());
    println!(
        "  2. Run: codeverbs verbs . --config {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}

/// List available templates.
fn list_templates() -> anyhow::Result<i32> {
    println!("Available templates:");
    println!();

    for template in TEMPLATES {
        let name = if template.name == "default" {
            format!("{} (default)", template.name)
        } else {
            template.name.to_string()
        };
        println!("  {:<20} {}", name, template.description);
    }

    println!();
    println!("Usage:");
    println!("  codeverbs init --template <name>");

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_kind_names() {
        assert_eq!(ScanKind::Verbs.as_str(), "verbs");
        assert_eq!(ScanKind::Functions.as_str(), "functions");
        assert_eq!(ScanKind::Words.as_str(), "words");
    }

    #[test]
    fn test_templates_are_valid_yaml() {
        for template in TEMPLATES {
            let parsed: Result<Config, _> = serde_yaml::from_str(template.content);
            assert!(parsed.is_ok(), "template {} must parse", template.name);
        }
    }

    #[test]
    fn test_default_config_names_are_searched() {
        assert!(crate::config::DEFAULT_CONFIG_NAMES.contains(&"codeverbs.yaml"));
    }

    #[test]
    fn test_lexicon_source_flag_wins_over_config() {
        let args = ScanArgs {
            path: PathBuf::from("."),
            top: None,
            format: "pretty".to_string(),
            config: None,
            lexicon: Some(PathBuf::from("override.tsv")),
            quiet: true,
        };
        let config = Config {
            lexicon: Some(crate::config::LexiconConfig {
                path: Some(PathBuf::from("configured.tsv")),
                url: Some("https://example.org/lexicon.tsv".to_string()),
            }),
            ..Default::default()
        };

        let source = lexicon_source(&args, &config);
        assert_eq!(source.path, Some(PathBuf::from("override.tsv")));
        assert_eq!(
            source.url,
            Some("https://example.org/lexicon.tsv".to_string())
        );
    }
}
