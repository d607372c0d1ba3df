//! codeverbs CLI entry point.

use clap::Parser;
use codeverbs::cli::{self, Cli, Commands, ScanKind, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Verbs(args) => report(cli::run_scan(ScanKind::Verbs, &args)),
        Commands::Functions(args) => report(cli::run_scan(ScanKind::Functions, &args)),
        Commands::Words(args) => report(cli::run_scan(ScanKind::Words, &args)),
        Commands::Init(args) => report(cli::run_init(&args)),
    };

    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}
