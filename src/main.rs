//! symscript CLI - processes Doxygen XML and prints the version script.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use symscript::{SymbolRegistry, render, scan_file};

/// Processes the XML generated by "make doc" and produces summary
/// information on symbols the library intends to make public.
#[derive(Parser)]
#[command(name = "symscript")]
#[command(version)]
struct Cli {
    /// Doxygen XML files to process
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        // No inputs is a request for usage, not an error.
        let mut command = Cli::command();
        command.print_help().ok();
        return ExitCode::SUCCESS;
    }

    let mut registry = SymbolRegistry::new();

    for path in &cli.files {
        if let Err(error) = scan_file(path, &mut registry) {
            tracing::error!(path = %path.display(), %error, "failed to process input");
        }
    }

    for symbol in registry.conflicts() {
        tracing::warn!(symbol, "recorded as both published and suppressed");
    }

    print!("{}", render(&registry));
    ExitCode::SUCCESS
}
