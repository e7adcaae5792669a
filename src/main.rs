//! Hashseal CLI
//!
//! Command-line interface for the Hashseal content-authentication utility.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hashseal::cli::{commands, Cli, Commands};
use hashseal::SealError;

fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default level
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        let code = err
            .downcast_ref::<SealError>()
            .map(SealError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

/// Execute the selected command
fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    let no_progress = cli.no_progress;

    match cli.command {
        Commands::Text {
            text,
            algorithm,
            json,
        } => commands::text::execute(text, algorithm, json),
        Commands::File {
            path,
            algorithm,
            json,
        } => commands::file::execute(path, algorithm, json),
        Commands::Append {
            path,
            algorithm,
            json,
        } => commands::append::execute(path, algorithm, json),
        Commands::Zeroes {
            path,
            zeroes,
            algorithm,
            budget,
            signature,
            json,
        } => commands::zeroes::execute(
            path, zeroes, algorithm, budget, signature, json, quiet, no_progress,
        ),
        Commands::Mine {
            path,
            algorithm,
            budget,
            workers,
            signature,
            json,
        } => commands::mine::execute(
            path, algorithm, budget, workers, signature, json, quiet, no_progress,
        ),
        Commands::Validate {
            origin,
            mined,
            algorithm,
            signature,
            json,
        } => commands::validate::execute(origin, mined, algorithm, signature, json),
        Commands::Algorithms { json } => commands::algorithms::execute(json),
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}
