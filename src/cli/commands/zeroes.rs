//! Zeroes command implementation
//!
//! Target-prefix search: finds the first token whose appended digest starts
//! with the requested number of zeroes and writes
//! `<path>.<algorithm>.<"0" x N>`.

use crate::block::artifact::{derived_path, write_derived, DerivedKind};
use crate::cli::commands::{resolve_algorithm, resolve_budget, search_spinner};
use crate::config::GlobalConfig;
use crate::core::content::Content;
use crate::mining::{search, SearchPolicy, TargetPrefix};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

/// Execute the zeroes command
#[allow(clippy::too_many_arguments)]
pub fn execute(
    path: PathBuf,
    zeroes: usize,
    algorithm: Option<String>,
    budget: Option<Duration>,
    signature: Option<String>,
    json: bool,
    quiet: bool,
    no_progress: bool,
) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;
    let budget = resolve_budget(budget, &config);

    // Parameter and input validation happens before any search work.
    let mut selector = TargetPrefix::new(zeroes)?;
    let content = Content::load(&path)?;
    let base = content.stamped_base();

    let mut policy = SearchPolicy::new(budget);
    policy.signature = signature.filter(|s| !s.is_empty());

    let spinner = search_spinner(
        "Searching, this may take a while".to_string(),
        quiet || no_progress,
    );
    let on_iteration = |_: u64| spinner.inc(1);

    let started = std::time::Instant::now();
    let outcome = search(
        base.as_ref(),
        algorithm,
        &mut selector,
        &policy,
        Some(&on_iteration),
    );
    spinner.finish_and_clear();
    let result = outcome?;
    let elapsed = started.elapsed();

    let output_path = derived_path(&path, algorithm, &DerivedKind::Zeroes(zeroes));
    write_derived(&path, &output_path, &content, &result.token)?;

    if json {
        let output = serde_json::json!({
            "path": path,
            "algorithm": algorithm.name(),
            "zeroes": zeroes,
            "token": result.token,
            "digest": result.digest,
            "output": output_path,
            "elapsed_ms": elapsed.as_millis() as u64,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !quiet {
        println!(
            "Finished searching a digest with {zeroes} zeroes after {}",
            humantime::format_duration(Duration::from_millis(elapsed.as_millis() as u64))
        );
        println!();
        println!(
            "{}",
            format!("Found digest with at least {zeroes} zeroes:").green()
        );
        println!("  Token:  {}", result.token.cyan());
        println!("  Digest: {}", result.digest.cyan());
        println!();
        println!(
            "{} Created file with appended token at {}",
            "✓".green(),
            output_path.display()
        );
    }

    Ok(())
}
