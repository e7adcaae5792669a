//! Mine command implementation
//!
//! Best-effort multi-worker search for the lexicographically smallest digest
//! reachable within the time budget; writes `<path>.<algorithm>.mined`.

use crate::block::artifact::{derived_path, write_derived, DerivedKind};
use crate::cli::commands::{resolve_algorithm, resolve_budget, resolve_signature, search_spinner};
use crate::config::GlobalConfig;
use crate::core::content::Content;
use crate::mining::{mine, MineOptions};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

/// Execute the mine command
#[allow(clippy::too_many_arguments)]
pub fn execute(
    path: PathBuf,
    algorithm: Option<String>,
    budget: Option<Duration>,
    workers: Option<usize>,
    signature: Option<String>,
    json: bool,
    quiet: bool,
    no_progress: bool,
) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;

    let options = MineOptions {
        workers: workers.or(config.defaults.workers).unwrap_or(0),
        budget: resolve_budget(budget, &config),
        signature: resolve_signature(signature, &config),
        ..MineOptions::default()
    };
    let worker_count = options.effective_workers();

    let content = Content::load(&path)?;
    let base = content.stamped_base();

    let spinner = search_spinner(
        format!("Mining file with {worker_count} workers"),
        quiet || no_progress,
    );
    let on_iteration = |_: u64| spinner.inc(1);

    let started = std::time::Instant::now();
    let outcome = mine(base.as_ref(), algorithm, &options, Some(&on_iteration));
    spinner.finish_and_clear();
    let result = outcome?;
    let elapsed = started.elapsed();

    let output_path = derived_path(&path, algorithm, &DerivedKind::Mined);
    write_derived(&path, &output_path, &content, &result.token)?;

    if json {
        let output = serde_json::json!({
            "path": path,
            "algorithm": algorithm.name(),
            "workers": worker_count,
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
            "Finished mining after {}",
            humantime::format_duration(Duration::from_millis(elapsed.as_millis() as u64))
        );
        println!();
        println!("{}", "Optimal candidate:".green());
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
