//! File digest command implementation

use crate::cli::commands::resolve_algorithm;
use crate::config::GlobalConfig;
use anyhow::Result;
use std::path::PathBuf;

/// Execute the file command
pub fn execute(path: PathBuf, algorithm: Option<String>, json: bool) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;

    let digest = algorithm.digest_file(&path)?;

    if json {
        let output = serde_json::json!({
            "path": path,
            "algorithm": algorithm.name(),
            "digest": digest,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{digest}");
    }

    Ok(())
}
