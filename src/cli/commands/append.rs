//! Append command implementation
//!
//! Creates `<path>.<algorithm>`: a copy of the origin with its own digest
//! appended as a final line.

use crate::block::artifact::{derived_path, write_derived, DerivedKind};
use crate::cli::commands::resolve_algorithm;
use crate::config::GlobalConfig;
use crate::core::content::Content;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the append command
pub fn execute(path: PathBuf, algorithm: Option<String>, json: bool) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;

    let content = Content::load(&path)?;
    let digest = algorithm.digest_bytes(content.bytes());

    let output_path = derived_path(&path, algorithm, &DerivedKind::Digest);
    write_derived(&path, &output_path, &content, &digest)?;

    if json {
        let output = serde_json::json!({
            "path": path,
            "algorithm": algorithm.name(),
            "digest": digest,
            "output": output_path,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} Created file with digest at {}",
            "✓".green(),
            output_path.display()
        );
    }

    Ok(())
}
