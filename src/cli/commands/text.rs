//! Text digest command implementation

use crate::cli::commands::resolve_algorithm;
use crate::config::GlobalConfig;
use anyhow::Result;

/// Execute the text command
pub fn execute(text: String, algorithm: Option<String>, json: bool) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;

    let digest = algorithm.digest_bytes(text.as_bytes());

    if json {
        let output = serde_json::json!({
            "algorithm": algorithm.name(),
            "digest": digest,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{digest}");
    }

    Ok(())
}
