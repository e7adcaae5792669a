//! Validate command implementation
//!
//! Runs the block validator over an origin file and a mined artifact and
//! reports the first rejection reason, if any.

use crate::block::validator::{validate, SignatureRule};
use crate::cli::commands::resolve_algorithm;
use crate::config::GlobalConfig;
use crate::core::content::Content;
use crate::core::error::SealError;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the validate command
pub fn execute(
    origin: PathBuf,
    mined: PathBuf,
    algorithm: Option<String>,
    signature: Option<String>,
    json: bool,
) -> Result<()> {
    let config = GlobalConfig::load_or_default();
    let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;

    let rule = match signature {
        Some(literal) => SignatureRule::Literal(literal),
        None => SignatureRule::GroupCode,
    };

    // The two content reads; everything after is a pure decision procedure.
    let origin_content = Content::load(&origin)?;
    let mined_bytes = if mined.is_file() {
        std::fs::read(&mined)?
    } else {
        return Err(SealError::input_not_found(mined).into());
    };

    let outcome = validate(&origin_content, &mined_bytes, algorithm, &rule);

    if json {
        let output = serde_json::json!({
            "origin": origin,
            "mined": mined,
            "algorithm": algorithm.name(),
            "ok": outcome.is_ok(),
            "reason": outcome.as_ref().err().map(|rejection| rejection.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if outcome.is_ok() {
        println!(
            "{} The file has passed the rules and proof-of-work",
            "✓".green()
        );
    }

    match outcome {
        Ok(()) => Ok(()),
        Err(rejection) => Err(SealError::Rejected(rejection).into()),
    }
}
