//! Algorithms listing command implementation

use crate::core::digest::Algorithm;
use anyhow::Result;

/// Execute the algorithms command
pub fn execute(json: bool) -> Result<()> {
    let names: Vec<&str> = Algorithm::all().iter().map(Algorithm::name).collect();

    if json {
        let output = serde_json::json!({ "algorithms": names });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }

    Ok(())
}
