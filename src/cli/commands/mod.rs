//! CLI command implementations

pub mod algorithms;
pub mod append;
pub mod completion;
pub mod file;
pub mod mine;
pub mod text;
pub mod validate;
pub mod zeroes;

// Common utilities for commands
use crate::block::DEFAULT_SIGNATURE;
use crate::config::GlobalConfig;
use crate::core::digest::Algorithm;
use crate::core::error::Result;
use crate::mining::DEFAULT_BUDGET;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Resolve the algorithm from flag, config, then the built-in default.
///
/// Runs before any search or file copy so unknown names fail fast.
pub fn resolve_algorithm(flag: Option<&str>, config: &GlobalConfig) -> Result<Algorithm> {
    let name = flag
        .or(config.defaults.algorithm.as_deref())
        .unwrap_or("sha256");
    Algorithm::from_name(name)
}

/// Resolve the time budget from flag, config, then the built-in default
pub fn resolve_budget(flag: Option<Duration>, config: &GlobalConfig) -> Duration {
    flag.or(config.defaults.budget_ms.map(Duration::from_millis))
        .unwrap_or(DEFAULT_BUDGET)
}

/// Resolve the mining signature from flag, config, then the built-in
/// default; an explicitly empty signature disables it
pub fn resolve_signature(flag: Option<String>, config: &GlobalConfig) -> Option<String> {
    flag.or_else(|| config.defaults.signature.clone())
        .or_else(|| Some(DEFAULT_SIGNATURE.to_string()))
        .filter(|signature| !signature.is_empty())
}

/// Spinner for long-running searches; hidden under --quiet/--no-progress
pub fn search_spinner(message: String, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} ({pos} hashes, {per_sec})")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_resolution_order() {
        let mut config = GlobalConfig::default();
        assert_eq!(
            resolve_algorithm(None, &config).unwrap(),
            Algorithm::Sha256
        );

        config.defaults.algorithm = Some("md5".to_string());
        assert_eq!(resolve_algorithm(None, &config).unwrap(), Algorithm::Md5);
        assert_eq!(
            resolve_algorithm(Some("sha1"), &config).unwrap(),
            Algorithm::Sha1
        );
    }

    #[test]
    fn test_unknown_algorithm_fails_fast() {
        let config = GlobalConfig::default();
        assert!(resolve_algorithm(Some("whirlpool"), &config).is_err());
    }

    #[test]
    fn test_empty_signature_disables_suffix() {
        let config = GlobalConfig::default();
        assert_eq!(
            resolve_signature(None, &config).as_deref(),
            Some(DEFAULT_SIGNATURE)
        );
        assert_eq!(resolve_signature(Some(String::new()), &config), None);
        assert_eq!(
            resolve_signature(Some("team-seven".to_string()), &config).as_deref(),
            Some("team-seven")
        );
    }

    #[test]
    fn test_budget_resolution() {
        let mut config = GlobalConfig::default();
        assert_eq!(resolve_budget(None, &config), DEFAULT_BUDGET);

        config.defaults.budget_ms = Some(1500);
        assert_eq!(resolve_budget(None, &config), Duration::from_millis(1500));
        assert_eq!(
            resolve_budget(Some(Duration::from_secs(2)), &config),
            Duration::from_secs(2)
        );
    }
}
