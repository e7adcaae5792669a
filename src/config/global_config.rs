//! Global configuration management
//!
//! Provides user-level defaults stored in ~/.hashseal/config.toml

use crate::core::error::{Result, SealError};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration for Hashseal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default values applied when a flag is omitted
    #[serde(default)]
    pub defaults: Defaults,
}

/// Configurable per-user defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Digest algorithm name (built-in fallback: sha256)
    pub algorithm: Option<String>,
    /// Signature appended to mined tokens (built-in fallback: G040612)
    pub signature: Option<String>,
    /// Search time budget in milliseconds (built-in fallback: 60000)
    pub budget_ms: Option<u64>,
    /// Mining worker count (built-in fallback: logical processors)
    pub workers: Option<usize>,
}

impl GlobalConfig {
    /// Load global configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content).map_err(|e| {
            SealError::configuration(format!(
                "failed to parse {}: {e}",
                config_path.display()
            ))
        })
    }

    /// Load global configuration, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "using built-in defaults");
                Self::default()
            },
        }
    }

    /// Path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new()
            .ok_or_else(|| SealError::configuration("home directory not found"))?;
        Ok(user_dirs.home_dir().join(".hashseal").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_deserializes() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(config.defaults.algorithm.is_none());
        assert!(config.defaults.workers.is_none());
    }

    #[test]
    fn test_defaults_table() {
        let config: GlobalConfig = toml::from_str(
            r#"
            [defaults]
            algorithm = "sha512"
            budget_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.algorithm.as_deref(), Some("sha512"));
        assert_eq!(config.defaults.budget_ms, Some(5000));
        assert!(config.defaults.signature.is_none());
    }
}
