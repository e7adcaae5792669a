//! Global configuration management for Hashseal
//!
//! Stores user defaults in ~/.hashseal/config.toml; command-line flags
//! override configured values, which override the built-in defaults.

pub mod global_config;

// Re-export commonly used items
pub use global_config::{Defaults, GlobalConfig};
