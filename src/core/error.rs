//! Error types for Hashseal

use crate::block::validator::Rejection;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Hashseal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Input-related errors
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Unsupported digest algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error("Invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// Search-related errors
    #[error("No qualifying digest found after searching {visited} candidates")]
    ExhaustedSearchSpace { visited: u64 },

    #[error("Workers have not returned any digest")]
    NoResults,

    /// Validation errors
    #[error("Validation rejected: {0}")]
    Rejected(Rejection),

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SealError {
    /// Create a new input not found error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a new unsupported algorithm error
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Process exit status for this error class.
    ///
    /// Each fatal condition gets a distinct status so callers can tell a
    /// missing input apart from an exhausted search or a rejected block.
    pub fn exit_code(&self) -> i32 {
        match self {
            SealError::InputNotFound { .. } => 2,
            SealError::UnsupportedAlgorithm { .. } | SealError::InvalidParameter { .. } => 3,
            SealError::ExhaustedSearchSpace { .. } => 4,
            SealError::NoResults => 5,
            SealError::Rejected(_) => 6,
            SealError::ConfigurationError { .. } | SealError::Io(_) => 1,
        }
    }
}

/// Result type alias for Hashseal operations
pub type Result<T> = std::result::Result<T, SealError>;
