//! Hashseal - a content-authentication utility
//!
//! Hashseal computes cryptographic digests of files and text and performs
//! proof-of-work-style mining: it appends a search token (nonce) to file
//! content until the resulting digest satisfies a target property, either a
//! required leading-zero prefix or the lexicographically smallest value
//! reachable within a time budget, optionally parallelized across worker
//! threads. A companion validator checks that a mined artifact was correctly
//! derived from a given origin file.
//!
//! # Core Features
//!
//! - **Digest registry**: md5/sha1/sha2-family digests behind one
//!   name-indexed [`Algorithm`] type
//! - **Target-prefix search**: first token whose digest starts with N zeroes
//! - **Best-effort mining**: smallest digest within a time budget, the nonce
//!   space interleaved across worker threads
//! - **Block validation**: containment, signature-line grammar, and
//!   proof-of-work checks over a mined artifact
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use hashseal::mining::{mine, MineOptions};
//! use hashseal::{Algorithm, Content};
//!
//! let content = Content::new(b"hello\n".to_vec());
//! let base = content.stamped_base();
//!
//! let result = mine(base.as_ref(), Algorithm::Sha256, &MineOptions::default(), None)?;
//! println!("{} {}", result.digest, result.token);
//! # Ok::<(), hashseal::SealError>(())
//! ```

pub mod block;
pub mod cli;
pub mod config;
pub mod core;
pub mod mining;

// Re-export commonly used types
pub use core::{
    content::Content,
    digest::Algorithm,
    error::{Result, SealError},
};

pub use mining::{
    coordinator::{mine, MineOptions},
    search::{search, SearchPolicy, SearchResult},
    selector::{BestEffort, Selector, TargetPrefix},
};

pub use block::{
    validator::{validate, Rejection, SignatureRule},
    DEFAULT_SIGNATURE,
};

/// Current version of Hashseal
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
