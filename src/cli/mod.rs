//! Command-line interface for Hashseal

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub mod commands;

/// Hashseal - content authentication utility
#[derive(Parser)]
#[command(
    name = "hashseal",
    version,
    about = "Content authentication: file digests, proof-of-work token mining, and mined-block validation",
    long_about = "Hashseal computes cryptographic digests of files and text, mines proof-of-work \
                  tokens that are appended to file copies, and validates that a mined block was \
                  correctly derived from its origin file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable progress spinners
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the digest of a text argument
    Text {
        /// Text to calculate the digest from
        text: String,

        /// Digest algorithm name
        #[arg(short, long, env = "HASHSEAL_ALGORITHM")]
        algorithm: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the digest of a file
    File {
        /// Path to the file
        path: PathBuf,

        /// Digest algorithm name
        #[arg(short, long, env = "HASHSEAL_ALGORITHM")]
        algorithm: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a file with its digest appended as a final line
    Append {
        /// Path to the file
        path: PathBuf,

        /// Digest algorithm name
        #[arg(short, long, env = "HASHSEAL_ALGORITHM")]
        algorithm: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search a token whose appended digest starts with N zeroes
    Zeroes {
        /// Path to the file
        path: PathBuf,

        /// Number of zeroes the digest has to start with
        zeroes: usize,

        /// Digest algorithm name
        #[arg(short, long, env = "HASHSEAL_ALGORITHM")]
        algorithm: Option<String>,

        /// Search time budget (e.g. "60s", "500ms")
        #[arg(long, value_parser = humantime::parse_duration)]
        budget: Option<Duration>,

        /// Signature appended to the token (none by default)
        #[arg(long)]
        signature: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mine the lexicographically smallest digest within a time budget
    Mine {
        /// Path to the file
        path: PathBuf,

        /// Digest algorithm name
        #[arg(short, long, env = "HASHSEAL_ALGORITHM")]
        algorithm: Option<String>,

        /// Search time budget (e.g. "60s", "2m")
        #[arg(long, value_parser = humantime::parse_duration)]
        budget: Option<Duration>,

        /// Worker count (default: available logical processors)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Signature appended to the token (empty disables it)
        #[arg(long)]
        signature: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a mined block was correctly derived from its origin
    Validate {
        /// Block prior to mining
        origin: PathBuf,

        /// Mined block
        mined: PathBuf,

        /// Digest algorithm name
        #[arg(short, long, env = "HASHSEAL_ALGORITHM")]
        algorithm: Option<String>,

        /// Expect this literal signature instead of the default grammar
        #[arg(long)]
        signature: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported digest algorithms
    Algorithms {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
