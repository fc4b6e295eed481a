//! Command-line configuration.

use crate::analyzer::SourcePolicy;
use clap::Parser;
use std::path::PathBuf;

/// Default slot count, a prime.
pub const DEFAULT_CAPACITY: usize = 1091;

/// Bucket the distinct words of a text file and report slot occupancy.
#[derive(Parser, Debug, Clone)]
#[command(name = "word-buckets", version)]
pub struct Config {
    /// Plain-text file to analyze.
    pub input: PathBuf,

    /// Number of slots in the table.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Log unreadable input and report an empty or partial table instead
    /// of exiting with an error.
    #[arg(long)]
    pub lenient: bool,
}

impl Config {
    pub fn policy(&self) -> SourcePolicy {
        if self.lenient {
            SourcePolicy::Lenient
        } else {
            SourcePolicy::FailFast
        }
    }
}
