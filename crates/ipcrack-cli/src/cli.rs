//! Command-line argument parsing.

use clap::{Parser, ValueEnum};
use ipcrack_core::Backend;

/// Brute-force the dotted-decimal IPv4 address behind a SHA-256 digest.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target SHA-256 digest, 64 hex characters
    #[arg(value_name = "HASH")]
    pub hash: String,

    /// Number of worker threads (default: all logical CPUs)
    #[arg(short = 't', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Digest backend
    #[arg(long = "backend", value_enum, default_value = "fused")]
    pub backend: CliBackend,

    /// Seconds between progress reports
    #[arg(long = "interval", value_name = "SECS", default_value_t = 5)]
    pub interval: u64,
}

/// Digest backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliBackend {
    /// Hand-written single-block compression (fastest for this workload)
    Fused,
    /// The sha2 crate's general-purpose hasher
    Portable,
}

impl From<CliBackend> for Backend {
    fn from(backend: CliBackend) -> Self {
        match backend {
            CliBackend::Fused => Backend::Fused,
            CliBackend::Portable => Backend::Portable,
        }
    }
}
