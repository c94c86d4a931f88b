//! Configuration errors, all detected before any worker starts.

use ipcrack_core::TargetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid target hash: {0}")]
    InvalidTarget(TargetError),

    #[error("thread count must be at least 1")]
    NoThreads,
}
