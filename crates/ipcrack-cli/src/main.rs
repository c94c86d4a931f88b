//! ipcrack: brute-force the dotted-decimal IPv4 address behind a SHA-256
//! digest.

mod cli;
mod error;
mod progress;
mod runner;

use anyhow::Result;
use clap::Parser;

use crate::runner::Outcome;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match runner::run(args)? {
        Outcome::Found(_) => Ok(()),
        Outcome::Exhausted => std::process::exit(1),
        Outcome::Interrupted => std::process::exit(130),
    }
}
