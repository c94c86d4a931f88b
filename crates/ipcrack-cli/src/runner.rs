//! The coordinator: partitions the space, spawns workers and the progress
//! aggregator, and runs the structured shutdown path.
//!
//! There is no abrupt process teardown on a match. The matching worker
//! raises the shared stop flag, every sibling halts at its next checkpoint,
//! and all threads are joined before the final report is printed, so no
//! work is observable after a match.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ipcrack_core::{partition, search_range, Backend, Match, Target, ADDRESS_SPACE};

use crate::cli::Args;
use crate::error::ConfigError;
use crate::progress::Progress;

/// Granularity of the aggregator's shutdown poll.
const AGGREGATOR_TICK: Duration = Duration::from_millis(100);

/// How a search run ended.
#[derive(Debug)]
pub enum Outcome {
    /// A worker found the preimage.
    Found(Match),
    /// Every worker exhausted its range with no match.
    Exhausted,
    /// Ctrl+C stopped the search early.
    Interrupted,
}

/// Run the full search to completion.
pub fn run(args: Args) -> Result<Outcome, ConfigError> {
    let target = Target::from_hex(&args.hash).map_err(ConfigError::InvalidTarget)?;
    let threads = args.threads.unwrap_or_else(num_cpus::get);
    if threads == 0 {
        return Err(ConfigError::NoThreads);
    }
    let backend = Backend::from(args.backend);

    println!("Searching for: {}", hex::encode(target.to_bytes()));
    println!(" * Threads: {}", threads);
    println!(" * Backend: {}", backend.name());

    let progress = Arc::new(Progress::new(threads, ADDRESS_SPACE));
    let stop = Arc::new(AtomicBool::new(false));
    let done = Arc::new(AtomicBool::new(false));
    let interrupted = Arc::new(AtomicBool::new(false));

    {
        let stop = stop.clone();
        let interrupted = interrupted.clone();
        ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::Relaxed);
            stop.store(true, Ordering::Relaxed);
        })
        .ok();
    }

    let aggregator = spawn_aggregator(
        progress.clone(),
        done.clone(),
        threads,
        Duration::from_secs(args.interval),
    );

    let mut workers = Vec::with_capacity(threads);
    for (index, range) in partition(ADDRESS_SPACE, threads).into_iter().enumerate() {
        let progress = progress.clone();
        let stop = stop.clone();
        workers.push(thread::spawn(move || {
            search_range(range, &target, backend, &stop, progress.worker(index))
        }));
    }

    let mut found = None;
    for worker in workers {
        if let Some(hit) = worker.join().expect("worker thread panicked") {
            found = Some(hit);
        }
    }

    // Workers are all parked; stop the aggregator and take one last sample
    // so the final report reflects everything that was processed.
    done.store(true, Ordering::Relaxed);
    aggregator.join().expect("aggregator thread panicked");
    println!("{}", progress.report_line());

    match found {
        Some(hit) => {
            println!("Found IP: {} ({})", hit.text, hex::encode(hit.digest));
            Ok(Outcome::Found(hit))
        }
        None if interrupted.load(Ordering::Relaxed) => {
            println!("Interrupted, no match found");
            Ok(Outcome::Interrupted)
        }
        None => {
            println!("Exhausted the address space, no match found");
            Ok(Outcome::Exhausted)
        }
    }
}

/// Spawn the aggregator thread: sample and print every `interval`, polling
/// for shutdown at a finer tick, with one final sample on the way out.
fn spawn_aggregator(
    progress: Arc<Progress>,
    done: Arc<AtomicBool>,
    workers: usize,
    interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last = vec![0u64; workers];
        let mut since_report = Duration::ZERO;

        loop {
            if done.load(Ordering::Relaxed) {
                progress.sample(&mut last);
                return;
            }

            thread::sleep(AGGREGATOR_TICK);
            since_report += AGGREGATOR_TICK;

            if since_report >= interval {
                since_report = Duration::ZERO;
                progress.sample(&mut last);
                println!("{}", progress.report_line());
            }
        }
    })
}
