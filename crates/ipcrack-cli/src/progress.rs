//! Progress aggregation and the periodic report line.
//!
//! Each worker publishes its own candidate count; the aggregator is the only
//! thread that reads them, folds the deltas since its last sample into one
//! global counter, and prints the throughput line. Totals are eventually
//! consistent, which is fine: the report is observational, never a
//! correctness dependency.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Shared progress state: one counter per worker plus the global sum.
pub struct Progress {
    workers: Vec<AtomicU64>,
    global: AtomicU64,
    total: u64,
    started: Instant,
}

impl Progress {
    pub fn new(workers: usize, total: u64) -> Self {
        Progress {
            workers: (0..workers).map(|_| AtomicU64::new(0)).collect(),
            global: AtomicU64::new(0),
            total,
            started: Instant::now(),
        }
    }

    /// The counter owned by worker `index`. Only that worker writes it.
    pub fn worker(&self, index: usize) -> &AtomicU64 {
        &self.workers[index]
    }

    /// Fold each worker's delta since the last sample into the global
    /// counter and return the new total. `last` is the aggregator's private
    /// per-worker snapshot from the previous call.
    pub fn sample(&self, last: &mut [u64]) -> u64 {
        for (counter, prev) in self.workers.iter().zip(last.iter_mut()) {
            let current = counter.load(Ordering::Relaxed);
            let delta = current - *prev;
            *prev = current;
            if delta > 0 {
                self.global.fetch_add(delta, Ordering::Relaxed);
            }
        }
        self.global.load(Ordering::Relaxed)
    }

    /// Render the current report line without sampling.
    pub fn report_line(&self) -> String {
        let processed = self.global.load(Ordering::Relaxed);
        format_report(processed, self.total, self.started.elapsed().as_secs_f64())
    }
}

/// Format the progress line in the fixed report shape.
///
/// Rate and ETA are shown as `--` until elapsed time and throughput are both
/// computable, so the first report can never divide by zero.
pub fn format_report(processed: u64, total: u64, elapsed: f64) -> String {
    let percent = processed as f64 / total as f64 * 100.0;
    let rate = if elapsed > 0.0 {
        processed as f64 / elapsed
    } else {
        0.0
    };

    if rate > 0.0 && rate.is_finite() {
        let eta = (total - processed) as f64 / rate;
        format!(
            "{}/{} IPs | {:.2} IPs/sec | Progress: {:.2}% | ETA: {:.2}s | Elapsed: {:.2}s",
            processed, total, rate, percent, eta, elapsed
        )
    } else {
        format!(
            "{}/{} IPs | -- IPs/sec | Progress: {:.2}% | ETA: -- | Elapsed: {:.2}s",
            processed, total, percent, elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_accumulates_deltas() {
        let progress = Progress::new(2, 1000);
        let mut last = vec![0u64; 2];

        progress.worker(0).store(10, Ordering::Relaxed);
        progress.worker(1).store(5, Ordering::Relaxed);
        assert_eq!(progress.sample(&mut last), 15);

        // Second sample only adds what changed.
        progress.worker(0).store(25, Ordering::Relaxed);
        assert_eq!(progress.sample(&mut last), 30);
        assert_eq!(last, vec![25, 5]);
    }

    #[test]
    fn test_sample_is_stable_without_new_work() {
        let progress = Progress::new(1, 1000);
        let mut last = vec![0u64; 1];
        progress.worker(0).store(42, Ordering::Relaxed);
        assert_eq!(progress.sample(&mut last), 42);
        assert_eq!(progress.sample(&mut last), 42);
    }

    #[test]
    fn test_report_with_throughput() {
        let line = format_report(500, 1000, 2.0);
        assert_eq!(
            line,
            "500/1000 IPs | 250.00 IPs/sec | Progress: 50.00% | ETA: 2.00s | Elapsed: 2.00s"
        );
    }

    #[test]
    fn test_report_guards_zero_elapsed() {
        let line = format_report(0, 1000, 0.0);
        assert!(line.contains("-- IPs/sec"));
        assert!(line.contains("ETA: --"));
    }

    #[test]
    fn test_report_guards_zero_processed() {
        // Elapsed but nothing counted yet: rate is 0, ETA undefined.
        let line = format_report(0, 1000, 5.0);
        assert!(line.contains("-- IPs/sec"));
        assert!(line.contains("Elapsed: 5.00s"));
    }
}
