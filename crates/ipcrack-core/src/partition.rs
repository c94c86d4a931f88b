//! Static partitioning of the address space across workers.

use alloc::vec::Vec;
use core::ops::Range;

/// Number of candidate addresses: the search covers [0, 2^32) exactly.
pub const ADDRESS_SPACE: u64 = 1 << 32;

/// Split `[0, total)` into `workers` contiguous, disjoint ranges.
///
/// Each of the first `workers - 1` ranges holds `total / workers` addresses;
/// the integer-division remainder is folded into the last range so the union
/// of all ranges covers the space with no gap at the top. The last worker
/// scans at most `workers - 1` extra addresses.
///
/// Panics if `workers` is zero; the caller validates the thread count before
/// partitioning.
pub fn partition(total: u64, workers: usize) -> Vec<Range<u64>> {
    assert!(workers > 0, "worker count must be positive");
    let step = total / workers as u64;
    (0..workers as u64)
        .map(|i| {
            let start = i * step;
            let end = if i == workers as u64 - 1 {
                total
            } else {
                start + step
            };
            start..end
        })
        .collect()
}
