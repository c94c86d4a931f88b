//! The per-worker scan loop.
//!
//! A worker owns one contiguous range of the address space and drives
//! encode -> compress -> match over every address in increasing order. All
//! per-worker state (pre-padded blocks, schedule, counters) is thread-local;
//! the only shared objects are the stop flag and the worker's own progress
//! counter, which nothing else ever writes.

use alloc::string::String;
use core::ops::Range;
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::encode::{address_text, Encoder};
use crate::sha256::{state_to_bytes, Backend};
use crate::target::Target;

/// How often the stop flag is polled: once per 65,536 addresses.
const STOP_CHECK_MASK: u64 = 0xFFFF;

/// A successful preimage hit.
#[derive(Debug, Clone)]
pub struct Match {
    /// The matching 32-bit address.
    pub address: u32,
    /// Its canonical dotted-decimal text, the actual preimage.
    pub text: String,
    /// The digest of the candidate, equal to the target.
    pub digest: [u8; 32],
}

/// Scan `range` for an address whose digest equals `target`.
///
/// `progress` is published with the number of non-matching candidates
/// processed so far; after exhausting a range of size `k` with no match it
/// reads exactly `k`. On a hit the stop flag is raised before returning so
/// sibling workers halt at their next checkpoint, and no further address in
/// this range is examined.
pub fn search_range(
    range: Range<u64>,
    target: &Target,
    backend: Backend,
    stop: &AtomicBool,
    progress: &AtomicU64,
) -> Option<Match> {
    let mut encoder = Encoder::new();
    let mut processed: u64 = 0;

    for address in range {
        if address & STOP_CHECK_MASK == 0 && stop.load(Ordering::Relaxed) {
            return None;
        }

        let address = address as u32;
        let (block, len) = encoder.encode(address);
        let state = backend.digest_words(block, len);

        if target.matches(&state) {
            stop.store(true, Ordering::Relaxed);
            return Some(Match {
                address,
                text: address_text(address),
                digest: state_to_bytes(&state),
            });
        }

        processed += 1;
        progress.store(processed, Ordering::Relaxed);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn target_of(message: &[u8]) -> Target {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(message));
        Target::from_bytes(&digest)
    }

    #[test]
    fn test_finds_target_inside_range() {
        let target = target_of(b"1.2.3.4");
        let stop = AtomicBool::new(false);
        let progress = AtomicU64::new(0);

        let found = search_range(
            0x01020300..0x01020310,
            &target,
            Backend::Fused,
            &stop,
            &progress,
        )
        .expect("match in range");

        assert_eq!(found.address, 0x01020304);
        assert_eq!(found.text, "1.2.3.4");
        assert_eq!(found.digest.as_slice(), Sha256::digest(b"1.2.3.4").as_slice());
        assert!(stop.load(Ordering::Relaxed));
        // Four candidates were processed before the hit.
        assert_eq!(progress.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn test_finds_first_address() {
        let target = target_of(b"0.0.0.0");
        let stop = AtomicBool::new(false);
        let progress = AtomicU64::new(0);

        let found = search_range(0..256, &target, Backend::Fused, &stop, &progress)
            .expect("match at address zero");

        assert_eq!(found.address, 0);
        assert_eq!(found.text, "0.0.0.0");
        assert_eq!(progress.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_exhaustion_counts_every_candidate() {
        // A digest no dotted-decimal string can produce.
        let target = Target::from_bytes(&[0u8; 32]);
        let stop = AtomicBool::new(false);
        let progress = AtomicU64::new(0);

        let found = search_range(1000..6000, &target, Backend::Fused, &stop, &progress);

        assert!(found.is_none());
        assert!(!stop.load(Ordering::Relaxed));
        assert_eq!(progress.load(Ordering::Relaxed), 5000);
    }

    #[test]
    fn test_halts_at_stop_checkpoint() {
        let target = Target::from_bytes(&[0u8; 32]);
        let stop = AtomicBool::new(true);
        let progress = AtomicU64::new(0);

        // Range starts on a checkpoint boundary, so the flag is seen before
        // any candidate is hashed.
        let found = search_range(0x10000..0x30000, &target, Backend::Fused, &stop, &progress);

        assert!(found.is_none());
        assert_eq!(progress.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_portable_backend_finds_same_match() {
        let target = target_of(b"255.255.255.255");
        let stop = AtomicBool::new(false);
        let progress = AtomicU64::new(0);

        let found = search_range(
            0xffffff00..0x1_0000_0000,
            &target,
            Backend::Portable,
            &stop,
            &progress,
        )
        .expect("match at last address");

        assert_eq!(found.address, u32::MAX);
        assert_eq!(found.text, "255.255.255.255");
        assert_eq!(progress.load(Ordering::Relaxed), 255);
    }
}
