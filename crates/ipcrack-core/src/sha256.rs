//! Single-block SHA-256 compression specialized for short messages.
//!
//! The search only ever hashes 7-15 byte candidates, so the whole digest fits
//! in one 64-byte block and the streaming machinery of a general hasher is
//! dead weight. [`compress_block`] is the unmodified FIPS 180-4 compression
//! function run once over an already-padded block; callers own the padding
//! invariant (see [`crate::encode::Encoder`]).
//!
//! [`Backend::Portable`] routes the same contract through the `sha2` crate,
//! which picks up hardware acceleration where available and doubles as the
//! reference implementation in tests.

use sha2::{Digest, Sha256};

/// SHA-256 initial hash values (FIPS 180-4 §5.3.3).
const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 round constants (FIPS 180-4 §4.2.2).
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Compress one padded 64-byte block and return the eight state words.
///
/// The block must already carry the 0x80 delimiter, zero padding, and
/// big-endian bit length; no validation is performed. State, schedule, and
/// working variables all live on the stack.
#[inline]
pub fn compress_block(block: &[u8; 64]) -> [u32; 8] {
    let mut w = [0u32; 64];
    for t in 0..16 {
        w[t] = u32::from_be_bytes([
            block[4 * t],
            block[4 * t + 1],
            block[4 * t + 2],
            block[4 * t + 3],
        ]);
    }
    for t in 16..64 {
        let s0 = w[t - 15].rotate_right(7) ^ w[t - 15].rotate_right(18) ^ (w[t - 15] >> 3);
        let s1 = w[t - 2].rotate_right(17) ^ w[t - 2].rotate_right(19) ^ (w[t - 2] >> 10);
        w[t] = w[t - 16]
            .wrapping_add(s0)
            .wrapping_add(w[t - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = IV;

    for t in 0..64 {
        let big_s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ (!e & g);
        let t1 = h
            .wrapping_add(big_s1)
            .wrapping_add(ch)
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let big_s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t2 = big_s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    [
        IV[0].wrapping_add(a),
        IV[1].wrapping_add(b),
        IV[2].wrapping_add(c),
        IV[3].wrapping_add(d),
        IV[4].wrapping_add(e),
        IV[5].wrapping_add(f),
        IV[6].wrapping_add(g),
        IV[7].wrapping_add(h),
    ]
}

/// Serialize the eight state words as a big-endian 32-byte digest.
///
/// Only needed for the final human-readable report; matching happens on the
/// raw words.
pub fn state_to_bytes(state: &[u32; 8]) -> [u8; 32] {
    let mut digest = [0u8; 32];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

/// Which implementation backs the `digest(block, len) -> state` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The hand-written single-block compression above.
    Fused,
    /// The `sha2` crate, fed the unpadded message bytes.
    Portable,
}

impl Backend {
    /// Digest one candidate and return the eight SHA-256 state words.
    ///
    /// Both backends produce bit-identical output for any valid block.
    #[inline]
    pub fn digest_words(self, block: &[u8; 64], len: usize) -> [u32; 8] {
        match self {
            Backend::Fused => compress_block(block),
            Backend::Portable => {
                let digest = Sha256::digest(&block[..len]);
                let mut words = [0u32; 8];
                for (word, chunk) in words.iter_mut().zip(digest.chunks_exact(4)) {
                    *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                words
            }
        }
    }

    /// The display name used in the startup banner.
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Fused => "fused",
            Backend::Portable => "portable",
        }
    }
}
