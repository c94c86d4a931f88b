//! Dotted-decimal encoding of 32-bit addresses into reusable SHA-256 blocks.
//!
//! An address renders to between 7 ("0.0.0.0") and 15 ("255.255.255.255")
//! bytes of text. The encoder keeps one pre-padded 64-byte block per possible
//! text length: the 0x80 delimiter, zero padding, and bit-length byte are
//! written once at construction, so each encode only overwrites the message
//! bytes and hands the block straight to the compression engine.

use alloc::format;
use alloc::string::String;

use crate::table::OCTETS;

/// Shortest dotted-decimal text, "0.0.0.0".
pub const MIN_TEXT_LEN: usize = 7;
/// Longest dotted-decimal text, "255.255.255.255".
pub const MAX_TEXT_LEN: usize = 15;

/// Number of distinct text lengths, one pre-padded block per length.
const PAD_COUNT: usize = MAX_TEXT_LEN - MIN_TEXT_LEN + 1;

/// Encoder owning the pre-padded blocks for every possible text length.
///
/// Each worker owns one `Encoder`; nothing here is shared across threads.
pub struct Encoder {
    pads: [[u8; 64]; PAD_COUNT],
}

impl Encoder {
    /// Create an encoder with all nine blocks pre-padded for their length.
    pub fn new() -> Self {
        let mut pads = [[0u8; 64]; PAD_COUNT];
        for (i, pad) in pads.iter_mut().enumerate() {
            let len = MIN_TEXT_LEN + i;
            pad[len] = 0x80;
            // Message bit length fits in the final byte: 15 * 8 < 256.
            pad[63] = (len * 8) as u8;
        }
        Encoder { pads }
    }

    /// Encode an address into its padded block.
    ///
    /// Returns the block ready for single-block compression and the message
    /// length in bytes. Only bytes `[0, len)` of the block are overwritten;
    /// the padding laid down in `new` is never touched again.
    #[inline]
    pub fn encode(&mut self, address: u32) -> (&[u8; 64], usize) {
        let [n1, n2, n3, n4] = address.to_be_bytes();
        let a = &OCTETS[n1 as usize];
        let b = &OCTETS[n2 as usize];
        let c = &OCTETS[n3 as usize];
        let d = &OCTETS[n4 as usize];

        let len = 3 + (a.len + b.len + c.len + d.len) as usize;
        let pad = &mut self.pads[len - MIN_TEXT_LEN];

        let mut i = 0;
        for octet in [a, b, c] {
            let bytes = octet.as_bytes();
            pad[i..i + bytes.len()].copy_from_slice(bytes);
            i += bytes.len();
            pad[i] = b'.';
            i += 1;
        }
        let bytes = d.as_bytes();
        pad[i..i + bytes.len()].copy_from_slice(bytes);

        (&self.pads[len - MIN_TEXT_LEN], len)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an address as its canonical dotted-decimal string.
///
/// Only used for human-readable reporting; the hot path goes through
/// [`Encoder::encode`].
pub fn address_text(address: u32) -> String {
    let [n1, n2, n3, n4] = address.to_be_bytes();
    format!("{}.{}.{}.{}", n1, n2, n3, n4)
}
