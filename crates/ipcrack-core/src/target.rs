//! The target digest, pre-expanded for word-wise matching.

use core::fmt;

use crate::sha256::state_to_bytes;

/// Target digest parsing errors.
#[derive(Debug, Clone)]
pub enum TargetError {
    /// The hex string could not be decoded.
    InvalidHex(hex::FromHexError),
    /// The decoded digest was not 32 bytes.
    BadLength(usize),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::InvalidHex(e) => write!(f, "Invalid hex digest: {}", e),
            TargetError::BadLength(len) => {
                write!(f, "Digest must be 32 bytes, got {}", len)
            }
        }
    }
}

/// A 32-byte SHA-256 digest expanded into its eight big-endian state words.
///
/// Built once at startup; workers only ever read it.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    words: [u32; 8],
}

impl Target {
    /// Expand a raw 32-byte digest.
    pub fn from_bytes(digest: &[u8; 32]) -> Self {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(digest.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Target { words }
    }

    /// Parse a 64-character hex string into a target.
    pub fn from_hex(hex_str: &str) -> Result<Self, TargetError> {
        let raw = hex::decode(hex_str).map_err(TargetError::InvalidHex)?;
        if raw.len() != 32 {
            return Err(TargetError::BadLength(raw.len()));
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&raw);
        Ok(Target::from_bytes(&digest))
    }

    /// Word-wise comparison against a compression result.
    ///
    /// Returns false at the first differing word; a full match walks all
    /// eight. Pure function of its inputs.
    #[inline]
    pub fn matches(&self, state: &[u32; 8]) -> bool {
        for (lhs, rhs) in state.iter().zip(&self.words) {
            if lhs != rhs {
                return false;
            }
        }
        true
    }

    /// The target as a big-endian 32-byte digest.
    pub fn to_bytes(&self) -> [u8; 32] {
        state_to_bytes(&self.words)
    }
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
    fn test_from_hex_round_trip() {
        // SHA-256("1.2.3.4")
        let hex_str = "6694f83c9f476da31f5df6bcc520034e7e57d421d247b9d34f49edbfc84a764c";
        let target = Target::from_hex(hex_str).unwrap();
        assert_eq!(hex::encode(target.to_bytes()), hex_str);
    }

    #[test]
    fn test_from_hex_rejects_bad_length() {
        match Target::from_hex("deadbeef") {
            Err(TargetError::BadLength(4)) => {}
            other => panic!("expected BadLength(4), got {:?}", other),
        }
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        assert!(matches!(
            Target::from_hex("zz"),
            Err(TargetError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_matches_own_digest() {
        let target = target_of(b"1.2.3.4");
        let mut encoder = crate::encode::Encoder::new();
        let (block, _) = encoder.encode(0x01020304);
        let state = crate::sha256::compress_block(block);
        assert!(target.matches(&state));
    }

    #[test]
    fn test_rejects_other_digest() {
        let target = target_of(b"1.2.3.4");
        let mut encoder = crate::encode::Encoder::new();
        let (block, _) = encoder.encode(0x01020305);
        let state = crate::sha256::compress_block(block);
        assert!(!target.matches(&state));
    }

    #[test]
    fn test_matches_is_idempotent() {
        let target = target_of(b"10.0.0.1");
        let mut encoder = crate::encode::Encoder::new();
        let (block, _) = encoder.encode(0x0a000001);
        let state = crate::sha256::compress_block(block);
        let first = target.matches(&state);
        for _ in 0..10 {
            assert_eq!(target.matches(&state), first);
        }
    }
}
