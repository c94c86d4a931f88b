//! Precomputed ASCII decimal strings for every octet value.
//!
//! Dotted-decimal encoding renders each of the four address octets as its
//! decimal text (1-3 bytes, no leading zeros). All 256 renderings are baked
//! into a table at compile time so the hot loop never formats integers.

/// The decimal text of one octet value: up to 3 ASCII digits plus its length.
#[derive(Debug, Clone, Copy)]
pub struct Octet {
    /// ASCII digits, left-aligned; bytes past `len` are unused.
    pub bytes: [u8; 3],
    /// Number of significant digits (1, 2, or 3).
    pub len: u8,
}

impl Octet {
    /// The significant digits as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

/// Decimal renderings for all octet values 0..=255.
pub static OCTETS: [Octet; 256] = build_table();

const fn build_table() -> [Octet; 256] {
    let mut table = [Octet { bytes: [0; 3], len: 0 }; 256];
    let mut value = 0;
    while value < 256 {
        let len: u8 = if value >= 100 {
            3
        } else if value >= 10 {
            2
        } else {
            1
        };

        let mut bytes = [0u8; 3];
        let mut v = value;
        let mut i = len as usize;
        while i > 0 {
            i -= 1;
            bytes[i] = b'0' + (v % 10) as u8;
            v /= 10;
        }

        table[value] = Octet { bytes, len };
        value += 1;
    }
    table
}
