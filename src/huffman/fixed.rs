//! Fixed Huffman codes of RFC 1951 section 3.2.6.

use super::table::CanonicalHuffmanTable;

/// Symbols in the fixed literal/length alphabet (286 and 287 never occur in data)
pub const FIXED_LITERAL_SYMBOLS: usize = 288;

/// Symbols in the fixed distance alphabet (30 and 31 never occur in data)
pub const FIXED_DISTANCE_SYMBOLS: usize = 32;

/// Fixed Huffman literal/length code lengths
pub fn fixed_literal_lengths() -> [u8; FIXED_LITERAL_SYMBOLS] {
    let mut lengths = [0u8; FIXED_LITERAL_SYMBOLS];
    lengths[0..=143].fill(8); // 0-143: 8 bits
    lengths[144..=255].fill(9); // 144-255: 9 bits
    lengths[256..=279].fill(7); // 256-279: 7 bits
    lengths[280..=287].fill(8); // 280-287: 8 bits
    lengths
}

/// Fixed Huffman distance code lengths (all 5 bits)
pub fn fixed_distance_lengths() -> [u8; FIXED_DISTANCE_SYMBOLS] {
    [5u8; FIXED_DISTANCE_SYMBOLS]
}

impl CanonicalHuffmanTable {
    /// Table for the fixed literal/length code
    pub fn fixed_literal_length() -> Self {
        Self::new(&fixed_literal_lengths())
            .expect("fixed literal/length lengths are a complete code")
    }

    /// Table for the fixed distance code
    pub fn fixed_distance() -> Self {
        Self::new(&fixed_distance_lengths()).expect("fixed distance lengths are a complete code")
    }
}
