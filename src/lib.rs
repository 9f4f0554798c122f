//! Canonical Huffman decode tables.
//!
//! A [`CanonicalHuffmanTable`] is built once from per-symbol code lengths and
//! answers whether a `(code, code_len)` pair is a complete code and which
//! symbol it decodes to. Codes are assigned the RFC 1951 way: shorter codes are
//! numerically smaller, and codes of equal length follow symbol order.

pub mod error;
pub mod huffman;
pub mod lengths;

pub use error::{Error, InvalidInput, Result};
pub use huffman::{
    assign_codes, assign_codes_with_config, CanonicalCode, CanonicalHuffmanTable, DecodeStep,
    PrefixDecoder,
};
pub use lengths::parse_code_lengths;

/// Maximum code length for DEFLATE alphabets (RFC 1951)
pub const DEFLATE_MAX_CODE_LEN: u8 = 15;

/// Longest code length any table supports; codes are held in a `u32`
pub const MAX_SUPPORTED_CODE_LEN: u8 = 32;

/// Largest alphabet a table can hold; symbols are `u16`
pub const MAX_SYMBOLS: usize = u16::MAX as usize + 1;

/// Configuration for building code tables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Longest code length accepted (default: 15, the DEFLATE limit)
    pub max_code_len: u8,
    /// Reject code lengths that leave part of the code space unassigned
    pub require_complete: bool,
}

impl TableConfig {
    /// Config accepting any length up to [`MAX_SUPPORTED_CODE_LEN`]
    pub fn widest() -> Self {
        Self { max_code_len: MAX_SUPPORTED_CODE_LEN, ..Default::default() }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { max_code_len: DEFLATE_MAX_CODE_LEN, require_complete: false }
    }
}
