use super::codes::{CanonicalCode, CodeSpace};
use crate::error::{Error, Result};
use crate::TableConfig;

/// Codes of one length: `count` consecutive values starting at `first_code`,
/// whose symbols start at `offset` in the flat symbol array
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LengthRange {
    first_code: u32,
    count: u32,
    offset: usize,
}

impl LengthRange {
    fn symbols(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.count as usize
    }
}

/// Canonical Huffman decode table.
///
/// Built once from per-symbol code lengths and immutable afterwards. Codes of a
/// given length form one contiguous range, so a lookup is a bounds check plus
/// an index into that length's symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalHuffmanTable {
    max_code_len: u8,
    /// Code range for each length, indexed by `code_len - 1`
    ranges: Vec<LengthRange>,
    /// Active symbols ordered by code length, then by code
    symbols: Vec<u16>,
    complete: bool,
}

impl CanonicalHuffmanTable {
    /// Build from code lengths, one per symbol (0 = symbol unused).
    ///
    /// Lengths above 15 are rejected; use [`with_config`](Self::with_config)
    /// for wider alphabets.
    pub fn new(code_lengths: &[u8]) -> Result<Self> {
        Self::with_config(code_lengths, &TableConfig::default())
    }

    /// Build from code lengths under `config`
    pub fn with_config(code_lengths: &[u8], config: &TableConfig) -> Result<Self> {
        let space = CodeSpace::new(code_lengths, config)?;
        let max_code_len = space.max_code_len();

        let mut ranges = Vec::with_capacity(max_code_len as usize);
        let mut offset = 0;
        for len in 1..=max_code_len {
            let count = space.count(len);
            ranges.push(LengthRange { first_code: space.first_code(len), count, offset });
            offset += count as usize;
        }

        // Symbols are visited in index order, which is also code order within
        // a length, so each one lands at `code - first_code` in its range.
        let mut symbols = vec![0u16; offset];
        let mut next: Vec<usize> = ranges.iter().map(|r| r.offset).collect();
        for (symbol, &len) in code_lengths.iter().enumerate() {
            if len > 0 {
                let slot = &mut next[len as usize - 1];
                symbols[*slot] = symbol as u16;
                *slot += 1;
            }
        }

        Ok(Self { max_code_len, ranges, symbols, complete: space.is_complete() })
    }

    fn range(&self, code_len: u8) -> Option<&LengthRange> {
        let idx = (code_len as usize).checked_sub(1)?;
        self.ranges.get(idx).filter(|r| r.count > 0)
    }

    #[inline]
    fn index_of(&self, code: u32, code_len: u8) -> Option<usize> {
        let range = self.range(code_len)?;
        let delta = code.checked_sub(range.first_code)?;
        (delta < range.count).then(|| range.offset + delta as usize)
    }

    /// Whether `code` is a complete code of exactly `code_len` bits.
    ///
    /// `false` is not an error: a bit-by-bit decoder keeps reading.
    #[inline]
    pub fn contains(&self, code: u32, code_len: u8) -> bool {
        self.index_of(code, code_len).is_some()
    }

    /// Symbol for a code that [`contains`](Self::contains) accepts
    pub fn get(&self, code: u32, code_len: u8) -> Result<u16> {
        self.decode(code, code_len).ok_or(Error::InvalidCode { code, code_len })
    }

    /// Symbol for `code` if it is a complete `code_len`-bit code
    #[inline]
    pub fn decode(&self, code: u32, code_len: u8) -> Option<u16> {
        self.index_of(code, code_len).map(|idx| self.symbols[idx])
    }

    /// Longest code length in the table
    pub fn max_code_len(&self) -> u8 {
        self.max_code_len
    }

    /// Shortest code length in the table
    pub fn min_code_len(&self) -> u8 {
        self.ranges.iter().position(|r| r.count > 0).map_or(self.max_code_len, |i| i as u8 + 1)
    }

    /// Smallest code of length `code_len`, if any symbol has that length
    pub fn min_code(&self, code_len: u8) -> Option<u32> {
        self.range(code_len).map(|r| r.first_code)
    }

    /// Largest code of length `code_len`, if any symbol has that length
    pub fn max_code(&self, code_len: u8) -> Option<u32> {
        self.range(code_len).map(|r| r.first_code + (r.count - 1))
    }

    /// Symbols with codes of length `code_len`, in ascending code order
    pub fn symbols(&self, code_len: u8) -> &[u16] {
        match self.range(code_len) {
            Some(range) => &self.symbols[range.symbols()],
            None => &[],
        }
    }

    /// Number of symbols with a code
    pub fn num_symbols(&self) -> usize {
        self.symbols.len()
    }

    /// Whether every bit string of `max_code_len` bits starts with a code
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// All `(symbol, code)` pairs, ordered by length then code
    pub fn codes(&self) -> impl Iterator<Item = (u16, CanonicalCode)> + '_ {
        self.ranges.iter().zip(1u8..).flat_map(move |(range, len)| {
            let first_code = range.first_code;
            self.symbols[range.symbols()]
                .iter()
                .zip(0u32..)
                .map(move |(&symbol, i)| (symbol, CanonicalCode::new(first_code + i, len)))
        })
    }
}
