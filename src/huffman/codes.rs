use std::fmt;

use crate::error::{InvalidInput, Result};
use crate::{TableConfig, MAX_SUPPORTED_CODE_LEN, MAX_SYMBOLS};

/// A canonical Huffman code: the low `len` bits of `code`, MSB-first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalCode {
    pub code: u32,
    pub len: u8,
}

impl CanonicalCode {
    pub fn new(code: u32, len: u8) -> Self {
        Self { code, len }
    }

    /// Bits of the code in the order a decoder accumulates them (MSB first)
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let Self { code, len } = *self;
        (0..len).rev().map(move |i| (code >> i) & 1 == 1)
    }

    /// The code with its `len` bits reversed.
    ///
    /// DEFLATE packs bits LSB-first but Huffman codes MSB-first, so writers
    /// emit this value with an LSB-first bit writer.
    pub fn reversed(&self) -> u32 {
        if self.len == 0 {
            return 0;
        }
        self.code.reverse_bits() >> (32 - u32::from(self.len))
    }

    /// Whether this code is a bit-prefix of `other` (or equal to it)
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        if self.len > other.len {
            return false;
        }
        let shift = u32::from(other.len - self.len);
        other.code.checked_shr(shift).unwrap_or(0) == self.code
    }
}

impl fmt::Display for CanonicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.code, width = self.len as usize)
    }
}

/// Code-length histogram and the first canonical code of each length
#[derive(Clone, Debug)]
pub(crate) struct CodeSpace {
    max_code_len: u8,
    /// Codes per length, indexed by length (entry 0 is always 0)
    counts: Vec<u32>,
    /// First canonical code per length, indexed by length
    first_codes: Vec<u32>,
    complete: bool,
}

impl CodeSpace {
    /// Validate `lengths` and lay out the canonical code space
    pub(crate) fn new(
        lengths: &[u8],
        config: &TableConfig,
    ) -> std::result::Result<Self, InvalidInput> {
        let max = config.max_code_len;
        if max == 0 || max > MAX_SUPPORTED_CODE_LEN {
            return Err(InvalidInput::UnsupportedMaxCodeLen(max));
        }
        if lengths.len() > MAX_SYMBOLS {
            return Err(InvalidInput::TooManySymbols { count: lengths.len(), max: MAX_SYMBOLS });
        }
        if let Some((symbol, &length)) = lengths.iter().enumerate().find(|(_, &len)| len > max) {
            return Err(InvalidInput::CodeLengthTooLong { symbol, length, max });
        }

        let max_code_len = lengths.iter().copied().max().unwrap_or(0);
        if max_code_len == 0 {
            return Err(InvalidInput::EmptyAlphabet);
        }

        let mut counts = vec![0u32; max_code_len as usize + 1];
        for &len in lengths {
            if len > 0 {
                counts[len as usize] += 1;
            }
        }

        // Tracked in u64 so a full 32-bit code space cannot overflow.
        let mut first_codes = vec![0u32; max_code_len as usize + 1];
        let mut code = 0u64;
        let mut end = 0u64;
        for len in 1..=max_code_len as usize {
            code = (code + u64::from(counts[len - 1])) << 1;
            end = code + u64::from(counts[len]);
            if end > 1u64 << len {
                return Err(InvalidInput::Oversubscribed { length: len as u8 });
            }
            first_codes[len] = code as u32;
        }

        let total = 1u64 << max_code_len;
        let complete = end == total;
        if config.require_complete && !complete {
            return Err(InvalidInput::Incomplete {
                length: max_code_len,
                unused: total - end,
                total,
            });
        }

        Ok(Self { max_code_len, counts, first_codes, complete })
    }

    pub(crate) fn max_code_len(&self) -> u8 {
        self.max_code_len
    }

    pub(crate) fn count(&self, len: u8) -> u32 {
        self.counts.get(len as usize).copied().unwrap_or(0)
    }

    pub(crate) fn first_code(&self, len: u8) -> u32 {
        self.first_codes.get(len as usize).copied().unwrap_or(0)
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.complete
    }

    /// Hand out codes in symbol order, incrementing per length
    pub(crate) fn assign(&self, lengths: &[u8]) -> Vec<Option<CanonicalCode>> {
        let mut next_code = self.first_codes.clone();
        lengths
            .iter()
            .map(|&len| {
                (len > 0).then(|| {
                    let slot = &mut next_code[len as usize];
                    let code = CanonicalCode::new(*slot, len);
                    // The last 32-bit code is u32::MAX
                    *slot = slot.wrapping_add(1);
                    code
                })
            })
            .collect()
    }
}

/// Assign canonical codes to `lengths` under the DEFLATE limits.
///
/// Returns one entry per symbol, `None` where the length is 0. The codes are
/// exactly the ones [`CanonicalHuffmanTable`](super::CanonicalHuffmanTable)
/// decodes for the same lengths.
pub fn assign_codes(lengths: &[u8]) -> Result<Vec<Option<CanonicalCode>>> {
    assign_codes_with_config(lengths, &TableConfig::default())
}

/// Assign canonical codes to `lengths` under `config`
pub fn assign_codes_with_config(
    lengths: &[u8],
    config: &TableConfig,
) -> Result<Vec<Option<CanonicalCode>>> {
    let space = CodeSpace::new(lengths, config)?;
    Ok(space.assign(lengths))
}
