use super::codes::CanonicalCode;
use super::table::CanonicalHuffmanTable;
use crate::error::{Error, Result};

/// Outcome of feeding one bit to a [`PrefixDecoder`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStep {
    /// The bits so far are not yet a complete code
    Incomplete,
    /// A complete code was read; the decoder is ready for the next one
    Symbol(u16),
    /// `max_code_len` bits matched no code; the decoder has been reset
    Invalid { code: u32, code_len: u8 },
}

/// Incremental decoder fed one bit at a time.
///
/// Holds only the partial code, so any number of decoders can share one table.
#[derive(Clone, Debug)]
pub struct PrefixDecoder<'a> {
    table: &'a CanonicalHuffmanTable,
    code: u32,
    code_len: u8,
}

impl<'a> PrefixDecoder<'a> {
    pub fn new(table: &'a CanonicalHuffmanTable) -> Self {
        Self { table, code: 0, code_len: 0 }
    }

    /// Append the next bit (MSB-first within a code)
    pub fn push(&mut self, bit: bool) -> DecodeStep {
        self.code = (self.code << 1) | u32::from(bit);
        self.code_len += 1;

        if let Some(symbol) = self.table.decode(self.code, self.code_len) {
            self.reset();
            return DecodeStep::Symbol(symbol);
        }
        if self.code_len >= self.table.max_code_len() {
            let step = DecodeStep::Invalid { code: self.code, code_len: self.code_len };
            self.reset();
            return step;
        }
        DecodeStep::Incomplete
    }

    /// Discard any partial code
    pub fn reset(&mut self) {
        self.code = 0;
        self.code_len = 0;
    }

    /// Bits accumulated since the last complete code, if any
    pub fn pending(&self) -> Option<CanonicalCode> {
        (self.code_len > 0).then(|| CanonicalCode::new(self.code, self.code_len))
    }

    pub fn table(&self) -> &'a CanonicalHuffmanTable {
        self.table
    }
}

impl CanonicalHuffmanTable {
    /// Decode the next symbol, pulling bits one at a time from `bits`.
    ///
    /// Bits are consumed only up to the end of the decoded code.
    pub fn decode_bits<I>(&self, bits: &mut I) -> Result<u16>
    where
        I: Iterator<Item = bool> + ?Sized,
    {
        let mut code = 0u32;
        for code_len in 1..=self.max_code_len() {
            let bit = bits.next().ok_or(Error::UnexpectedEof)?;
            code = (code << 1) | u32::from(bit);
            if self.contains(code, code_len) {
                return self.get(code, code_len);
            }
        }
        Err(Error::InvalidCode { code, code_len: self.max_code_len() })
    }

    /// Decode every symbol in `bits`, which must end on a code boundary
    pub fn decode_all<I>(&self, bits: I) -> Result<Vec<u16>>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut decoder = PrefixDecoder::new(self);
        let mut symbols = Vec::new();
        for bit in bits {
            match decoder.push(bit) {
                DecodeStep::Incomplete => {}
                DecodeStep::Symbol(symbol) => symbols.push(symbol),
                DecodeStep::Invalid { code, code_len } => {
                    return Err(Error::InvalidCode { code, code_len })
                }
            }
        }
        match decoder.pending() {
            Some(_) => Err(Error::UnexpectedEof),
            None => Ok(symbols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    fn abcd() -> CanonicalHuffmanTable {
        CanonicalHuffmanTable::new(&[2, 1, 3, 3]).unwrap()
    }

    #[test]
    fn test_push_bit_by_bit() {
        let table = abcd();
        let mut decoder = PrefixDecoder::new(&table);

        assert_eq!(decoder.push(true), DecodeStep::Incomplete);
        assert_eq!(decoder.pending(), Some(CanonicalCode::new(0b1, 1)));
        assert_eq!(decoder.push(true), DecodeStep::Incomplete);
        assert_eq!(decoder.push(false), DecodeStep::Symbol(2));
        assert_eq!(decoder.pending(), None);
        assert_eq!(decoder.push(false), DecodeStep::Symbol(1));
    }

    #[test]
    fn test_push_invalid_resets() {
        // Only 0 and 10 are codes; 11 can never complete
        let table = CanonicalHuffmanTable::new(&[1, 2]).unwrap();
        let mut decoder = PrefixDecoder::new(&table);

        assert_eq!(decoder.push(true), DecodeStep::Incomplete);
        assert_eq!(decoder.push(true), DecodeStep::Invalid { code: 0b11, code_len: 2 });
        assert_eq!(decoder.pending(), None);
        assert_eq!(decoder.push(false), DecodeStep::Symbol(0));
    }

    #[test]
    fn test_decode_bits_stops_at_code_boundary() {
        let table = abcd();
        let stream = bits("110100");
        let mut iter = stream.into_iter();

        assert_eq!(table.decode_bits(&mut iter).unwrap(), 2);
        assert_eq!(table.decode_bits(&mut iter).unwrap(), 0);
        assert_eq!(table.decode_bits(&mut iter).unwrap(), 1);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_decode_bits_truncated() {
        let table = abcd();
        let mut iter = bits("11").into_iter();
        assert!(matches!(table.decode_bits(&mut iter), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_decode_bits_invalid() {
        let table = CanonicalHuffmanTable::new(&[1, 2]).unwrap();
        let mut iter = bits("11").into_iter();
        assert!(matches!(
            table.decode_bits(&mut iter),
            Err(Error::InvalidCode { code: 0b11, code_len: 2 })
        ));
    }

    #[test]
    fn test_decode_all() {
        let table = abcd();
        assert_eq!(table.decode_all(bits("0101101110")).unwrap(), vec![1, 0, 2, 3, 1]);
        assert!(table.decode_all(Vec::new()).unwrap().is_empty());
        assert!(matches!(table.decode_all(bits("011")), Err(Error::UnexpectedEof)));
    }
}
