//! Textual code-length lists, as accepted by the command-line tool.
//!
//! Lengths are separated by commas and/or whitespace; `len*count` repeats a
//! length, so the fixed literal/length code is `8*144 9*112 7*24 8*8`.

use std::io::Read;

use crate::error::{InvalidInput, Result};
use crate::MAX_SYMBOLS;

/// Parse a list of code lengths, one per symbol
pub fn parse_code_lengths(text: &str) -> Result<Vec<u8>> {
    let mut lengths = Vec::new();
    let tokens = text.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty());

    for token in tokens {
        let malformed = || InvalidInput::Malformed(token.to_string());
        let (len, repeat) = match token.split_once('*') {
            Some((len, count)) => (len, count.parse::<usize>().map_err(|_| malformed())?),
            None => (token, 1),
        };
        let len = len.parse::<u8>().map_err(|_| malformed())?;

        let count = lengths.len().saturating_add(repeat);
        if count > MAX_SYMBOLS {
            return Err(InvalidInput::TooManySymbols { count, max: MAX_SYMBOLS }.into());
        }
        lengths.resize(count, len);
    }

    Ok(lengths)
}

/// Read and parse a code-length list from `reader`
pub fn read_code_lengths<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_code_lengths(&text)
}
