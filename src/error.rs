use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Construction errors
    #[error("Invalid code lengths: {0}")]
    InvalidInput(#[from] InvalidInput),

    // Lookup errors
    #[error("No symbol for {code_len}-bit code {code:#b}")]
    InvalidCode { code: u32, code_len: u8 },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

/// Reasons a code-length array cannot form a canonical Huffman table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("empty alphabet: no symbol has a nonzero code length")]
    EmptyAlphabet,

    #[error("symbol {symbol} has code length {length} (max {max})")]
    CodeLengthTooLong { symbol: usize, length: u8, max: u8 },

    #[error("{count} symbols exceeds the maximum of {max}")]
    TooManySymbols { count: usize, max: usize },

    #[error("Huffman code oversubscribed: more {length}-bit codes than possible")]
    Oversubscribed { length: u8 },

    #[error("Huffman code incomplete: {unused} of {total} {length}-bit codes unassigned")]
    Incomplete { length: u8, unused: u64, total: u64 },

    #[error("unsupported maximum code length {0} (must be 1-32)")]
    UnsupportedMaxCodeLen(u8),

    #[error("malformed code length {0:?}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
