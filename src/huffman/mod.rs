pub mod codes;
pub mod decoder;
pub mod fixed;
pub mod table;

pub use codes::{assign_codes, assign_codes_with_config, CanonicalCode};
pub use decoder::{DecodeStep, PrefixDecoder};
pub use table::CanonicalHuffmanTable;
