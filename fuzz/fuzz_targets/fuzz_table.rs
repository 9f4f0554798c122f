#![no_main]

use canonhuff::{assign_codes, CanonicalHuffmanTable, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Each byte is one symbol's code length, folded into 0-15
    let lengths: Vec<u8> = data.iter().map(|&b| b & 0x0F).collect();

    let table = match CanonicalHuffmanTable::new(&lengths) {
        Ok(table) => table,
        // Rejected inputs are fine; we're looking for panics
        Err(Error::InvalidInput(_)) => return,
        Err(e) => panic!("unexpected error: {}", e),
    };

    // Every assigned code must decode back to its symbol
    let codes = assign_codes(&lengths).expect("table built, so codes must assign");
    for (symbol, code) in codes.iter().enumerate() {
        if let Some(code) = code {
            assert_eq!(table.decode(code.code, code.len), Some(symbol as u16));
        }
    }
    assert_eq!(table.codes().count(), table.num_symbols());
});
