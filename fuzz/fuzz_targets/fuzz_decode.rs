#![no_main]

use canonhuff::CanonicalHuffmanTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bits against the fixed literal/length code
    let table = CanonicalHuffmanTable::fixed_literal_length();
    let bits = data.iter().flat_map(|&byte| (0..8).map(move |i| (byte >> i) & 1 == 1));

    // Decoding may fail on truncated input - that's OK
    let _ = table.decode_all(bits);
});
