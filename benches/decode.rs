//! Benchmarks for canonhuff table construction and decoding.
//!
//! Uses the fixed DEFLATE literal/length code and a skewed 15-bit code.

use canonhuff::huffman::fixed::fixed_literal_lengths;
use canonhuff::{assign_codes, CanonicalHuffmanTable};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate symbols with a simple xorshift PRNG
fn generate_symbols(count: usize, alphabet: &[u16], seed: u64) -> Vec<u16> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            alphabet[(state % alphabet.len() as u64) as usize]
        })
        .collect()
}

/// Skewed lengths 1, 2, ..., 14, 15, 15: every length in use
fn skewed_lengths() -> Vec<u8> {
    let mut lengths: Vec<u8> = (1..=15).collect();
    lengths.push(15);
    lengths
}

/// Encode symbols as MSB-first bits per code
fn encode(lengths: &[u8], symbols: &[u16]) -> Vec<bool> {
    let codes = assign_codes(lengths).unwrap();
    symbols.iter().flat_map(|&s| codes[s as usize].unwrap().bits()).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let fixed = fixed_literal_lengths();
    group.bench_function("fixed_literal_length", |b| {
        b.iter(|| CanonicalHuffmanTable::new(&fixed).unwrap());
    });

    let skewed = skewed_lengths();
    group.bench_function("skewed_15_bit", |b| {
        b.iter(|| CanonicalHuffmanTable::new(&skewed).unwrap());
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let inputs =
        [("fixed_literal_length", fixed_literal_lengths().to_vec()), ("skewed", skewed_lengths())];
    for (name, lengths) in inputs.iter() {
        let table = CanonicalHuffmanTable::new(lengths).unwrap();
        let alphabet: Vec<u16> = table.codes().map(|(symbol, _)| symbol).collect();

        for count in [1024usize, 64 * 1024].iter() {
            let symbols = generate_symbols(*count, &alphabet, 0x2545_F491_4F6C_DD1D);
            let bits = encode(lengths, &symbols);

            group.throughput(Throughput::Elements(*count as u64));
            group.bench_with_input(BenchmarkId::new(*name, count), &bits, |b, bits| {
                b.iter(|| table.decode_all(bits.iter().copied()).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let table = CanonicalHuffmanTable::fixed_literal_length();

    c.bench_function("contains_all_9_bit_prefixes", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for code_len in 1..=9u8 {
                for code in 0..(1u32 << code_len) {
                    hits += u32::from(table.contains(code, code_len));
                }
            }
            hits
        });
    });
}

criterion_group!(benches, bench_build, bench_decode, bench_contains);
criterion_main!(benches);
