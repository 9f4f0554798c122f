use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use canonhuff::huffman::fixed::{fixed_distance_lengths, fixed_literal_lengths};
use canonhuff::lengths::read_code_lengths;
use canonhuff::{parse_code_lengths, CanonicalHuffmanTable, Error, TableConfig};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "canonhuff")]
#[command(about = "Inspect canonical Huffman codes and decode bit strings")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Longest code length accepted (1-32)
    #[arg(long, global = true, default_value = "15")]
    max_code_len: u8,

    /// Reject code lengths that leave part of the code space unassigned
    #[arg(long, global = true)]
    require_complete: bool,

    /// Show table statistics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical code of every symbol with a nonzero length
    Codes {
        #[command(flatten)]
        source: Source,
    },
    /// Decode a string of 0/1 bits (each code MSB-first) into symbols
    Decode {
        #[command(flatten)]
        source: Source,

        /// Bits to decode; whitespace and '_' are ignored
        #[arg(short, long)]
        bits: String,
    },
}

/// Where the code lengths come from
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct Source {
    /// Code lengths, comma or space separated (`len*count` repeats)
    #[arg(short, long)]
    lengths: Option<String>,

    /// File with code lengths (use - for stdin)
    #[arg(short = 'f', long)]
    lengths_file: Option<PathBuf>,

    /// One of the fixed DEFLATE codes
    #[arg(long, value_enum)]
    fixed: Option<FixedCode>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FixedCode {
    Literal,
    Distance,
}

/// Exit codes
const EXIT_OK: u8 = 0;
const EXIT_DECODE_FAILED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<u8, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config =
        TableConfig { max_code_len: args.max_code_len, require_complete: args.require_complete };

    match &args.command {
        Command::Codes { source } => {
            let table = build_table(source, &config, args.verbose)?;
            let mut stdout = io::stdout().lock();
            for (symbol, code) in table.codes() {
                writeln!(stdout, "{}\t{}\t{}", symbol, code.len, code)?;
            }
            Ok(EXIT_OK)
        }
        Command::Decode { source, bits } => {
            let table = build_table(source, &config, args.verbose)?;
            let bits = parse_bits(bits)?;
            let num_bits = bits.len();

            match table.decode_all(bits) {
                Ok(symbols) => {
                    let line: Vec<String> = symbols.iter().map(u16::to_string).collect();
                    writeln!(io::stdout().lock(), "{}", line.join(" "))?;
                    if args.verbose {
                        eprintln!("Decoded {} symbols from {} bits", symbols.len(), num_bits);
                    }
                    Ok(EXIT_OK)
                }
                Err(e @ (Error::InvalidCode { .. } | Error::UnexpectedEof)) => {
                    eprintln!("Error: {}", e);
                    Ok(EXIT_DECODE_FAILED)
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

fn build_table(
    source: &Source,
    config: &TableConfig,
    verbose: bool,
) -> Result<CanonicalHuffmanTable, Box<dyn std::error::Error>> {
    let lengths = if let Some(text) = &source.lengths {
        parse_code_lengths(text)?
    } else if let Some(path) = &source.lengths_file {
        if path.to_str() == Some("-") {
            read_code_lengths(io::stdin().lock())?
        } else {
            read_code_lengths(BufReader::new(File::open(path)?))?
        }
    } else {
        match source.fixed {
            Some(FixedCode::Literal) => fixed_literal_lengths().to_vec(),
            Some(FixedCode::Distance) => fixed_distance_lengths().to_vec(),
            None => return Err("no code lengths given".into()),
        }
    };

    let table = CanonicalHuffmanTable::with_config(&lengths, config)?;

    if verbose {
        eprintln!("Table:");
        eprintln!("  Alphabet size:    {}", lengths.len());
        eprintln!("  Active symbols:   {}", table.num_symbols());
        eprintln!("  Code lengths:     {}-{}", table.min_code_len(), table.max_code_len());
        eprintln!("  Complete:         {}", if table.is_complete() { "yes" } else { "no" });
    }

    Ok(table)
}

/// Parse a bit string such as `0101_110`
fn parse_bits(text: &str) -> Result<Vec<bool>, Box<dyn std::error::Error>> {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(format!("invalid bit {:?} (expected 0 or 1)", other).into()),
        })
        .collect()
}
