//! Command-line grammar of the `lzo` binary.
//!
//! ```text
//! lzo [-v]... compress   [-m 1|2|3] [-l LEVEL] IN OUT
//! lzo [-v]... decompress --size N IN OUT
//! lzo [-v]... checksum   [--crc32] [--seed S] IN
//! lzo [-v]... bench      [-m 1|2|3] [-l LEVEL] [-B SIZE] [-i SECS] [IN]
//! lzo version
//! ```
//!
//! Sizes accept a `K`, `KB`, `KiB`, `M`, `MB` or `MiB` suffix (`-B 64K`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::block::types::Method;
use crate::config::{BENCH_SECONDS_DEFAULT, BLOCK_SIZE, DEFAULT_999_LEVEL, DEFAULT_METHOD};

#[derive(Debug, Parser)]
#[command(name = "lzo", version, about = "LZO1X block compression, decompression and checksums")]
pub struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress IN as a single LZO1X block into OUT.
    Compress {
        #[command(flatten)]
        method: MethodArgs,
        input: PathBuf,
        output: PathBuf,
    },
    /// Decompress a single LZO1X block of exactly --size bytes.
    Decompress {
        /// Uncompressed size of the block.
        #[arg(long, value_parser = parse_size)]
        size: usize,
        input: PathBuf,
        output: PathBuf,
    },
    /// Print the Adler-32 (or CRC-32) of IN as eight hex digits.
    Checksum {
        /// Use CRC-32 instead of Adler-32.
        #[arg(long)]
        crc32: bool,
        /// Starting value; defaults to 1 for Adler-32 and 0 for CRC-32.
        #[arg(long, value_parser = parse_u32)]
        seed: Option<u32>,
        input: PathBuf,
    },
    /// Measure compression and decompression speed.
    Bench(BenchArgs),
    /// Print the LZO format version.
    Version,
}

#[derive(Debug, Args, Clone, Copy)]
pub struct MethodArgs {
    /// 1 = LZO1X-1, 2 = LZO1X-1(15), 3 = LZO1X-999.
    #[arg(short, long, default_value_t = DEFAULT_METHOD.wire_id())]
    pub method: u32,
    /// LZO1X-999 level, 1..=9.
    #[arg(short, long, default_value_t = DEFAULT_999_LEVEL)]
    pub level: i32,
}

impl MethodArgs {
    /// Resolves the flags; `None` for an unknown method id.
    pub fn resolve(&self) -> Option<Method> {
        Method::from_wire(self.method, self.level)
    }
}

#[derive(Debug, Args)]
pub struct BenchArgs {
    #[command(flatten)]
    pub method: MethodArgs,
    /// Block size used to split the input.
    #[arg(short = 'B', long, value_parser = parse_size, default_value_t = BLOCK_SIZE)]
    pub block_size: usize,
    /// Minimum seconds spent per direction.
    #[arg(short = 'i', long, default_value_t = BENCH_SECONDS_DEFAULT)]
    pub seconds: u64,
    /// Benchmark every method instead of just -m.
    #[arg(long)]
    pub all: bool,
    /// File to benchmark; synthetic text when absent.
    pub input: Option<PathBuf>,
}

// ── Value parsers ────────────────────────────────────────────────────────────

/// Parses `N[K|KB|KiB|M|MB|MiB]`.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return Err(format!("'{s}' is not a size"));
    }
    let value: usize = s[..digits_end]
        .parse()
        .map_err(|_| format!("'{s}' is too large"))?;
    let shift = match &s[digits_end..] {
        "" => 0,
        "K" | "KB" | "KiB" => 10,
        "M" | "MB" | "MiB" => 20,
        other => return Err(format!("unknown size suffix '{other}'")),
    };
    value
        .checked_mul(1usize << shift)
        .ok_or_else(|| format!("'{s}' is too large"))
}

/// Parses a decimal or `0x`-prefixed hexadecimal `u32`.
pub fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("'{s}': {e}"))
}
