// config.rs: Compile-time configuration constants.
//
// Runtime knobs are the CLI flags in `cli::args`; everything here is fixed at
// build time. Optional capabilities are cargo features (`crc32`, `c-abi`).

use crate::block::types::{Method, KB, MB};

// Recommended chunk size for callers of `codec::compress`.
// Matches the block size lzop writes. Not enforced by the boundary;
// `chunked::compress_blocks` and `lzo bench` use it as their default.
pub const BLOCK_SIZE: usize = 256 * KB;

// Largest block `chunked` will write or accept.
// lzop refuses to read blocks declaring more than this.
pub const MAX_BLOCK_SIZE: usize = 64 * MB;

// Method used when the host or CLI does not pick one.
pub const DEFAULT_METHOD: Method = Method::Fast;

// LZO1X-999 level used by `lzo compress -m 3` when no `-l` is given.
// Level 9 is the one lzop's `-9` selects.
pub const DEFAULT_999_LEVEL: i32 = 9;

// Seconds `lzo bench` spends per method when timing.
pub const BENCH_SECONDS_DEFAULT: u64 = 1;

// Size of the synthetic corpus `lzo bench` generates when no file is given.
pub const BENCH_SYNTHETIC_SIZE: usize = 4 * MB;
