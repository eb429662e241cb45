// lzor: LZO1X block codec boundary

pub mod block;
pub mod hc;
pub mod codec;
pub mod checksum;
pub mod chunked;
pub mod config;
pub mod sample;
pub mod cli;
#[cfg(feature = "c-abi")]
pub mod abi;

// ── Version constants (the LZO release whose bit-stream the engine follows) ──
pub const LZO_VERSION: u32 = 0x20a0;
pub const LZO_VERSION_STRING: &str = "2.10";
pub const LZO_VERSION_DATE: &str = "Mar 01 2017";

/// Returns the version number (equivalent to lzo_version()).
pub fn version_number() -> u32 {
    LZO_VERSION
}

/// Returns the version string (equivalent to lzo_version_string()).
pub fn version_string() -> &'static str {
    LZO_VERSION_STRING
}

/// Returns the release date (equivalent to lzo_version_date()).
pub fn version_date() -> &'static str {
    LZO_VERSION_DATE
}

// ── Top-level API ─────────────────────────────────────────────────────────────
pub use block::types::{compress_bound, LzoStatus, Method};
pub use checksum::{adler32, lzo_adler32, ADLER32_INIT_VALUE, CRC32_INIT_VALUE};
#[cfg(feature = "crc32")]
pub use checksum::{crc32, lzo_crc32};
pub use chunked::{compress_blocks, decompress_blocks, CompressedBlock};
pub use codec::{compress, compress_block, decompress, decompress_block, init, CodecError};
pub use config::BLOCK_SIZE;
