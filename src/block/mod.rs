//! LZO1X block engine: format constants, token writer, the LZO1X-1 encoders,
//! and the safe decoder.
//!
//! This layer plays the part of the native LZO library. It works on
//! caller-provided slices only, reports `LzoStatus` codes, and keeps no state
//! between calls. The typed, allocating API lives in [`crate::codec`].

pub mod compress;
pub mod decompress_core;
pub(crate) mod encode;
pub mod types;

// Re-export the most important public API items at the module level.
pub use compress::{lzo1x_1_15_compress, lzo1x_1_compress};
pub use decompress_core::lzo1x_decompress_safe;
pub use types::{
    compress_bound, LzoStatus, Method, LZO1X_1_15_MEM_COMPRESS, LZO1X_1_MEM_COMPRESS,
    LZO1X_999_MEM_COMPRESS, M4_MAX_OFFSET, WRK_LEN,
};
