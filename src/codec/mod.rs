//! The codec boundary: owned-buffer compression and decompression on top of
//! the slice-based engine in [`crate::block`] and [`crate::hc`].
//!
//! Each call:
//! 1. makes sure the engine passed its one-time self-test ([`init`]),
//! 2. allocates the output (and, for compression, the working memory),
//! 3. runs the engine and translates its [`LzoStatus`] into a [`CodecError`].
//!
//! Nothing is shared between calls except the write-once init cell, so any
//! number of threads may call in concurrently.

pub mod error;
pub mod memory;

use std::sync::OnceLock;

use crate::block::compress::{lzo1x_1_15_compress, lzo1x_1_compress};
use crate::block::decompress_core::lzo1x_decompress_safe;
use crate::block::types::{compress_bound, LzoStatus, Method};
use crate::hc::compress::lzo1x_999_compress_level;

pub use error::CodecError;
pub use memory::WorkingMemory;
use memory::alloc_output;

// ─────────────────────────────────────────────────────────────────────────────
// Process initialisation
// ─────────────────────────────────────────────────────────────────────────────

static INIT: OnceLock<Result<(), LzoStatus>> = OnceLock::new();

const SELF_TEST_INPUT: &[u8] = b"lzo self-test lzo self-test lzo self-test";

fn self_test() -> Result<(), LzoStatus> {
    if crate::checksum::adler32(1, b"a") != 0x0062_0062 {
        return Err(LzoStatus::Error);
    }
    let mut wrk = [0u32; 1 << crate::block::types::LZO1X_1_D_BITS];
    let mut packed = [0u8; compress_bound(SELF_TEST_INPUT.len())];
    let n = lzo1x_1_compress(SELF_TEST_INPUT, &mut packed, &mut wrk)?;
    let mut back = [0u8; SELF_TEST_INPUT.len()];
    let m = lzo1x_decompress_safe(&packed[..n], &mut back)?;
    if m != SELF_TEST_INPUT.len() || back[..] != *SELF_TEST_INPUT {
        return Err(LzoStatus::InternalError);
    }
    Ok(())
}

/// Runs the engine self-test once per process and returns its outcome.
///
/// Idempotent and thread-safe; [`compress`] and [`decompress`] call it, so
/// hosts only need it to surface a failure early.
pub fn init() -> Result<(), LzoStatus> {
    *INIT.get_or_init(|| {
        let result = self_test();
        match result {
            Ok(()) => log::debug!("lzo engine self-test passed"),
            Err(status) => log::warn!("lzo engine self-test failed: {}", status),
        }
        result
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Compression
// ─────────────────────────────────────────────────────────────────────────────

/// Compresses `input` as a single LZO1X block.
///
/// The output is at most [`compress_bound`]`(input.len())` bytes. Callers are
/// expected to chunk their data (see [`crate::config::BLOCK_SIZE`]); no limit
/// is enforced here.
pub fn compress(input: &[u8], method: Method) -> Result<Vec<u8>, CodecError> {
    init().map_err(CodecError::NativeFailure)?;

    let bound = compress_bound(input.len());
    let mut out = alloc_output(bound)?;
    let mut wrk = WorkingMemory::for_method(method)?;
    assert!(wrk.size() >= method.work_mem_size(), "{method}: working memory too small");

    let words = wrk.as_words_mut();
    let status = match method {
        Method::Fast => lzo1x_1_compress(input, &mut out, words),
        Method::FastSmallWindow => lzo1x_1_15_compress(input, &mut out, words),
        Method::MaxCompression(level) => lzo1x_999_compress_level(input, &mut out, words, level),
    };

    let produced = match status {
        Ok(n) => n,
        Err(LzoStatus::OutputOverrun) => {
            log::warn!("{} overran the {}-byte bound for {} input bytes", method, bound, input.len());
            return Err(CodecError::InternalOverflow { produced: None, bound });
        }
        Err(status) => return Err(CodecError::NativeFailure(status)),
    };
    if produced > bound {
        log::warn!("{} reported {} bytes, bound is {}", method, produced, bound);
        return Err(CodecError::InternalOverflow { produced: Some(produced), bound });
    }

    out.truncate(produced);
    out.shrink_to_fit();
    log::debug!("compress {}: {} -> {} bytes", method, input.len(), produced);
    Ok(out)
}

/// Host-shaped [`compress`]: `method` is the integer id (1, 2 or 3) and
/// `level` is used by method 3 only.
pub fn compress_block(input: &[u8], method: u32, level: i32) -> Result<Vec<u8>, CodecError> {
    let method = Method::from_wire(method, level).ok_or(CodecError::UnsupportedMethod(method))?;
    compress(input, method)
}

// ─────────────────────────────────────────────────────────────────────────────
// Decompression
// ─────────────────────────────────────────────────────────────────────────────

/// Decompresses one LZO1X block that must expand to exactly `expected_len`
/// bytes.
///
/// Decoding is bounded by `expected_len` while it runs, so a hostile stream
/// cannot write past the buffer; a stream that would produce more, or that
/// ends short, is a [`CodecError::LengthMismatch`].
pub fn decompress(input: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
    init().map_err(CodecError::NativeFailure)?;

    let mut out = alloc_output(expected_len)?;
    match lzo1x_decompress_safe(input, &mut out) {
        Ok(n) if n == expected_len => {
            log::debug!("decompress: {} -> {} bytes", input.len(), n);
            Ok(out)
        }
        Ok(n) => Err(CodecError::LengthMismatch { expected: expected_len, actual: Some(n) }),
        Err(LzoStatus::OutputOverrun) => {
            Err(CodecError::LengthMismatch { expected: expected_len, actual: None })
        }
        Err(status) => Err(CodecError::DecompressionFailed(status)),
    }
}

/// Host name of [`decompress`].
#[inline]
pub fn decompress_block(input: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
    decompress(input, expected_len)
}
