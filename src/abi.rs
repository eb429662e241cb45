//! C-ABI shims: the LZO library symbols a C host links against.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! The produced `target/release/liblzo.a` exports LZO-compatible
//! signatures. Every function returns an `LZO_E_*` code; pointer arguments
//! are checked for null before any slice is formed.
//!
//! Deviations from liblzo2:
//!   - the compressors treat `dst` as `compress_bound(src_len)` bytes long,
//!     the size LZO documents as sufficient, and fail with
//!     `LZO_E_OUTPUT_OVERRUN` instead of writing past it;
//!   - `wrkmem` must be 4-byte aligned (`LZO_E_INVALID_ALIGNMENT` otherwise);
//!   - `lzo_init` takes no arguments.

use std::os::raw::{c_char, c_int, c_uint};
use std::slice;

use libc::size_t;

use crate::block::compress as fast;
use crate::block::decompress_core as safe;
use crate::block::types::{
    compress_bound, EngineResult, LzoStatus, LZO1X_1_15_MEM_COMPRESS, LZO1X_1_MEM_COMPRESS,
    LZO1X_999_MEM_COMPRESS,
};
use crate::hc::compress as hc;

// ─── helpers ─────────────────────────────────────────────────────────────────

/// Slice over `len` bytes at `ptr`; a null pointer is only accepted for `len == 0`.
#[inline(always)]
unsafe fn input<'a>(ptr: *const u8, len: size_t) -> Result<&'a [u8], LzoStatus> {
    if ptr.is_null() {
        return if len == 0 { Ok(&[]) } else { Err(LzoStatus::InvalidArgument) };
    }
    Ok(slice::from_raw_parts(ptr, len))
}

/// Working memory of `bytes` bytes viewed as `u32` slots.
#[inline(always)]
unsafe fn work_slots<'a>(wrkmem: *mut libc::c_void, bytes: usize) -> Result<&'a mut [u32], LzoStatus> {
    if wrkmem.is_null() {
        return Err(LzoStatus::InvalidArgument);
    }
    if (wrkmem as usize) % core::mem::align_of::<u32>() != 0 {
        return Err(LzoStatus::InvalidAlignment);
    }
    Ok(slice::from_raw_parts_mut(wrkmem as *mut u32, bytes / core::mem::size_of::<u32>()))
}

/// Writes the byte count through `out_len` and folds the result into a code.
#[inline(always)]
unsafe fn finish(result: EngineResult, out_len: *mut size_t) -> c_int {
    match result {
        Ok(n) => {
            *out_len = n;
            LzoStatus::Ok.code()
        }
        Err(status) => {
            *out_len = 0;
            status.code()
        }
    }
}

type Compressor = fn(&[u8], &mut [u8], &mut [u32]) -> EngineResult;

unsafe fn compress_with(
    engine: Compressor,
    src: *const u8,
    src_len: size_t,
    dst: *mut u8,
    dst_len: *mut size_t,
    wrkmem: *mut libc::c_void,
    wrk_bytes: usize,
) -> c_int {
    if dst.is_null() || dst_len.is_null() {
        return LzoStatus::InvalidArgument.code();
    }
    let result = input(src, src_len).and_then(|src| {
        let wrk = work_slots(wrkmem, wrk_bytes)?;
        let dst = slice::from_raw_parts_mut(dst, compress_bound(src.len()));
        engine(src, dst, wrk)
    });
    finish(result, dst_len)
}

// ─────────────────────────────────────────────────────────────────────────────
// lzo1x_1_compress / lzo1x_1_15_compress  (lzo1x.h)
//
// int lzo1x_1_compress(const lzo_bytep src, lzo_uint src_len,
//                      lzo_bytep dst, lzo_uintp dst_len, lzo_voidp wrkmem);
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn lzo1x_1_compress(
    src: *const u8,
    src_len: size_t,
    dst: *mut u8,
    dst_len: *mut size_t,
    wrkmem: *mut libc::c_void,
) -> c_int {
    compress_with(fast::lzo1x_1_compress, src, src_len, dst, dst_len, wrkmem, LZO1X_1_MEM_COMPRESS)
}

#[no_mangle]
pub unsafe extern "C" fn lzo1x_1_15_compress(
    src: *const u8,
    src_len: size_t,
    dst: *mut u8,
    dst_len: *mut size_t,
    wrkmem: *mut libc::c_void,
) -> c_int {
    compress_with(fast::lzo1x_1_15_compress, src, src_len, dst, dst_len, wrkmem, LZO1X_1_15_MEM_COMPRESS)
}

// ─────────────────────────────────────────────────────────────────────────────
// lzo1x_999_compress_level  (lzo1x.h)
//
// The dictionary and callback arguments of the C prototype are dropped.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn lzo1x_999_compress_level(
    src: *const u8,
    src_len: size_t,
    dst: *mut u8,
    dst_len: *mut size_t,
    wrkmem: *mut libc::c_void,
    compression_level: c_int,
) -> c_int {
    if dst.is_null() || dst_len.is_null() {
        return LzoStatus::InvalidArgument.code();
    }
    let result = input(src, src_len).and_then(|src| {
        let wrk = work_slots(wrkmem, LZO1X_999_MEM_COMPRESS)?;
        let dst = slice::from_raw_parts_mut(dst, compress_bound(src.len()));
        hc::lzo1x_999_compress_level(src, dst, wrk, compression_level)
    });
    finish(result, dst_len)
}

// ─────────────────────────────────────────────────────────────────────────────
// lzo1x_decompress_safe  (lzo1x.h)
//
// `*dst_len` is the capacity of `dst` on entry and the decoded size on exit.
// `wrkmem` is unused (LZO1X_MEM_DECOMPRESS is 0) and may be null.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn lzo1x_decompress_safe(
    src: *const u8,
    src_len: size_t,
    dst: *mut u8,
    dst_len: *mut size_t,
    _wrkmem: *mut libc::c_void,
) -> c_int {
    if dst_len.is_null() || (dst.is_null() && *dst_len != 0) {
        return LzoStatus::InvalidArgument.code();
    }
    let capacity = *dst_len;
    let result = input(src, src_len).and_then(|src| {
        let dst: &mut [u8] = if capacity == 0 {
            &mut []
        } else {
            slice::from_raw_parts_mut(dst, capacity)
        };
        safe::lzo1x_decompress_safe(src, dst)
    });
    finish(result, dst_len)
}

// ─────────────────────────────────────────────────────────────────────────────
// Checksums  (lzoconf.h)
//
// A null buffer returns the conventional initial value, as liblzo2 does.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn lzo_adler32(adler: u32, buf: *const u8, len: size_t) -> u32 {
    if buf.is_null() {
        return crate::checksum::ADLER32_INIT_VALUE;
    }
    crate::checksum::adler32(adler, slice::from_raw_parts(buf, len))
}

#[cfg(feature = "crc32")]
#[no_mangle]
pub unsafe extern "C" fn lzo_crc32(c: u32, buf: *const u8, len: size_t) -> u32 {
    if buf.is_null() {
        return crate::checksum::CRC32_INIT_VALUE;
    }
    crate::checksum::crc32(c, slice::from_raw_parts(buf, len))
}

// ─────────────────────────────────────────────────────────────────────────────
// Version and initialisation  (lzoconf.h)
// ─────────────────────────────────────────────────────────────────────────────

static VERSION_STRING: &[u8] = b"2.10\0";
static VERSION_DATE: &[u8] = b"Mar 01 2017\0";

#[no_mangle]
pub extern "C" fn lzo_version() -> c_uint {
    crate::LZO_VERSION
}

#[no_mangle]
pub extern "C" fn lzo_version_string() -> *const c_char {
    VERSION_STRING.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn lzo_version_date() -> *const c_char {
    VERSION_DATE.as_ptr() as *const c_char
}

/// Runs the engine self-test; `LZO_E_OK` when the library is usable.
#[no_mangle]
pub extern "C" fn lzo_init() -> c_int {
    match crate::codec::init() {
        Ok(()) => LzoStatus::Ok.code(),
        Err(status) => status.code(),
    }
}
