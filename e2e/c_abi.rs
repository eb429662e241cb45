//! E2E Test Suite: C ABI
//!
//! Calls the exported `extern "C"` symbols through raw pointers, as a C host
//! linking `liblzo.a` would. Built only with `--features c-abi`.

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;

use lzo::abi::{
    lzo1x_1_15_compress, lzo1x_1_compress, lzo1x_999_compress_level, lzo1x_decompress_safe,
    lzo_adler32, lzo_init, lzo_version, lzo_version_date, lzo_version_string,
};
use lzo::block::types::{
    compress_bound, LzoStatus, LZO1X_1_15_MEM_COMPRESS, LZO1X_1_MEM_COMPRESS,
    LZO1X_999_MEM_COMPRESS,
};

const OK: i32 = 0;

/// Word-aligned working memory of `bytes` bytes.
fn wrkmem(bytes: usize) -> Vec<u32> {
    vec![0u32; bytes / 4]
}

fn decompress(packed: &[u8], len: usize) -> (i32, Vec<u8>) {
    let mut out = vec![0u8; len];
    let mut out_len = len;
    let rc = unsafe {
        lzo1x_decompress_safe(
            packed.as_ptr(),
            packed.len(),
            out.as_mut_ptr(),
            &mut out_len,
            ptr::null_mut(),
        )
    };
    out.truncate(out_len);
    (rc, out)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compress / decompress
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fast_compressors_round_trip() {
    let src = b"c abi round trip, c abi round trip, c abi round trip".repeat(10);
    type Fast = unsafe extern "C" fn(*const u8, usize, *mut u8, *mut usize, *mut c_void) -> i32;
    let engines: [(Fast, usize); 2] = [
        (lzo1x_1_compress, LZO1X_1_MEM_COMPRESS),
        (lzo1x_1_15_compress, LZO1X_1_15_MEM_COMPRESS),
    ];
    for (engine, mem) in engines {
        let mut wrk = wrkmem(mem);
        let mut dst = vec![0u8; compress_bound(src.len())];
        let mut dst_len = 0usize;
        let rc = unsafe {
            engine(
                src.as_ptr(),
                src.len(),
                dst.as_mut_ptr(),
                &mut dst_len,
                wrk.as_mut_ptr() as *mut c_void,
            )
        };
        assert_eq!(rc, OK);
        assert!(dst_len > 0 && dst_len < src.len());
        let (rc, back) = decompress(&dst[..dst_len], src.len());
        assert_eq!(rc, OK);
        assert_eq!(back, src);
    }
}

#[test]
fn level_compressor_round_trip_and_bad_level() {
    let src = b"level nine level nine level nine".to_vec();
    let mut wrk = wrkmem(LZO1X_999_MEM_COMPRESS);
    let mut dst = vec![0u8; compress_bound(src.len())];
    let mut dst_len = 0usize;

    let rc = unsafe {
        lzo1x_999_compress_level(
            src.as_ptr(),
            src.len(),
            dst.as_mut_ptr(),
            &mut dst_len,
            wrk.as_mut_ptr() as *mut c_void,
            9,
        )
    };
    assert_eq!(rc, OK);
    let (rc, back) = decompress(&dst[..dst_len], src.len());
    assert_eq!(rc, OK);
    assert_eq!(back, src);

    let rc = unsafe {
        lzo1x_999_compress_level(
            src.as_ptr(),
            src.len(),
            dst.as_mut_ptr(),
            &mut dst_len,
            wrk.as_mut_ptr() as *mut c_void,
            11,
        )
    };
    assert_eq!(rc, LzoStatus::InvalidArgument.code());
}

#[test]
fn decompress_reports_lzo_codes() {
    // Lookbehind overrun: "a", then a match two bytes back.
    let (rc, _) = decompress(&[18, b'a', 0x64, 0x00, 0x11, 0, 0], 16);
    assert_eq!(rc, -6);
    // Input overrun.
    let (rc, _) = decompress(&[0x15, b'a'], 16);
    assert_eq!(rc, -4);
    // Output overrun.
    let (rc, _) = decompress(&[0x15, b'a', b'b', b'c', b'd', 0x11, 0, 0], 2);
    assert_eq!(rc, -5);
}

#[test]
fn null_pointers_are_invalid_arguments() {
    let mut wrk = wrkmem(LZO1X_1_MEM_COMPRESS);
    let mut dst = [0u8; 32];
    let mut dst_len = 0usize;
    unsafe {
        assert_eq!(
            lzo1x_1_compress(b"abc".as_ptr(), 3, ptr::null_mut(), &mut dst_len, wrk.as_mut_ptr() as *mut c_void),
            -10
        );
        assert_eq!(
            lzo1x_1_compress(b"abc".as_ptr(), 3, dst.as_mut_ptr(), &mut dst_len, ptr::null_mut()),
            -10
        );
        assert_eq!(
            lzo1x_1_compress(ptr::null(), 3, dst.as_mut_ptr(), &mut dst_len, wrk.as_mut_ptr() as *mut c_void),
            -10
        );
        assert_eq!(
            lzo1x_decompress_safe(b"abc".as_ptr(), 3, dst.as_mut_ptr(), ptr::null_mut(), ptr::null_mut()),
            -10
        );
    }
}

#[test]
fn misaligned_work_memory_is_rejected() {
    let mut wrk = wrkmem(LZO1X_1_MEM_COMPRESS + 4);
    let misaligned = unsafe { (wrk.as_mut_ptr() as *mut u8).add(1) } as *mut c_void;
    let mut dst = [0u8; 32];
    let mut dst_len = 0usize;
    let rc = unsafe { lzo1x_1_compress(b"abc".as_ptr(), 3, dst.as_mut_ptr(), &mut dst_len, misaligned) };
    assert_eq!(rc, LzoStatus::InvalidAlignment.code());
}

// ─────────────────────────────────────────────────────────────────────────────
// Checksum / version / init
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn adler32_symbol() {
    unsafe {
        assert_eq!(lzo_adler32(1, b"a".as_ptr(), 1), 0x0062_0062);
        assert_eq!(lzo_adler32(77, b"".as_ptr(), 0), 77);
        assert_eq!(lzo_adler32(77, ptr::null(), 5), 1);
    }
}

#[cfg(feature = "crc32")]
#[test]
fn crc32_symbol() {
    unsafe {
        assert_eq!(lzo::abi::lzo_crc32(0, b"123456789".as_ptr(), 9), 0xcbf4_3926);
        assert_eq!(lzo::abi::lzo_crc32(5, ptr::null(), 9), 0);
    }
}

#[test]
fn version_symbols() {
    assert_eq!(lzo_version(), 0x20a0);
    let s = unsafe { CStr::from_ptr(lzo_version_string()) };
    assert_eq!(s.to_str().unwrap(), "2.10");
    let d = unsafe { CStr::from_ptr(lzo_version_date()) };
    assert_eq!(d.to_str().unwrap(), "Mar 01 2017");
}

#[test]
fn init_symbol() {
    assert_eq!(lzo_init(), OK);
}
