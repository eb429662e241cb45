// Tests for the LZO1X block constants, status codes and method mapping.

use lzo::block::types::{
    compress_bound, LzoStatus, Method, EOF_MARKER, LZO1X_1_15_MEM_COMPRESS, LZO1X_1_MEM_COMPRESS,
    LZO1X_999_MEM_COMPRESS, LZO1X_MEM_DECOMPRESS, M2_MAX_LEN, M2_MAX_OFFSET, M3_MARKER,
    M3_MAX_OFFSET, M4_MARKER, M4_MAX_OFFSET, WRK_LEN,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn format_constants() {
    assert_eq!(M2_MAX_LEN, 8);
    assert_eq!(M2_MAX_OFFSET, 0x0800);
    assert_eq!(M3_MAX_OFFSET, 0x4000);
    assert_eq!(M4_MAX_OFFSET, 0xBFFF);
    assert_eq!(M3_MARKER, 32);
    assert_eq!(M4_MARKER, 16);
    assert_eq!(EOF_MARKER, [0x11, 0x00, 0x00]);
}

#[test]
fn working_memory_sizes() {
    assert_eq!(LZO1X_1_MEM_COMPRESS, 16384 * 4);
    assert_eq!(LZO1X_1_15_MEM_COMPRESS, 32768 * 4);
    assert_eq!(LZO1X_999_MEM_COMPRESS, 14 * 16384 * 2);
    assert_eq!(LZO1X_MEM_DECOMPRESS, 0);
    assert_eq!(WRK_LEN, LZO1X_999_MEM_COMPRESS);
    assert!(WRK_LEN >= LZO1X_1_15_MEM_COMPRESS);
}

#[test]
fn compress_bound_formula() {
    assert_eq!(compress_bound(0), 19);
    assert_eq!(compress_bound(64), 64 + 1 + 19);
    assert_eq!(compress_bound(256 * 1024), 256 * 1024 + 4096 + 19);
}

// ─────────────────────────────────────────────────────────────────────────────
// LzoStatus
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn status_codes_match_lzo() {
    let table = [
        (LzoStatus::Ok, 0),
        (LzoStatus::Error, -1),
        (LzoStatus::OutOfMemory, -2),
        (LzoStatus::NotCompressible, -3),
        (LzoStatus::InputOverrun, -4),
        (LzoStatus::OutputOverrun, -5),
        (LzoStatus::LookbehindOverrun, -6),
        (LzoStatus::EofNotFound, -7),
        (LzoStatus::InputNotConsumed, -8),
        (LzoStatus::NotYetImplemented, -9),
        (LzoStatus::InvalidArgument, -10),
        (LzoStatus::InvalidAlignment, -11),
        (LzoStatus::OutputNotConsumed, -12),
        (LzoStatus::InternalError, -99),
    ];
    for (status, code) in table {
        assert_eq!(status.code(), code);
        assert_eq!(LzoStatus::from_code(code), status);
    }
    assert_eq!(LzoStatus::from_code(-42), LzoStatus::Error);
    assert!(LzoStatus::Ok.is_ok());
    assert!(!LzoStatus::InputOverrun.is_ok());
}

#[test]
fn status_display_includes_code() {
    assert_eq!(LzoStatus::LookbehindOverrun.to_string(), "lookbehind overrun (-6)");
}

// ─────────────────────────────────────────────────────────────────────────────
// Method
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn method_from_wire() {
    assert_eq!(Method::from_wire(1, 0), Some(Method::Fast));
    assert_eq!(Method::from_wire(2, 5), Some(Method::FastSmallWindow));
    assert_eq!(Method::from_wire(3, 7), Some(Method::MaxCompression(7)));
    assert_eq!(Method::from_wire(0, 0), None);
    assert_eq!(Method::from_wire(4, 0), None);
}

#[test]
fn method_properties() {
    assert_eq!(Method::default(), Method::Fast);
    assert_eq!(Method::MaxCompression(9).wire_id(), 3);
    assert_eq!(Method::MaxCompression(9).level(), 9);
    assert_eq!(Method::Fast.level(), 0);
    assert_eq!(Method::FastSmallWindow.work_mem_size(), LZO1X_1_15_MEM_COMPRESS);
    assert_eq!(Method::MaxCompression(1).to_string(), "LZO1X-999/1");
    assert_eq!(Method::FastSmallWindow.to_string(), "LZO1X-1(15)");
}
