//! LZO1X block constants, engine status codes, and compression methods.
//!
//! Covers the pieces of `lzo1x.h` / `lzoconf.h` that both the encoders and the
//! safe decoder depend on:
//!   - Match-class limits (`M1`..`M4` offsets and lengths) and token markers
//!   - Working-memory sizes per encoder variant
//!   - `LzoStatus`: the `LZO_E_*` result codes
//!   - `Method`: the encoder variant selected by the host

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Size helpers
// ─────────────────────────────────────────────────────────────────────────────

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

// ─────────────────────────────────────────────────────────────────────────────
// Match classes (lzo1x.h / config1x.h)
// ─────────────────────────────────────────────────────────────────────────────

/// Farthest 2-byte M1 match that may follow a short literal run.
pub const M1_MAX_OFFSET: usize = 0x0400;
/// Farthest M2 match (1 token byte + 1 distance byte).
pub const M2_MAX_OFFSET: usize = 0x0800;
/// Farthest M3 match (16-bit distance field, near window).
pub const M3_MAX_OFFSET: usize = 0x4000;
/// Farthest M4 match (16-bit distance field plus the high bit in the token).
pub const M4_MAX_OFFSET: usize = 0xBFFF;

/// Shortest M2 match.
pub const M2_MIN_LEN: usize = 3;
/// Longest M2 match; anything longer needs an M3/M4 token.
pub const M2_MAX_LEN: usize = 8;
/// Longest M3 match that fits in the token without a length extension.
pub const M3_MAX_LEN: usize = 33;
/// Longest M4 match that fits in the token without a length extension.
pub const M4_MAX_LEN: usize = 9;

/// Token prefix of an M3 match (`001LLLLL`).
pub const M3_MARKER: u8 = 32;
/// Token prefix of an M4 match (`0001HLLL`).
pub const M4_MARKER: u8 = 16;

/// End-of-stream marker: an M4 token with a zero distance.
pub const EOF_MARKER: [u8; 3] = [M4_MARKER | 1, 0, 0];

/// A literal run at the very start of a block is written as `17 + len` in a
/// single byte while it fits.
pub const MAX_INITIAL_LITERALS: usize = 255 - 17;

// ─────────────────────────────────────────────────────────────────────────────
// Working-memory sizes (lzo1x.h)
// ─────────────────────────────────────────────────────────────────────────────

/// Hash-table log for LZO1X-1.
pub const LZO1X_1_D_BITS: u32 = 14;
/// Hash-table log for LZO1X-1(15).
pub const LZO1X_1_15_D_BITS: u32 = 15;

/// Bytes of scratch memory LZO1X-1 needs (one `u32` slot per hash entry).
pub const LZO1X_1_MEM_COMPRESS: usize = (1 << LZO1X_1_D_BITS) * core::mem::size_of::<u32>();
/// Bytes of scratch memory LZO1X-1(15) needs.
pub const LZO1X_1_15_MEM_COMPRESS: usize =
    (1 << LZO1X_1_15_D_BITS) * core::mem::size_of::<u32>();
/// Bytes of scratch memory LZO1X-999 needs.
pub const LZO1X_999_MEM_COMPRESS: usize = 14 * 16384 * core::mem::size_of::<u16>();
/// The safe decoder needs no scratch memory.
pub const LZO1X_MEM_DECOMPRESS: usize = 0;

/// Upper bound on any method's scratch requirement.
pub const WRK_LEN: usize = LZO1X_999_MEM_COMPRESS;

/// Worst-case compressed size for an input of `input_size` bytes.
///
/// Every LZO1X encoder in this crate is guaranteed to stay within this bound.
#[inline]
pub const fn compress_bound(input_size: usize) -> usize {
    input_size + input_size / 64 + 16 + 3
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine status codes (lzoconf.h)
// ─────────────────────────────────────────────────────────────────────────────

/// Result codes reported by the LZO1X engine.
///
/// The discriminants are the `LZO_E_*` values, so they can be handed to a C
/// host unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LzoStatus {
    Ok = 0,
    Error = -1,
    OutOfMemory = -2,
    NotCompressible = -3,
    InputOverrun = -4,
    OutputOverrun = -5,
    LookbehindOverrun = -6,
    EofNotFound = -7,
    InputNotConsumed = -8,
    NotYetImplemented = -9,
    InvalidArgument = -10,
    InvalidAlignment = -11,
    OutputNotConsumed = -12,
    InternalError = -99,
}

impl LzoStatus {
    /// The raw `LZO_E_*` code.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Maps a raw code back to a status; unknown codes become `Error`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => LzoStatus::Ok,
            -2 => LzoStatus::OutOfMemory,
            -3 => LzoStatus::NotCompressible,
            -4 => LzoStatus::InputOverrun,
            -5 => LzoStatus::OutputOverrun,
            -6 => LzoStatus::LookbehindOverrun,
            -7 => LzoStatus::EofNotFound,
            -8 => LzoStatus::InputNotConsumed,
            -9 => LzoStatus::NotYetImplemented,
            -10 => LzoStatus::InvalidArgument,
            -11 => LzoStatus::InvalidAlignment,
            -12 => LzoStatus::OutputNotConsumed,
            -99 => LzoStatus::InternalError,
            _ => LzoStatus::Error,
        }
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, LzoStatus::Ok)
    }
}

impl fmt::Display for LzoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            LzoStatus::Ok => "ok",
            LzoStatus::Error => "generic error",
            LzoStatus::OutOfMemory => "out of memory",
            LzoStatus::NotCompressible => "not compressible",
            LzoStatus::InputOverrun => "input overrun",
            LzoStatus::OutputOverrun => "output overrun",
            LzoStatus::LookbehindOverrun => "lookbehind overrun",
            LzoStatus::EofNotFound => "end-of-stream marker not found",
            LzoStatus::InputNotConsumed => "input not consumed",
            LzoStatus::NotYetImplemented => "not yet implemented",
            LzoStatus::InvalidArgument => "invalid argument",
            LzoStatus::InvalidAlignment => "invalid alignment",
            LzoStatus::OutputNotConsumed => "output not consumed",
            LzoStatus::InternalError => "internal error",
        };
        write!(f, "{} ({})", msg, self.code())
    }
}

impl std::error::Error for LzoStatus {}

/// Result type of every engine entry point. `Ok` carries a byte count.
pub type EngineResult = Result<usize, LzoStatus>;

// ─────────────────────────────────────────────────────────────────────────────
// Compression methods
// ─────────────────────────────────────────────────────────────────────────────

/// Host-facing method id of LZO1X-1.
pub const M_LZO1X_1: u32 = 1;
/// Host-facing method id of LZO1X-1(15).
pub const M_LZO1X_1_15: u32 = 2;
/// Host-facing method id of LZO1X-999.
pub const M_LZO1X_999: u32 = 3;

/// Lowest LZO1X-999 level.
pub const LZO1X_999_LEVEL_MIN: i32 = 1;
/// Highest LZO1X-999 level.
pub const LZO1X_999_LEVEL_MAX: i32 = 9;

/// Encoder variant used for a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// LZO1X-1: greedy, 16K-entry hash table.
    #[default]
    Fast,
    /// LZO1X-1(15): greedy, 32K-entry hash table.
    FastSmallWindow,
    /// LZO1X-999 at the given level (1..=9).
    MaxCompression(i32),
}

impl Method {
    /// Builds a method from the host's `(method, level)` pair.
    ///
    /// `level` is only meaningful for [`M_LZO1X_999`]; it is range-checked by
    /// the encoder, not here. Returns `None` for an unknown method id.
    pub fn from_wire(method: u32, level: i32) -> Option<Self> {
        match method {
            M_LZO1X_1 => Some(Method::Fast),
            M_LZO1X_1_15 => Some(Method::FastSmallWindow),
            M_LZO1X_999 => Some(Method::MaxCompression(level)),
            _ => None,
        }
    }

    /// The host-facing method id.
    pub const fn wire_id(self) -> u32 {
        match self {
            Method::Fast => M_LZO1X_1,
            Method::FastSmallWindow => M_LZO1X_1_15,
            Method::MaxCompression(_) => M_LZO1X_999,
        }
    }

    /// The compression level, or 0 for the fixed-effort methods.
    pub const fn level(self) -> i32 {
        match self {
            Method::MaxCompression(level) => level,
            _ => 0,
        }
    }

    /// Minimum scratch memory, in bytes, the encoder requires.
    pub const fn work_mem_size(self) -> usize {
        match self {
            Method::Fast => LZO1X_1_MEM_COMPRESS,
            Method::FastSmallWindow => LZO1X_1_15_MEM_COMPRESS,
            Method::MaxCompression(_) => LZO1X_999_MEM_COMPRESS,
        }
    }

    /// Canonical LZO name of the encoder.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Fast => "LZO1X-1",
            Method::FastSmallWindow => "LZO1X-1(15)",
            Method::MaxCompression(_) => "LZO1X-999",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::MaxCompression(level) => write!(f, "{}/{}", self.name(), level),
            _ => f.write_str(self.name()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Byte helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Little-endian 32-bit read. Caller guarantees `pos + 4 <= src.len()`.
#[inline(always)]
pub(crate) fn read_le32(src: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([src[pos], src[pos + 1], src[pos + 2], src[pos + 3]])
}

/// Number of equal leading bytes of `src[a..]` and `src[b..]`, capped at `limit`.
#[inline]
pub(crate) fn common_length(src: &[u8], a: usize, b: usize, limit: usize) -> usize {
    let mut n = 0;
    while n < limit && src[a + n] == src[b + n] {
        n += 1;
    }
    n
}
