//! Adler-32 and CRC-32 over byte slices, with LZO's seeding conventions.
//!
//! Both functions take the running value as `seed` and return the updated
//! value, so a large input can be checksummed in pieces:
//!
//! ```
//! use lzo::checksum::{adler32, ADLER32_INIT_VALUE};
//! let whole = adler32(ADLER32_INIT_VALUE, b"hello world");
//! let split = adler32(adler32(ADLER32_INIT_VALUE, b"hello "), b"world");
//! assert_eq!(whole, split);
//! ```
//!
//! CRC-32 is delegated to `crc32fast` and gated on the `crc32` feature.

/// Conventional starting value for [`adler32`].
pub const ADLER32_INIT_VALUE: u32 = 1;
/// Conventional starting value for [`crc32`].
pub const CRC32_INIT_VALUE: u32 = 0;

/// Largest prime below 2^16.
const BASE: u32 = 65_521;
/// Most bytes that can be summed before `b` may overflow a `u32`.
const NMAX: usize = 5552;

// ─────────────────────────────────────────────────────────────────────────────
// Adler-32
// ─────────────────────────────────────────────────────────────────────────────

/// Incremental Adler-32 state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Adler32 {
    /// Fresh state, equivalent to seeding with [`ADLER32_INIT_VALUE`].
    pub fn new() -> Self {
        Self::from_seed(ADLER32_INIT_VALUE)
    }

    /// Resumes from a previously returned checksum.
    pub fn from_seed(seed: u32) -> Self {
        Adler32 { a: seed & 0xffff, b: seed >> 16 }
    }

    pub fn update(&mut self, data: &[u8]) {
        let (mut a, mut b) = (self.a, self.b);
        for chunk in data.chunks(NMAX) {
            for &byte in chunk {
                a += u32::from(byte);
                b += a;
            }
            a %= BASE;
            b %= BASE;
        }
        self.a = a;
        self.b = b;
    }

    pub fn finish(&self) -> u32 {
        (self.b << 16) | self.a
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Adler-32 of `data` continued from `seed`. Empty `data` returns `seed`.
pub fn adler32(seed: u32, data: &[u8]) -> u32 {
    if data.is_empty() {
        return seed;
    }
    let mut state = Adler32::from_seed(seed);
    state.update(data);
    state.finish()
}

/// [`adler32`] with the data first and the seed second, the order the host
/// binding's `lzo_adler32(data[, value])` uses. Pass
/// [`ADLER32_INIT_VALUE`] for a fresh checksum.
#[inline]
pub fn lzo_adler32(data: &[u8], seed: u32) -> u32 {
    adler32(seed, data)
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// IEEE CRC-32 of `data` continued from `seed`. Empty `data` returns `seed`.
#[cfg(feature = "crc32")]
pub fn crc32(seed: u32, data: &[u8]) -> u32 {
    if data.is_empty() {
        return seed;
    }
    let mut hasher = crc32fast::Hasher::new_with_initial(seed);
    hasher.update(data);
    hasher.finalize()
}

/// Host name of [`crc32`]. Unlike [`lzo_adler32`], the host binding's
/// `lzo_crc32(value, data)` takes the seed first, and so does this.
#[cfg(feature = "crc32")]
#[inline]
pub fn lzo_crc32(seed: u32, data: &[u8]) -> u32 {
    crc32(seed, data)
}
