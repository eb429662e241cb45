//! LZO1X-1 block compression: the fast, greedy encoders.
//!
//! | Rust function              | LZO equivalent          | Hash table      |
//! |----------------------------|-------------------------|-----------------|
//! | [`lzo1x_1_compress`]       | `lzo1x_1_compress`      | 2^14 positions  |
//! | [`lzo1x_1_15_compress`]    | `lzo1x_1_15_compress`   | 2^15 positions  |
//!
//! Both walk the input once. At each position the next four bytes are hashed
//! into a single-slot table holding the last position with the same hash; a
//! verified four-byte hit within [`M4_MAX_OFFSET`] becomes a match, extended
//! greedily. On a miss the scan skips ahead by `1 + (gap >> 5)`, where `gap`
//! is the length of the pending literal run, so incompressible regions are
//! crossed quickly.
//!
//! The last `M2_MAX_LEN + 5` bytes never start a match and are always emitted
//! as literals, as in LZO. If the parse would overrun `dst`, the block is
//! rewritten as one literal run instead, so a `compress_bound`-sized
//! destination is always enough.
//!
//! The table lives in the caller's working memory, so the functions hold no
//! state between calls and are safe to run concurrently on separate buffers.

use super::encode::{emit_eof, emit_literals, emit_match, emit_stored, Sink};
use super::types::{
    read_le32, EngineResult, LzoStatus, LZO1X_1_15_D_BITS, LZO1X_1_D_BITS, M2_MAX_LEN,
    M4_MAX_OFFSET,
};

// ─────────────────────────────────────────────────────────────────────────────
// Hashing
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplier of LZO's `DMUL` hash.
const DMUL: u32 = 0x1824_429d;

/// Inputs this short are emitted as a single literal run.
const MIN_MATCHABLE_INPUT: usize = M2_MAX_LEN + 5;

#[inline(always)]
fn dict_index(dv: u32, d_bits: u32) -> usize {
    (DMUL.wrapping_mul(dv) >> (32 - d_bits)) as usize
}

// ─────────────────────────────────────────────────────────────────────────────
// Public entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Compresses `src` into `dst` with LZO1X-1.
///
/// `dst` should be at least [`compress_bound`](super::types::compress_bound)
/// bytes; `wrkmem` must hold at least `2^14` slots
/// ([`LZO1X_1_MEM_COMPRESS`](super::types::LZO1X_1_MEM_COMPRESS) bytes).
///
/// Returns the number of bytes written. Fails with
/// `LzoStatus::InvalidArgument` if `wrkmem` is too small, or
/// `LzoStatus::OutputOverrun` if `dst` is.
pub fn lzo1x_1_compress(src: &[u8], dst: &mut [u8], wrkmem: &mut [u32]) -> EngineResult {
    compress_greedy(src, dst, wrkmem, LZO1X_1_D_BITS)
}

/// Compresses `src` into `dst` with LZO1X-1(15).
///
/// Same contract as [`lzo1x_1_compress`] but with a `2^15`-slot table
/// ([`LZO1X_1_15_MEM_COMPRESS`](super::types::LZO1X_1_15_MEM_COMPRESS) bytes),
/// which finds a few more matches at a small cost in speed.
pub fn lzo1x_1_15_compress(src: &[u8], dst: &mut [u8], wrkmem: &mut [u32]) -> EngineResult {
    compress_greedy(src, dst, wrkmem, LZO1X_1_15_D_BITS)
}

// ─────────────────────────────────────────────────────────────────────────────
// Core loop
// ─────────────────────────────────────────────────────────────────────────────

fn compress_greedy(src: &[u8], dst: &mut [u8], wrkmem: &mut [u32], d_bits: u32) -> EngineResult {
    let dict_size = 1usize << d_bits;
    if wrkmem.len() < dict_size {
        return Err(LzoStatus::InvalidArgument);
    }
    let dict = &mut wrkmem[..dict_size];
    dict.fill(0);

    match greedy_pass(src, dst, dict, d_bits) {
        Ok(n) => {
            log::trace!("lzo1x_1 (d_bits={}) compressed {} -> {} bytes", d_bits, src.len(), n);
            Ok(n)
        }
        Err(LzoStatus::OutputOverrun) => {
            log::trace!("lzo1x_1 overran {} bytes, storing {} literals", dst.len(), src.len());
            emit_stored(dst, src)
        }
        Err(status) => Err(status),
    }
}

fn greedy_pass(src: &[u8], dst: &mut [u8], dict: &mut [u32], d_bits: u32) -> EngineResult {
    let mut sink = Sink::new(dst);
    // Start of the pending literal run.
    let mut anchor = 0usize;

    if src.len() > MIN_MATCHABLE_INPUT {
        let ip_limit = src.len() - MIN_MATCHABLE_INPUT;
        let mut ip = 0usize;

        while ip < ip_limit {
            let dv = read_le32(src, ip);
            let slot = dict_index(dv, d_bits);
            let candidate = dict[slot] as usize;
            dict[slot] = ip as u32;

            let dist = ip.wrapping_sub(candidate);
            if candidate >= ip || dist > M4_MAX_OFFSET || read_le32(src, candidate) != dv {
                ip += 1 + ((ip - anchor) >> 5);
                continue;
            }

            let mut len = 4;
            let max_len = src.len() - ip;
            while len < max_len && src[candidate + len] == src[ip + len] {
                len += 1;
            }

            emit_literals(&mut sink, &src[anchor..ip])?;
            emit_match(&mut sink, len, dist)?;
            ip += len;
            anchor = ip;
        }
    }

    emit_literals(&mut sink, &src[anchor..])?;
    emit_eof(&mut sink)?;
    Ok(sink.len())
}
