//! LZO1X token writer.
//!
//! Shared by the LZO1X-1 encoders (`block::compress`) and the LZO1X-999
//! encoder (`hc::compress`). Every write goes through [`Sink`], which checks
//! the destination capacity and reports `LzoStatus::OutputOverrun` instead of
//! writing past the end.
//!
//! Token layout written here:
//!
//! | Element               | Bytes                                              |
//! |-----------------------|----------------------------------------------------|
//! | initial literal run   | `17 + len` (len ≤ 238)                             |
//! | literal run, len 1..3 | folded into the state bits of the previous match   |
//! | literal run, len 4..18| `len - 3`                                          |
//! | longer literal run    | `0`, zero-byte length extension of `len - 18`      |
//! | M2 (len ≤ 8, d ≤ 2K)  | `LLLDDDSS`, `DDDDDDDD`                             |
//! | M3 (d ≤ 16K)          | `001LLLLL` [ext], `DDDDDDSS`, `DDDDDDDD`            |
//! | M4 (d ≤ 48K)          | `0001HLLL` [ext], `DDDDDDSS`, `DDDDDDDD`            |
//! | end of stream         | `0x11 0x00 0x00`                                   |

use super::types::{
    EngineResult, LzoStatus, EOF_MARKER, M2_MAX_LEN, M2_MAX_OFFSET, M2_MIN_LEN, M3_MARKER,
    M3_MAX_LEN, M3_MAX_OFFSET, M4_MARKER, M4_MAX_LEN, M4_MAX_OFFSET, MAX_INITIAL_LITERALS,
};

// ─────────────────────────────────────────────────────────────────────────────
// Bounded output cursor
// ─────────────────────────────────────────────────────────────────────────────

/// Write cursor over a caller-provided output slice.
pub(crate) struct Sink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Sink<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Sink { buf, pos: 0 }
    }

    /// Bytes written so far.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), LzoStatus> {
        match self.buf.get_mut(self.pos) {
            Some(slot) => {
                *slot = byte;
                self.pos += 1;
                Ok(())
            }
            None => Err(LzoStatus::OutputOverrun),
        }
    }

    #[inline]
    fn extend(&mut self, bytes: &[u8]) -> Result<(), LzoStatus> {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(LzoStatus::OutputOverrun);
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// ORs a 1..=3 literal count into the state bits of the last match.
    ///
    /// Those bits live two bytes back: in the token of an M2 match, or in the
    /// low distance byte of an M3/M4 match.
    #[inline]
    fn set_state(&mut self, count: usize) -> Result<(), LzoStatus> {
        if self.pos < 2 {
            return Err(LzoStatus::InternalError);
        }
        self.buf[self.pos - 2] |= count as u8;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Length extension
// ─────────────────────────────────────────────────────────────────────────────

/// Writes `len` as a run of zero bytes (each worth 255) and a non-zero tail.
///
/// `len` must be ≥ 1, which every caller guarantees by only extending lengths
/// that overflowed the token field.
fn write_zero_byte_length(sink: &mut Sink<'_>, mut len: usize) -> Result<(), LzoStatus> {
    debug_assert!(len > 0);
    while len > 255 {
        sink.push(0)?;
        len -= 255;
    }
    sink.push(len as u8)
}

// ─────────────────────────────────────────────────────────────────────────────
// Literal runs
// ─────────────────────────────────────────────────────────────────────────────

/// Writes a literal run. An empty run writes nothing.
///
/// Runs of 1..=3 literals after a match cost no token byte; the count goes
/// into the previous match's state bits.
pub(crate) fn emit_literals(sink: &mut Sink<'_>, lits: &[u8]) -> Result<(), LzoStatus> {
    let len = lits.len();
    if len == 0 {
        return Ok(());
    }
    if sink.is_empty() && len <= MAX_INITIAL_LITERALS {
        sink.push((17 + len) as u8)?;
    } else if len <= 3 {
        sink.set_state(len)?;
    } else if len <= 18 {
        sink.push((len - 3) as u8)?;
    } else {
        sink.push(0)?;
        write_zero_byte_length(sink, len - 18)?;
    }
    sink.extend(lits)
}

// ─────────────────────────────────────────────────────────────────────────────
// Matches
// ─────────────────────────────────────────────────────────────────────────────

/// Whether a `(len, dist)` pair is worth a match token.
///
/// Three-byte matches only pay off in the two-byte M2 form; everything else
/// needs at least four bytes to beat the literals it replaces.
#[inline]
pub(crate) fn is_encodable(len: usize, dist: usize) -> bool {
    if dist == 0 || dist > M4_MAX_OFFSET {
        return false;
    }
    len >= 4 || (len == M2_MIN_LEN && dist <= M2_MAX_OFFSET)
}

/// Writes one back-reference of `len` bytes at distance `dist`.
///
/// The state bits of the written token are left at zero; a following
/// short literal run fills them in via [`emit_literals`].
pub(crate) fn emit_match(sink: &mut Sink<'_>, len: usize, dist: usize) -> Result<(), LzoStatus> {
    debug_assert!(is_encodable(len, dist), "len={len} dist={dist}");

    if len <= M2_MAX_LEN && dist <= M2_MAX_OFFSET {
        let d = dist - 1;
        sink.push((((len - 1) << 5) | ((d & 7) << 2)) as u8)?;
        sink.push((d >> 3) as u8)
    } else if dist <= M3_MAX_OFFSET {
        let d = dist - 1;
        if len <= M3_MAX_LEN {
            sink.push(M3_MARKER | (len - 2) as u8)?;
        } else {
            sink.push(M3_MARKER)?;
            write_zero_byte_length(sink, len - M3_MAX_LEN)?;
        }
        sink.push((d << 2) as u8)?;
        sink.push((d >> 6) as u8)
    } else {
        let d = dist - 0x4000;
        let high = ((d >> 11) & 8) as u8;
        if len <= M4_MAX_LEN {
            sink.push(M4_MARKER | high | (len - 2) as u8)?;
        } else {
            sink.push(M4_MARKER | high)?;
            write_zero_byte_length(sink, len - M4_MAX_LEN)?;
        }
        sink.push((d << 2) as u8)?;
        sink.push((d >> 6) as u8)
    }
}

/// Terminates the block.
pub(crate) fn emit_eof(sink: &mut Sink<'_>) -> Result<(), LzoStatus> {
    sink.extend(&EOF_MARKER)
}

/// Writes `src` as a single literal run and the end marker.
///
/// This is the fallback when a parse overruns `dst`: a literal-only stream
/// costs at most `n + n/255 + 6` bytes, which is always inside
/// [`compress_bound`](super::types::compress_bound).
pub(crate) fn emit_stored(dst: &mut [u8], src: &[u8]) -> EngineResult {
    let mut sink = Sink::new(dst);
    emit_literals(&mut sink, src)?;
    emit_eof(&mut sink)?;
    Ok(sink.len())
}
