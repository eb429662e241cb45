//! LZO1X safe block decompression.
//!
//! Implements `lzo1x_decompress_safe`: the decoder that checks every read
//! against the end of the input and every write against the end of the
//! destination while it runs, instead of trusting the compressed stream.
//!
//! # Security boundary
//!
//! This is the path that sees untrusted bytes. Malformed, truncated or
//! hostile input must come back as an `Err(LzoStatus)`; it must never panic
//! or read or write outside the two slices. All indexing below is preceded
//! by an explicit `need_input` / `need_output` / look-behind check.
//!
//! # Stream grammar
//!
//! The decoder is a small state machine keyed on what the previous element
//! was, because tokens below 16 mean different things depending on it:
//!
//! | Previous element                | Token `< 16` means                       |
//! |---------------------------------|------------------------------------------|
//! | nothing / match with 0 trailing | literal run of `t + 3` (or extended)     |
//! | literal run of ≥ 4              | 3-byte match, distance `0x801..=0xC00`   |
//! | match with 1..3 trailing        | 2-byte match, distance `1..=0x400`       |
//!
//! Tokens `>= 16` are always M2 / M3 / M4 matches; an M4 with distance zero
//! is the end-of-stream marker.

use super::types::{EngineResult, LzoStatus, M2_MAX_OFFSET};

// ─────────────────────────────────────────────────────────────────────────────
// Decoder state
// ─────────────────────────────────────────────────────────────────────────────

/// What the decoder just finished, which decides how a small token reads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum After {
    /// Start of stream, or a match whose state bits were zero.
    Match0,
    /// A literal run of four or more bytes.
    LiteralRun,
    /// A match followed by 1..=3 literals taken from its state bits.
    ShortTail,
}

struct Decoder<'s, 'd> {
    src: &'s [u8],
    dst: &'d mut [u8],
    ip: usize,
    op: usize,
}

impl<'s, 'd> Decoder<'s, 'd> {
    #[inline(always)]
    fn need_input(&self, n: usize) -> Result<(), LzoStatus> {
        if self.src.len() - self.ip < n {
            Err(LzoStatus::InputOverrun)
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    fn need_output(&self, n: usize) -> Result<(), LzoStatus> {
        if self.dst.len() - self.op < n {
            Err(LzoStatus::OutputOverrun)
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    fn next_byte(&mut self) -> Result<usize, LzoStatus> {
        self.need_input(1)?;
        let b = self.src[self.ip];
        self.ip += 1;
        Ok(b as usize)
    }

    #[inline(always)]
    fn next_le16(&mut self) -> Result<usize, LzoStatus> {
        self.need_input(2)?;
        let v = u16::from_le_bytes([self.src[self.ip], self.src[self.ip + 1]]);
        self.ip += 2;
        Ok(v as usize)
    }

    /// Reads a zero-byte length extension and adds it to `base`.
    fn read_extended_length(&mut self, base: usize) -> Result<usize, LzoStatus> {
        let mut len = base;
        loop {
            let b = self.next_byte()?;
            if b != 0 {
                return len.checked_add(b).ok_or(LzoStatus::Error);
            }
            len = len.checked_add(255).ok_or(LzoStatus::Error)?;
        }
    }

    /// Input is checked first: a run the stream cannot supply is corrupt
    /// whatever the destination size.
    fn copy_literals(&mut self, n: usize) -> Result<(), LzoStatus> {
        self.need_input(n)?;
        self.need_output(n)?;
        self.dst[self.op..self.op + n].copy_from_slice(&self.src[self.ip..self.ip + n]);
        self.op += n;
        self.ip += n;
        Ok(())
    }

    fn copy_match(&mut self, dist: usize, len: usize) -> Result<(), LzoStatus> {
        if dist == 0 || dist > self.op {
            return Err(LzoStatus::LookbehindOverrun);
        }
        self.need_output(len)?;
        let from = self.op - dist;
        if dist >= len {
            self.dst.copy_within(from..from + len, self.op);
        } else {
            // Overlapping copy repeats the last `dist` bytes.
            for i in 0..len {
                self.dst[self.op + i] = self.dst[from + i];
            }
        }
        self.op += len;
        Ok(())
    }

    /// State bits of the element just decoded: the low two bits of the byte
    /// two positions back.
    #[inline(always)]
    fn trailing_state(&self) -> usize {
        (self.src[self.ip - 2] & 3) as usize
    }

    fn run(&mut self) -> Result<(), LzoStatus> {
        let mut after = After::Match0;

        self.need_input(1)?;
        if self.src[0] > 17 {
            let n = self.src[0] as usize - 17;
            self.ip = 1;
            self.copy_literals(n)?;
            after = if n < 4 { After::ShortTail } else { After::LiteralRun };
        }

        loop {
            let t = self.next_byte()?;

            if t < 16 {
                match after {
                    After::Match0 => {
                        let n = if t == 0 { self.read_extended_length(15)? } else { t };
                        self.copy_literals(n + 3)?;
                        after = After::LiteralRun;
                        continue;
                    }
                    After::LiteralRun => {
                        let dist = 1 + M2_MAX_OFFSET + (t >> 2) + (self.next_byte()? << 2);
                        self.copy_match(dist, 3)?;
                    }
                    After::ShortTail => {
                        let dist = 1 + (t >> 2) + (self.next_byte()? << 2);
                        self.copy_match(dist, 2)?;
                    }
                }
            } else if t >= 64 {
                // M2
                let dist = 1 + ((t >> 2) & 7) + (self.next_byte()? << 3);
                self.copy_match(dist, (t >> 5) + 1)?;
            } else if t >= 32 {
                // M3
                let mut len = t & 31;
                if len == 0 {
                    len = self.read_extended_length(31)?;
                }
                let dist = 1 + (self.next_le16()? >> 2);
                self.copy_match(dist, len + 2)?;
            } else {
                // M4, or the end-of-stream marker
                let high = (t & 8) << 11;
                let mut len = t & 7;
                if len == 0 {
                    len = self.read_extended_length(7)?;
                }
                let dist = high + (self.next_le16()? >> 2);
                if dist == 0 {
                    return if self.ip == self.src.len() {
                        Ok(())
                    } else {
                        Err(LzoStatus::InputNotConsumed)
                    };
                }
                self.copy_match(dist + 0x4000, len + 2)?;
            }

            let tail = self.trailing_state();
            if tail == 0 {
                after = After::Match0;
            } else {
                self.copy_literals(tail)?;
                after = After::ShortTail;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public entry point
// ─────────────────────────────────────────────────────────────────────────────

/// Decompresses one LZO1X block from `src` into `dst`.
///
/// `dst.len()` is the hard capacity; a stream that would produce more fails
/// with `LzoStatus::OutputOverrun` without writing past the end. On success
/// returns the number of bytes produced, which may be less than `dst.len()`.
///
/// | Condition                               | Result                          |
/// |-----------------------------------------|---------------------------------|
/// | stream ends before the EOF marker       | `Err(InputOverrun)`             |
/// | back-reference before start of output   | `Err(LookbehindOverrun)`        |
/// | output would exceed `dst`               | `Err(OutputOverrun)`            |
/// | bytes left after the EOF marker         | `Err(InputNotConsumed)`         |
pub fn lzo1x_decompress_safe(src: &[u8], dst: &mut [u8]) -> EngineResult {
    let mut dec = Decoder { src, dst, ip: 0, op: 0 };
    match dec.run() {
        Ok(()) => Ok(dec.op),
        Err(status) => {
            log::trace!(
                "lzo1x_decompress_safe failed at ip={} op={}: {}",
                dec.ip,
                dec.op,
                status
            );
            Err(status)
        }
    }
}
