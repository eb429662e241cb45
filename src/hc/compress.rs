//! LZO1X-999 block compression.
//!
//! Parses the input with a hash-chain match finder and lazy evaluation: after
//! finding a match at `pos`, the encoder looks at `pos + 1` and, if a strictly
//! longer match starts there, emits `src[pos]` as a literal and moves on. The
//! number of consecutive deferrals and the search depth come from the level
//! table in [`super::types`].
//!
//! Output uses the same token writer as LZO1X-1, so any LZO1X decoder reads
//! it. For a given input and level the output is fully deterministic.

use super::search::{ChainMatcher, Match};
use super::types::{level_params, LevelParams, HC_HASH_BYTES};
use crate::block::encode::{emit_eof, emit_literals, emit_match, emit_stored, Sink};
use crate::block::types::{EngineResult, LzoStatus};

/// Compresses `src` into `dst` with LZO1X-999 at `level` (1..=9).
///
/// `wrkmem` must hold at least
/// [`HC_WORK_SLOTS`](super::types::HC_WORK_SLOTS) slots; the boundary
/// allocates [`LZO1X_999_MEM_COMPRESS`](crate::block::types::LZO1X_999_MEM_COMPRESS)
/// bytes, which is more than enough.
///
/// Fails with `LzoStatus::InvalidArgument` for an out-of-range level or
/// undersized working memory, and `LzoStatus::OutputOverrun` if `dst` fills.
pub fn lzo1x_999_compress_level(
    src: &[u8],
    dst: &mut [u8],
    wrkmem: &mut [u32],
    level: i32,
) -> EngineResult {
    let cfg = level_params(level).ok_or(LzoStatus::InvalidArgument)?;
    let mut matcher = ChainMatcher::new(wrkmem)?;

    let outcome = {
        let mut sink = Sink::new(dst);
        compress_lazy(src, &mut sink, &mut matcher, &cfg).map(|steps| (sink.len(), steps))
    };

    match outcome {
        Ok((n, lazy_steps)) => {
            log::trace!(
                "lzo1x_999 level {} compressed {} -> {} bytes ({} lazy steps)",
                level,
                src.len(),
                n,
                lazy_steps
            );
            Ok(n)
        }
        Err(LzoStatus::OutputOverrun) => emit_stored(dst, src),
        Err(status) => Err(status),
    }
}

/// Compresses `src` with LZO1X-999 at level 9.
pub fn lzo1x_999_compress(src: &[u8], dst: &mut [u8], wrkmem: &mut [u32]) -> EngineResult {
    lzo1x_999_compress_level(src, dst, wrkmem, 9)
}

fn compress_lazy(
    src: &[u8],
    sink: &mut Sink<'_>,
    matcher: &mut ChainMatcher<'_>,
    cfg: &LevelParams,
) -> Result<usize, LzoStatus> {
    let mut pos = 0usize;
    let mut anchor = 0usize;
    let mut lazy_steps = 0usize;

    while pos + HC_HASH_BYTES <= src.len() {
        matcher.insert_up_to(src, pos);
        let mut best = matcher.find(src, pos, cfg, 0);
        if !best.is_some() {
            pos += 1;
            continue;
        }

        let mut deferrals = 0;
        while deferrals < cfg.try_lazy
            && best.len < cfg.max_lazy
            && pos + 1 + HC_HASH_BYTES <= src.len()
        {
            matcher.insert_up_to(src, pos + 1);
            let next: Match = matcher.find(src, pos + 1, cfg, best.len);
            if next.len <= best.len {
                break;
            }
            pos += 1;
            best = next;
            deferrals += 1;
            lazy_steps += 1;
        }

        emit_literals(sink, &src[anchor..pos])?;
        emit_match(sink, best.len, best.dist)?;
        pos += best.len;
        anchor = pos;
    }

    emit_literals(sink, &src[anchor..])?;
    emit_eof(sink)?;
    Ok(lazy_steps)
}
