//! Hash-chain match finder for the LZO1X-999 encoder.
//!
//! Two tables, both carved from the caller's working memory:
//!
//! 1. **Head table**: for each 3-byte hash, the most recent position seen.
//! 2. **Chain table**: for each position (mod 64K), the distance back to the
//!    previous position with the same hash.
//!
//! [`ChainMatcher::insert_up_to`] brings the tables up to date lazily before
//! each search; [`ChainMatcher::find`] walks the chain from newest to oldest
//! candidate.

use super::types::{
    LevelParams, HC_CHAIN_MASK, HC_CHAIN_SIZE, HC_HASH_BYTES, HC_HASH_LOG, HC_HASH_SIZE,
    HC_MAX_DELTA, HC_WORK_SLOTS, SWD_F, SWD_N,
};
use crate::block::encode::is_encodable;
use crate::block::types::{common_length, LzoStatus};

/// A candidate back-reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Match {
    pub len: usize,
    pub dist: usize,
}

impl Match {
    pub const NONE: Match = Match { len: 0, dist: 0 };

    #[inline]
    pub fn is_some(&self) -> bool {
        self.len > 0
    }
}

#[inline(always)]
fn hash3(src: &[u8], pos: usize) -> usize {
    let v = u32::from(src[pos]) | u32::from(src[pos + 1]) << 8 | u32::from(src[pos + 2]) << 16;
    (v.wrapping_mul(0x9E37_79B1) >> (32 - HC_HASH_LOG)) as usize
}

// ─────────────────────────────────────────────────────────────────────────────
// ChainMatcher
// ─────────────────────────────────────────────────────────────────────────────

pub struct ChainMatcher<'w> {
    head: &'w mut [u32],
    chain: &'w mut [u32],
    /// First position not yet inserted.
    next_to_update: usize,
}

impl<'w> ChainMatcher<'w> {
    /// Carves the tables out of `wrkmem` and clears them.
    ///
    /// Fails with `LzoStatus::InvalidArgument` if `wrkmem` is smaller than
    /// [`HC_WORK_SLOTS`].
    pub fn new(wrkmem: &'w mut [u32]) -> Result<Self, LzoStatus> {
        if wrkmem.len() < HC_WORK_SLOTS {
            return Err(LzoStatus::InvalidArgument);
        }
        let (head, rest) = wrkmem.split_at_mut(HC_HASH_SIZE);
        let chain = &mut rest[..HC_CHAIN_SIZE];
        head.fill(0);
        chain.fill(0);
        Ok(ChainMatcher { head, chain, next_to_update: 0 })
    }

    /// Inserts every position in `[next_to_update, target)` that still has
    /// `HC_HASH_BYTES` bytes of input after it.
    pub fn insert_up_to(&mut self, src: &[u8], target: usize) {
        let last = target.min(src.len().saturating_sub(HC_HASH_BYTES - 1));
        let mut idx = self.next_to_update;
        while idx < last {
            let h = hash3(src, idx);
            let delta = (idx as u32).wrapping_sub(self.head[h]).min(HC_MAX_DELTA);
            self.chain[idx & HC_CHAIN_MASK] = delta;
            self.head[h] = idx as u32;
            idx += 1;
        }
        self.next_to_update = self.next_to_update.max(target);
    }

    /// Longest encodable match for `pos` among already-inserted positions.
    ///
    /// `prev_len` is the length of the match being considered for lazy
    /// deferral; when it reaches `good_length` only a quarter of the chain is
    /// searched, and candidates must beat it to be reported.
    pub fn find(&self, src: &[u8], pos: usize, cfg: &LevelParams, prev_len: usize) -> Match {
        let max_len = (src.len() - pos).min(SWD_F);
        if max_len < HC_HASH_BYTES {
            return Match::NONE;
        }

        let mut chain_left = cfg.max_chain;
        if cfg.good_length > 0 && prev_len >= cfg.good_length {
            chain_left >>= 2;
        }
        let nice = if cfg.nice_length == 0 { max_len } else { cfg.nice_length.min(max_len) };

        let mut best = Match::NONE;
        let mut candidate = self.head[hash3(src, pos)] as usize;

        while chain_left > 0 && candidate < pos {
            let dist = pos - candidate;
            if dist > SWD_N {
                break;
            }
            // Cheap reject: a longer match must agree at the current best length.
            if best.len < max_len && src[candidate + best.len] == src[pos + best.len] {
                let len = common_length(src, candidate, pos, max_len);
                if len > best.len && len > prev_len && is_encodable(len, dist) {
                    best = Match { len, dist };
                    if len >= nice {
                        break;
                    }
                }
            }

            let delta = self.chain[candidate & HC_CHAIN_MASK] as usize;
            if delta == 0 || delta > candidate {
                break;
            }
            candidate -= delta;
            chain_left -= 1;
        }
        best
    }
}
