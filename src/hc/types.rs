//! LZO1X-999 level table and match-finder sizing.
//!
//! The nine levels trade speed for ratio through the same five knobs LZO
//! uses (`lzo_compress_config_t` in `lzo1x_9x.c`):
//!
//! | Field         | Meaning                                                     |
//! |---------------|-------------------------------------------------------------|
//! | `try_lazy`    | how many times a match may be deferred for a longer one     |
//! | `good_length` | once the current match is this long, search a quarter chain |
//! | `max_lazy`    | matches at least this long are taken without a lazy look    |
//! | `nice_length` | stop searching once a match is this long                    |
//! | `max_chain`   | maximum hash-chain candidates examined per position         |

use crate::block::types::{LZO1X_999_LEVEL_MAX, LZO1X_999_LEVEL_MIN, M4_MAX_OFFSET};

// ─────────────────────────────────────────────────────────────────────────────
// Window and table sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Longest match the encoder will emit (`SWD_F`).
pub const SWD_F: usize = 2048;
/// Farthest match the encoder will emit (`SWD_N`).
pub const SWD_N: usize = M4_MAX_OFFSET;

/// Bytes hashed per position. Three, so that 3-byte M2 matches are findable.
pub const HC_HASH_BYTES: usize = 3;
/// Hash-table log.
pub const HC_HASH_LOG: u32 = 14;
/// Hash-table slots.
pub const HC_HASH_SIZE: usize = 1 << HC_HASH_LOG;

/// Chain-table slots: one per position in a 64K window, which covers `SWD_N`.
pub const HC_CHAIN_SIZE: usize = 1 << 16;
pub const HC_CHAIN_MASK: usize = HC_CHAIN_SIZE - 1;
/// Chain deltas are clamped to this; a clamped link always falls outside `SWD_N`.
pub const HC_MAX_DELTA: u32 = 0xFFFF;

/// `u32` slots of working memory the match finder carves up.
pub const HC_WORK_SLOTS: usize = HC_HASH_SIZE + HC_CHAIN_SIZE;

// ─────────────────────────────────────────────────────────────────────────────
// Level parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Search parameters for one LZO1X-999 level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelParams {
    pub try_lazy: u32,
    pub good_length: usize,
    pub max_lazy: usize,
    pub nice_length: usize,
    pub max_chain: u32,
}

const fn params(
    try_lazy: u32,
    good_length: usize,
    max_lazy: usize,
    nice_length: usize,
    max_chain: u32,
) -> LevelParams {
    LevelParams { try_lazy, good_length, max_lazy, nice_length, max_chain }
}

/// Level → parameters. Index 0 is level 1.
pub static LEVEL_TABLE: [LevelParams; 9] = [
    params(0,     0,     0,     8,    4), /* 1: fastest */
    params(0,     0,     0,    16,    8), /* 2 */
    params(0,     0,     0,    32,   16), /* 3 */
    params(1,     4,     4,    16,   16), /* 4 */
    params(1,     8,    16,    32,   32), /* 5 */
    params(1,     8,    16,   128,  128), /* 6 */
    params(2,     8,    32,   128,  256), /* 7 */
    params(2,    32,   128, SWD_F, 2048), /* 8 */
    params(2, SWD_F, SWD_F, SWD_F, 4096), /* 9: best ratio */
];

/// Parameters for `level`, or `None` outside `1..=9`.
pub fn level_params(level: i32) -> Option<LevelParams> {
    if !(LZO1X_999_LEVEL_MIN..=LZO1X_999_LEVEL_MAX).contains(&level) {
        return None;
    }
    Some(LEVEL_TABLE[(level - 1) as usize])
}
