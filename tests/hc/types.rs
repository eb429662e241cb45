// Tests for the LZO1X-999 level table.

use lzo::hc::types::{level_params, HC_WORK_SLOTS, LEVEL_TABLE, SWD_F, SWD_N};
use lzo::block::types::{LZO1X_999_MEM_COMPRESS, M4_MAX_OFFSET};

#[test]
fn window_limits() {
    assert_eq!(SWD_F, 2048);
    assert_eq!(SWD_N, M4_MAX_OFFSET);
}

#[test]
fn work_slots_fit_in_lzo_work_memory() {
    assert!(HC_WORK_SLOTS * 4 <= LZO1X_999_MEM_COMPRESS);
}

#[test]
fn levels_one_to_nine() {
    assert!(level_params(0).is_none());
    assert!(level_params(10).is_none());
    assert!(level_params(-1).is_none());
    for level in 1..=9 {
        assert_eq!(level_params(level), Some(LEVEL_TABLE[level as usize - 1]));
    }
}

#[test]
fn search_effort_grows_with_level() {
    for pair in LEVEL_TABLE.windows(2) {
        assert!(pair[1].max_chain >= pair[0].max_chain);
        assert!(pair[1].try_lazy >= pair[0].try_lazy);
    }
    assert_eq!(LEVEL_TABLE[8].nice_length, SWD_F);
}
