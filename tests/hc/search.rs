// Tests for the hash-chain match finder.

use lzo::hc::search::{ChainMatcher, Match};
use lzo::hc::types::{level_params, HC_WORK_SLOTS, SWD_F};

fn matcher(wrk: &mut [u32]) -> ChainMatcher<'_> {
    ChainMatcher::new(wrk).expect("work memory is large enough")
}

#[test]
fn prefers_the_longest_candidate() {
    // "abcX" at 0 and "abcdef" at 8; at 16 "abcdef" should win over "abc".
    let src = b"abcXyyyyabcdefzzabcdef";
    let mut wrk = vec![0u32; HC_WORK_SLOTS];
    let mut m = matcher(&mut wrk);
    let cfg = level_params(9).unwrap();
    m.insert_up_to(src, 16);
    assert_eq!(m.find(src, 16, &cfg, 0), Match { len: 6, dist: 8 });
}

#[test]
fn three_byte_match_only_when_near() {
    let cfg = level_params(9).unwrap();

    let near = b"xyz-xyz";
    let mut wrk = vec![0u32; HC_WORK_SLOTS];
    let mut m = matcher(&mut wrk);
    m.insert_up_to(near, 4);
    assert_eq!(m.find(near, 4, &cfg, 0), Match { len: 3, dist: 4 });

    // Same three bytes 0x900 apart: too far for a 3-byte M2 match.
    let mut far = b"xyz".to_vec();
    far.extend(std::iter::repeat(b'.').take(0x900 - 3));
    far.extend_from_slice(b"xyz!");
    let mut wrk = vec![0u32; HC_WORK_SLOTS];
    let mut m = matcher(&mut wrk);
    m.insert_up_to(&far, 0x900);
    assert!(!m.find(&far, 0x900, &cfg, 0).is_some());
}

#[test]
fn match_length_is_capped() {
    let src = vec![b'q'; 5000];
    let mut wrk = vec![0u32; HC_WORK_SLOTS];
    let mut m = matcher(&mut wrk);
    let cfg = level_params(9).unwrap();
    m.insert_up_to(&src, 1);
    let found = m.find(&src, 1, &cfg, 0);
    assert_eq!(found, Match { len: SWD_F, dist: 1 });
}

#[test]
fn must_beat_previous_length() {
    let src = b"abcdeXabcdeYabcde";
    let mut wrk = vec![0u32; HC_WORK_SLOTS];
    let mut m = matcher(&mut wrk);
    let cfg = level_params(9).unwrap();
    m.insert_up_to(src, 12);
    assert!(!m.find(src, 12, &cfg, 5).is_some());
    assert_eq!(m.find(src, 12, &cfg, 4).len, 5);
}
