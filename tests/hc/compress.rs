// Tests for the LZO1X-999 encoder, checked by decoding its output.

use lzo::block::compress::lzo1x_1_compress;
use lzo::block::decompress_core::lzo1x_decompress_safe;
use lzo::block::types::{compress_bound, LzoStatus};
use lzo::hc::compress::{lzo1x_999_compress, lzo1x_999_compress_level};
use lzo::hc::types::HC_WORK_SLOTS;
use lzo::sample::{generate, SampleKind};

fn pack(src: &[u8], level: i32) -> Vec<u8> {
    let mut wrk = vec![0u32; HC_WORK_SLOTS];
    let mut dst = vec![0u8; compress_bound(src.len())];
    let n = lzo1x_999_compress_level(src, &mut dst, &mut wrk, level).expect("compress");
    dst.truncate(n);
    dst
}

fn unpack(packed: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    assert_eq!(lzo1x_decompress_safe(packed, &mut out), Ok(len));
    out
}

#[test]
fn all_levels_all_shapes() {
    for kind in [SampleKind::Text, SampleKind::Records, SampleKind::Noise] {
        let src = generate(kind, 8_000, 21);
        for level in 1..=9 {
            let packed = pack(&src, level);
            assert!(packed.len() <= compress_bound(src.len()));
            assert_eq!(unpack(&packed, src.len()), src, "{kind:?} level {level}");
        }
    }
}

#[test]
fn ten_a_round_trip() {
    let packed = pack(b"AAAAAAAAAA", 9);
    assert_eq!(unpack(&packed, 10), b"AAAAAAAAAA");
}

#[test]
fn finds_repeats_beyond_the_m3_window() {
    // Noise repeated 0x5000 and 0xB000 bytes later; only M4 matches reach.
    let noise = generate(SampleKind::Noise, 0x3000, 9);
    let mut src = noise.clone();
    src.extend(generate(SampleKind::Noise, 0x2000, 10));
    src.extend(&noise);
    src.extend(generate(SampleKind::Noise, 0x3000, 12));
    src.extend(&noise);
    let packed = pack(&src, 7);
    assert!(packed.len() < src.len() - 0x3000, "got {} of {}", packed.len(), src.len());
    assert_eq!(unpack(&packed, src.len()), src);
}

#[test]
fn level_nine_beats_lzo1x_1_on_text() {
    let src = generate(SampleKind::Text, 30_000, 5);
    let mut wrk = vec![0u32; 1 << 14];
    let mut dst = vec![0u8; compress_bound(src.len())];
    let fast = lzo1x_1_compress(&src, &mut dst, &mut wrk).unwrap();
    let best = lzo1x_999_compress(&src, &mut dst, &mut vec![0u32; HC_WORK_SLOTS]).unwrap();
    assert!(best < fast, "999: {best}, 1: {fast}");
}

#[test]
fn deterministic_per_level() {
    let src = generate(SampleKind::Records, 30_000, 3);
    for level in [1, 5, 9] {
        assert_eq!(pack(&src, level), pack(&src, level));
    }
}

#[test]
fn undersized_output_is_an_overrun() {
    let src = generate(SampleKind::Noise, 1000, 1);
    let mut wrk = vec![0u32; HC_WORK_SLOTS];
    let mut dst = vec![0u8; 500];
    assert_eq!(
        lzo1x_999_compress_level(&src, &mut dst, &mut wrk, 5),
        Err(LzoStatus::OutputOverrun)
    );
}
