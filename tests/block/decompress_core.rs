// Tests for lzo1x_decompress_safe on hand-built and damaged streams.

use lzo::block::compress::lzo1x_1_compress;
use lzo::block::decompress_core::lzo1x_decompress_safe;
use lzo::block::types::{compress_bound, LzoStatus};
use lzo::sample::{generate, SampleKind};

fn pack(src: &[u8]) -> Vec<u8> {
    let mut wrk = vec![0u32; 1 << 14];
    let mut dst = vec![0u8; compress_bound(src.len())];
    let n = lzo1x_1_compress(src, &mut dst, &mut wrk).unwrap();
    dst.truncate(n);
    dst
}

// ─────────────────────────────────────────────────────────────────────────────
// Hand-built streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn m3_match_with_state_bits() {
    // "abcd", M3 len 4 dist 4 with one trailing literal "e", then EOF.
    // M3 token 0b001_00010 (len-2 = 2), distance field (dist-1)<<2 | state 1.
    let dist_field: u16 = (3 << 2) | 1;
    let mut src = vec![17 + 4, b'a', b'b', b'c', b'd', 0x20 | 2];
    src.extend_from_slice(&dist_field.to_le_bytes());
    src.push(b'e');
    src.extend_from_slice(&[0x11, 0, 0]);
    let mut dst = [0u8; 9];
    assert_eq!(lzo1x_decompress_safe(&src, &mut dst), Ok(9));
    assert_eq!(&dst, b"abcdabcde");
}

#[test]
fn long_literal_run_after_match() {
    // "ab", M2 len 3 dist 2 (state 0), then a 20-byte literal run: 0, 20-18.
    let mut src = vec![17 + 2, b'a', b'b', (2 << 5) | (1 << 2), 0];
    src.push(0);
    src.push(20 - 18);
    src.extend(std::iter::repeat(b'x').take(20));
    src.extend_from_slice(&[0x11, 0, 0]);
    let mut dst = [0u8; 25];
    assert_eq!(lzo1x_decompress_safe(&src, &mut dst), Ok(25));
    assert_eq!(&dst[..5], b"ababa");
    assert!(dst[5..].iter().all(|&b| b == b'x'));
}

#[test]
fn output_capacity_may_exceed_stream() {
    let packed = pack(b"hello, hello, hello");
    let mut dst = [0u8; 64];
    assert_eq!(lzo1x_decompress_safe(&packed, &mut dst), Ok(19));
}

// ─────────────────────────────────────────────────────────────────────────────
// Damaged streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_truncation_fails() {
    let src = generate(SampleKind::Text, 3000, 8);
    let packed = pack(&src);
    let mut dst = vec![0u8; src.len()];
    for cut in 0..packed.len() {
        let r = lzo1x_decompress_safe(&packed[..cut], &mut dst);
        assert!(r.is_err(), "truncation at {cut} decoded");
    }
}

#[test]
fn short_destination_is_an_output_overrun() {
    let src = generate(SampleKind::Records, 3000, 8);
    let packed = pack(&src);
    let mut dst = vec![0u8; src.len() - 1];
    assert_eq!(lzo1x_decompress_safe(&packed, &mut dst), Err(LzoStatus::OutputOverrun));
}

#[test]
fn random_bytes_never_panic() {
    let mut dst = vec![0u8; 4096];
    for seed in 0..200u32 {
        let junk = generate(SampleKind::Noise, (seed as usize * 13) % 300, seed);
        let _ = lzo1x_decompress_safe(&junk, &mut dst);
    }
}

#[test]
fn huge_extension_is_an_input_overrun() {
    // Literal-run extension of all zero bytes that never terminates.
    let mut src = vec![0u8; 1000];
    src[0] = 0;
    let mut dst = vec![0u8; 16];
    assert_eq!(lzo1x_decompress_safe(&src, &mut dst), Err(LzoStatus::InputOverrun));
}
