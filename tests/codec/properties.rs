// Whole-boundary properties: round trip, bound, determinism, damage handling.

use lzo::block::types::{compress_bound, Method};
use lzo::checksum::{adler32, ADLER32_INIT_VALUE};
use lzo::codec::{compress, decompress, CodecError};
use lzo::sample::{generate, SampleKind};

const METHODS: [Method; 5] = [
    Method::Fast,
    Method::FastSmallWindow,
    Method::MaxCompression(1),
    Method::MaxCompression(6),
    Method::MaxCompression(9),
];

fn inputs() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0x5a],
        b"AAAAAAAAAA".to_vec(),
        vec![0u8; 70_000],
        generate(SampleKind::Text, 20_000, 1),
        generate(SampleKind::Records, 20_000, 2),
        generate(SampleKind::Noise, 20_000, 3),
        (0..=255u8).cycle().take(10_000).collect(),
    ]
}

#[test]
fn round_trip_every_method() {
    for input in inputs() {
        for method in METHODS {
            let packed = compress(&input, method).unwrap();
            assert!(packed.len() <= compress_bound(input.len()));
            assert_eq!(decompress(&packed, input.len()).unwrap(), input, "{method}");
        }
    }
}

#[test]
fn ten_a_scenario() {
    for method in METHODS {
        let packed = compress(b"AAAAAAAAAA", method).unwrap();
        assert!(packed.len() <= compress_bound(10));
        assert_eq!(decompress(&packed, 10).unwrap(), b"AAAAAAAAAA");
    }
}

#[test]
fn compression_is_deterministic() {
    let src = generate(SampleKind::Text, 30_000, 9);
    for method in METHODS {
        assert_eq!(compress(&src, method).unwrap(), compress(&src, method).unwrap());
    }
}

#[test]
fn damaged_streams_never_decode_to_another_length() {
    let src = generate(SampleKind::Text, 2_000, 4);
    let packed = compress(&src, Method::MaxCompression(9)).unwrap();

    for i in 0..packed.len() {
        for flip in [0x01u8, 0x80, 0xff] {
            let mut bad = packed.clone();
            bad[i] ^= flip;
            match decompress(&bad, src.len()) {
                // The stream carries no checksum: flipped literal or distance
                // bits can still decode, but only to the declared length.
                Ok(out) => assert_eq!(out.len(), src.len(), "byte {i} ^ {flip:#x}"),
                Err(CodecError::DecompressionFailed(_)) | Err(CodecError::LengthMismatch { .. }) => {}
                Err(other) => panic!("byte {i} ^ {flip:#x}: unexpected {other:?}"),
            }
        }
    }
}

#[test]
fn flipped_literal_needs_a_checksum_to_be_seen() {
    let src = b"0123456789".repeat(50);
    let mut packed = compress(&src, Method::Fast).unwrap();
    // Initial run of ten literals, then one long match.
    assert_eq!(packed[0], 17 + 10);
    packed[1] ^= 0x20;

    let out = decompress(&packed, src.len()).unwrap();
    assert_eq!(out[0], src[0] ^ 0x20);
    assert_ne!(adler32(ADLER32_INIT_VALUE, &out), adler32(ADLER32_INIT_VALUE, &src));
}

#[test]
fn concurrent_callers_need_no_locking() {
    let src = generate(SampleKind::Records, 50_000, 8);
    let expected = compress(&src, Method::Fast).unwrap();
    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let packed = compress(&src, Method::Fast).unwrap();
                assert_eq!(packed, expected);
                assert_eq!(decompress(&packed, src.len()).unwrap(), src);
            });
        }
    });
}
