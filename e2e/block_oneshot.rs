//! E2E Test Suite: Block One-Shot API
//!
//! Drives the public boundary (`compress`, `compress_block`, `decompress`,
//! `decompress_block`, `adler32`) the way a host binding does: integer method
//! ids, caller-declared output lengths, owned result buffers.

extern crate lzo;

use lzo::{
    adler32, compress_block, compress_bound, decompress_block, CodecError, ADLER32_INIT_VALUE,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: typical data, every method
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_typical_data() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(20);

    for (method, level) in [(1u32, 0), (2, 0), (3, 1), (3, 9)] {
        let compressed = compress_block(&original, method, level).expect("compression should succeed");
        assert!(
            compressed.len() < original.len(),
            "method {} produced {} bytes for {}",
            method,
            compressed.len(),
            original.len()
        );
        let decompressed =
            decompress_block(&compressed, original.len()).expect("decompression should succeed");
        assert_eq!(decompressed, original);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: the 10 x 'A' scenario
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ten_a() {
    let compressed = compress_block(b"AAAAAAAAAA", 1, 0).unwrap();
    assert!(compressed.len() <= compress_bound(10));
    assert_eq!(decompress_block(&compressed, 10).unwrap(), b"AAAAAAAAAA");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: a block the size of BLOCK_SIZE
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_full_block() {
    let original: Vec<u8> = (0..lzo::BLOCK_SIZE).map(|i| ((i / 7) % 251) as u8).collect();
    for method in [1u32, 2, 3] {
        let compressed = compress_block(&original, method, 5).unwrap();
        assert!(compressed.len() <= compress_bound(original.len()));
        assert_eq!(decompress_block(&compressed, original.len()).unwrap(), original);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: checksum-protected transfer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_checksum_protected_transfer() {
    let original = b"payload with a checksum, payload with a checksum".to_vec();
    let sum = adler32(ADLER32_INIT_VALUE, &original);
    let compressed = compress_block(&original, 3, 9).unwrap();

    let received = decompress_block(&compressed, original.len()).unwrap();
    assert_eq!(adler32(ADLER32_INIT_VALUE, &received), sum);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: length disagreements
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_declared_length_disagreements() {
    let original = b"0123456789".repeat(50);
    let compressed = compress_block(&original, 1, 0).unwrap();

    match decompress_block(&compressed, original.len() / 2) {
        Err(CodecError::LengthMismatch { expected, actual: None }) => {
            assert_eq!(expected, original.len() / 2)
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
    match decompress_block(&compressed, original.len() * 2) {
        Err(CodecError::LengthMismatch { actual: Some(n), .. }) => assert_eq!(n, original.len()),
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}
