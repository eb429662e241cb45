#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the method and level; the rest is the payload.
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let method = u32::from(selector % 3) + 1;
    let level = i32::from(selector / 3 % 9) + 1;

    let compressed = lzo::compress_block(payload, method, level)
        .expect("compression of any input must succeed");
    assert!(compressed.len() <= lzo::compress_bound(payload.len()));

    let recovered = lzo::decompress_block(&compressed, payload.len())
        .expect("a freshly compressed block must decompress");
    assert_eq!(
        recovered, payload,
        "block round-trip mismatch: method {method} level {level}, {} compressed bytes",
        compressed.len()
    );
});
