#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First two bytes are the declared output length; the rest is untrusted
    // compressed input. Any outcome is fine except a panic or an Ok buffer of
    // the wrong length.
    if data.len() < 2 {
        return;
    }
    let declared = usize::from(u16::from_le_bytes([data[0], data[1]]));
    if let Ok(out) = lzo::decompress_block(&data[2..], declared) {
        assert_eq!(out.len(), declared);
    }
});
