// Tests for the owned-buffer compression boundary.

use lzo::block::types::{compress_bound, LzoStatus, Method};
use lzo::codec::{compress, compress_block, init, CodecError, WorkingMemory};
use lzo::sample::{generate, SampleKind};

#[test]
fn init_succeeds() {
    assert_eq!(init(), Ok(()));
}

#[test]
fn unknown_method_ids_are_rejected() {
    for id in [0u32, 4, 99, u32::MAX] {
        assert_eq!(compress_block(b"data", id, 1), Err(CodecError::UnsupportedMethod(id)));
    }
}

#[test]
fn host_ids_select_methods() {
    let src = generate(SampleKind::Text, 10_000, 1);
    assert_eq!(compress_block(&src, 1, 0).unwrap(), compress(&src, Method::Fast).unwrap());
    assert_eq!(
        compress_block(&src, 2, 0).unwrap(),
        compress(&src, Method::FastSmallWindow).unwrap()
    );
    assert_eq!(
        compress_block(&src, 3, 4).unwrap(),
        compress(&src, Method::MaxCompression(4)).unwrap()
    );
}

#[test]
fn level_outside_range_is_a_native_failure() {
    for level in [0, 10, -3] {
        assert_eq!(
            compress_block(b"abc", 3, level),
            Err(CodecError::NativeFailure(LzoStatus::InvalidArgument))
        );
    }
}

#[test]
fn level_is_ignored_by_fast_methods() {
    assert!(compress_block(b"abc", 1, 42).is_ok());
    assert!(compress_block(b"abc", 2, -1).is_ok());
}

#[test]
fn output_never_exceeds_bound() {
    let noise = generate(SampleKind::Noise, 100_000, 4);
    for method in [Method::Fast, Method::FastSmallWindow, Method::MaxCompression(1)] {
        let out = compress(&noise, method).unwrap();
        assert!(out.len() <= compress_bound(noise.len()), "{method}");
        assert!(out.len() > noise.len(), "noise should not shrink");
    }
}

#[test]
fn empty_input_compresses_to_eof_marker() {
    for method in [Method::Fast, Method::FastSmallWindow, Method::MaxCompression(9)] {
        assert_eq!(compress(&[], method).unwrap(), vec![0x11, 0, 0]);
    }
}

#[test]
fn working_memory_matches_method_minimum() {
    for method in [Method::Fast, Method::FastSmallWindow, Method::MaxCompression(3)] {
        let wrk = WorkingMemory::for_method(method).unwrap();
        assert!(wrk.size() >= method.work_mem_size());
    }
}
