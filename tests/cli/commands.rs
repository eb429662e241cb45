// Tests for the subcommand implementations, run in-process on temp files.

use std::fs;

use lzo::cli::args::MethodArgs;
use lzo::cli::commands::{checksum_file, compress_file, decompress_file};
use lzo::sample::{generate, SampleKind};
use tempfile::tempdir;

#[test]
fn compress_then_decompress_files() {
    let dir = tempdir().unwrap();
    let src = generate(SampleKind::Text, 40_000, 1);
    let input = dir.path().join("in.txt");
    let packed = dir.path().join("in.lzo");
    let restored = dir.path().join("out.txt");
    fs::write(&input, &src).unwrap();

    let method = MethodArgs { method: 3, level: 6 };
    compress_file(&method, &input, &packed).unwrap();
    assert!(fs::metadata(&packed).unwrap().len() < src.len() as u64);

    decompress_file(src.len(), &packed, &restored).unwrap();
    assert_eq!(fs::read(&restored).unwrap(), src);
}

#[test]
fn wrong_size_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in");
    let packed = dir.path().join("in.lzo");
    fs::write(&input, b"abcabcabcabcabcabc").unwrap();
    compress_file(&MethodArgs { method: 1, level: 0 }, &input, &packed).unwrap();

    let err = decompress_file(5, &packed, &dir.path().join("out")).unwrap_err();
    assert!(format!("{err:#}").contains("exceeds the expected 5 bytes"));
}

#[test]
fn unsupported_method_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in");
    fs::write(&input, b"x").unwrap();
    let err = compress_file(&MethodArgs { method: 9, level: 0 }, &input, &dir.path().join("o"))
        .unwrap_err();
    assert!(format!("{err:#}").contains("unsupported compression method 9"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(checksum_file(false, None, &dir.path().join("nope")).is_err());
}

#[test]
fn checksum_of_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a");
    fs::write(&path, b"a").unwrap();
    assert_eq!(checksum_file(false, None, &path).unwrap(), 0x0062_0062);
    assert_eq!(
        checksum_file(false, Some(0x0062_0062), &path).unwrap(),
        lzo::adler32(0x0062_0062, b"a")
    );
}
