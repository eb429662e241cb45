// e2e/cli_integration.rs: CLI integration tests
//
// Runs the `lzo` binary as a black box with std::process::Command and checks
// output files, stdout and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `lzo` binary produced by Cargo.
fn lzo_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lzo"))
}

fn run(args: &[&str]) -> Output {
    Command::new(lzo_bin()).args(args).output().expect("failed to run lzo")
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

/// Create a TempDir containing a text file with ~4 KB of content.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let content = "Hello, LZO!\n".repeat(341);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

// ── 1. Compress / decompress roundtrip ───────────────────────────────────────

#[test]
fn compress_decompress_roundtrip_every_method() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let size = original.len().to_string();

    for method in ["1", "2", "3"] {
        let packed = dir.path().join(format!("out.{method}.lzo"));
        let restored = dir.path().join(format!("back.{method}.txt"));

        let out = run(&["compress", "-m", method, path_str(&input), path_str(&packed)]);
        assert!(out.status.success(), "compress -m {method}: {:?}", out);
        assert!(fs::metadata(&packed).unwrap().len() < original.len() as u64);

        let out = run(&["decompress", "--size", &size, path_str(&packed), path_str(&restored)]);
        assert!(out.status.success(), "decompress -m {method}: {:?}", out);
        assert_eq!(fs::read(&restored).unwrap(), original);
    }
}

// ── 2. Failures exit with code 1 ─────────────────────────────────────────────

#[test]
fn wrong_declared_size_exits_1() {
    let (dir, input) = make_temp_input();
    let packed = dir.path().join("out.lzo");
    assert!(run(&["compress", path_str(&input), path_str(&packed)]).status.success());

    let restored = dir.path().join("back.txt");
    let out = run(&["decompress", "--size", "100", path_str(&packed), path_str(&restored)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("lzo:"));
    assert!(!restored.exists(), "no partial output may be written");
}

#[test]
fn corrupt_input_exits_1() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.lzo");
    // "a", then a match reaching before the start of the output.
    fs::write(&bad, [17u8 + 1, b'a', 0x64, 0x00, 0x11, 0x00, 0x00]).unwrap();
    let out = run(&["decompress", "--size", "10", path_str(&bad), path_str(&dir.path().join("o"))]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("corrupt compressed input"));
}

#[test]
fn unsupported_method_exits_1() {
    let (dir, input) = make_temp_input();
    let out = run(&["compress", "-m", "5", path_str(&input), path_str(&dir.path().join("o"))]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn missing_file_exits_1() {
    let out = run(&["checksum", "/nonexistent/definitely/not/here"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn bad_usage_exits_nonzero() {
    let out = run(&["decompress", "only-one-arg"]);
    assert!(!out.status.success());
}

// ── 3. Checksum / version / bench ────────────────────────────────────────────

#[test]
fn checksum_prints_hex() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a");
    fs::write(&file, b"a").unwrap();

    let out = run(&["checksum", path_str(&file)]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "00620062");

    let out = run(&["checksum", "--crc32", path_str(&file)]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "e8b7be43");
}

#[test]
fn version_prints_lzo_release() {
    let out = run(&["version"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("LZO 2.10"));
    assert!(text.contains("0x20a0"));
}

#[test]
fn bench_on_a_small_file() {
    let (_dir, input) = make_temp_input();
    let out = run(&["bench", "-i", "0", "-B", "1K", "--all", path_str(&input)]);
    assert!(out.status.success(), "{:?}", out);
    let text = String::from_utf8_lossy(&out.stdout);
    assert_eq!(text.lines().count(), 11);
    assert!(text.contains("LZO1X-999/9"));
}
