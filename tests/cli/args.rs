// Tests for the clap grammar of the `lzo` binary.

use clap::Parser;
use lzo::block::types::Method;
use lzo::cli::args::{parse_size, Cli, Command};
use lzo::cli::log_filter;
use lzo::config::BLOCK_SIZE;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn compress_defaults_to_lzo1x_1() {
    match parse(&["lzo", "compress", "in", "out"]).command {
        Command::Compress { method, input, output } => {
            assert_eq!(method.resolve(), Some(Method::Fast));
            assert_eq!(input.to_str(), Some("in"));
            assert_eq!(output.to_str(), Some("out"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn method_three_uses_the_default_level() {
    match parse(&["lzo", "compress", "-m", "3", "in", "out"]).command {
        Command::Compress { method, .. } => {
            assert_eq!(method.resolve(), Some(Method::MaxCompression(9)));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unknown_method_parses_but_does_not_resolve() {
    match parse(&["lzo", "compress", "-m", "7", "in", "out"]).command {
        Command::Compress { method, .. } => assert_eq!(method.resolve(), None),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn decompress_requires_size() {
    assert!(Cli::try_parse_from(["lzo", "decompress", "in", "out"]).is_err());
    match parse(&["lzo", "decompress", "--size", "64K", "in", "out"]).command {
        Command::Decompress { size, .. } => assert_eq!(size, 65536),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn checksum_flags() {
    match parse(&["lzo", "checksum", "--crc32", "--seed", "0x10", "f"]).command {
        Command::Checksum { crc32, seed, .. } => {
            assert!(crc32);
            assert_eq!(seed, Some(16));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn bench_defaults() {
    match parse(&["lzo", "bench"]).command {
        Command::Bench(args) => {
            assert_eq!(args.block_size, BLOCK_SIZE);
            assert!(args.input.is_none());
            assert!(!args.all);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn bench_time_budget_is_in_seconds() {
    for flags in [["lzo", "bench", "-i", "3"], ["lzo", "bench", "--seconds", "3"]] {
        match parse(&flags).command {
            Command::Bench(args) => assert_eq!(args.seconds, 3),
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn verbosity_is_global() {
    let cli = parse(&["lzo", "version", "-vvv"]);
    assert_eq!(cli.verbose, 3);
    assert_eq!(log_filter(cli.verbose), "trace");
    assert_eq!(log_filter(0), "warn");
}

#[test]
fn size_parser_rejects_overflow() {
    assert!(parse_size("99999999999999999999").is_err());
    assert!(parse_size(&format!("{}M", usize::MAX)).is_err());
}
