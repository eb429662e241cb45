//! Subcommand implementations. Each returns `anyhow::Result<()>`; `main`
//! turns an error into exit code 1.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};

use super::args::{BenchArgs, Command, MethodArgs};
use super::bench::run_bench;
use crate::block::types::Method;
use crate::checksum::{adler32, ADLER32_INIT_VALUE};
use crate::codec;
use crate::config::BENCH_SYNTHETIC_SIZE;
use crate::sample::{generate, SampleKind};

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

fn write_output(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    fs::write(path, data).with_context(|| format!("cannot write {}", path.display()))
}

pub fn compress_file(method: &MethodArgs, input: &Path, output: &Path) -> anyhow::Result<()> {
    let src = read_input(input)?;
    let packed = codec::compress_block(&src, method.method, method.level)
        .with_context(|| format!("compressing {}", input.display()))?;
    write_output(output, &packed)?;
    log::info!(
        "{}: {} -> {} bytes ({:.2}%)",
        input.display(),
        src.len(),
        packed.len(),
        packed.len() as f64 * 100.0 / src.len().max(1) as f64
    );
    Ok(())
}

pub fn decompress_file(size: usize, input: &Path, output: &Path) -> anyhow::Result<()> {
    let packed = read_input(input)?;
    let data = codec::decompress_block(&packed, size)
        .with_context(|| format!("decompressing {}", input.display()))?;
    write_output(output, &data)?;
    log::info!("{}: {} -> {} bytes", input.display(), packed.len(), data.len());
    Ok(())
}

pub fn checksum_file(use_crc32: bool, seed: Option<u32>, input: &Path) -> anyhow::Result<u32> {
    let data = read_input(input)?;
    if use_crc32 {
        crc32_of(seed, &data)
    } else {
        Ok(adler32(seed.unwrap_or(ADLER32_INIT_VALUE), &data))
    }
}

#[cfg(feature = "crc32")]
fn crc32_of(seed: Option<u32>, data: &[u8]) -> anyhow::Result<u32> {
    use crate::checksum::{crc32, CRC32_INIT_VALUE};
    Ok(crc32(seed.unwrap_or(CRC32_INIT_VALUE), data))
}

#[cfg(not(feature = "crc32"))]
fn crc32_of(_seed: Option<u32>, _data: &[u8]) -> anyhow::Result<u32> {
    Err(anyhow!("this build has no CRC-32 support (enable the `crc32` feature)"))
}

pub fn bench(args: &BenchArgs) -> anyhow::Result<()> {
    let (name, src) = match &args.input {
        Some(path) => (path.display().to_string(), read_input(path)?),
        None => ("synthetic text".to_string(), generate(SampleKind::Text, BENCH_SYNTHETIC_SIZE, 0)),
    };
    let methods: Vec<Method> = if args.all {
        let mut all = vec![Method::Fast, Method::FastSmallWindow];
        all.extend((1..=9).map(Method::MaxCompression));
        all
    } else {
        let method = args
            .method
            .resolve()
            .ok_or_else(|| anyhow!("unsupported compression method {}", args.method.method))?;
        vec![method]
    };
    run_bench(&name, &src, &methods, args.block_size, args.seconds)?;
    Ok(())
}

/// Dispatches a parsed subcommand.
pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Compress { method, input, output } => compress_file(&method, &input, &output),
        Command::Decompress { size, input, output } => decompress_file(size, &input, &output),
        Command::Checksum { crc32, seed, input } => {
            println!("{:08x}", checksum_file(crc32, seed, &input)?);
            Ok(())
        }
        Command::Bench(args) => bench(&args),
        Command::Version => {
            println!(
                "lzo {} (LZO {}, {}, format 0x{:04x})",
                env!("CARGO_PKG_VERSION"),
                crate::version_string(),
                crate::version_date(),
                crate::version_number()
            );
            Ok(())
        }
    }
}
