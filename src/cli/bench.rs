//! In-memory benchmark behind `lzo bench`.
//!
//! The input is cut into `block_size` blocks, then each direction is run in
//! full passes until at least `seconds` have elapsed; the fastest pass
//! counts. Every run is checked for a lossless round trip before it is
//! reported.

use std::time::{Duration, Instant};

use anyhow::{bail, Context};

use crate::block::types::Method;
use crate::codec;

/// Outcome of benchmarking one method.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub method: Method,
    pub src_size: usize,
    pub compressed_size: usize,
    /// Compression throughput in MB/s.
    pub compress_speed: f64,
    /// Decompression throughput in MB/s.
    pub decompress_speed: f64,
}

impl BenchResult {
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            return 0.0;
        }
        self.src_size as f64 / self.compressed_size as f64
    }
}

fn mb_per_sec(bytes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64().max(1e-9);
    bytes as f64 / secs / 1_000_000.0
}

/// Runs `pass` repeatedly for at least `budget` (always once) and returns the
/// best single-pass time.
fn fastest_pass<F>(budget: Duration, mut pass: F) -> anyhow::Result<Duration>
where
    F: FnMut() -> anyhow::Result<()>,
{
    let started = Instant::now();
    let mut best = Duration::MAX;
    loop {
        let t0 = Instant::now();
        pass()?;
        best = best.min(t0.elapsed());
        if started.elapsed() >= budget {
            return Ok(best);
        }
    }
}

/// Benchmarks `method` on `src`.
pub fn bench_method(
    src: &[u8],
    method: Method,
    block_size: usize,
    seconds: u64,
) -> anyhow::Result<BenchResult> {
    if block_size == 0 {
        bail!("block size must be positive");
    }
    let budget = Duration::from_secs(seconds);
    let blocks: Vec<&[u8]> = src.chunks(block_size).collect();

    let mut packed: Vec<Vec<u8>> = Vec::with_capacity(blocks.len());
    let c_time = fastest_pass(budget, || {
        packed.clear();
        for block in &blocks {
            packed.push(codec::compress(block, method)?);
        }
        Ok(())
    })?;
    let compressed_size: usize = packed.iter().map(Vec::len).sum();

    let mut restored: Vec<u8> = Vec::with_capacity(src.len());
    let d_time = fastest_pass(budget, || {
        restored.clear();
        for (block, data) in blocks.iter().zip(&packed) {
            restored.extend_from_slice(&codec::decompress(data, block.len())?);
        }
        Ok(())
    })?;

    if restored != src {
        let pos = restored.iter().zip(src).position(|(a, b)| a != b).unwrap_or(restored.len());
        bail!("{}: round trip differs at byte {}", method, pos);
    }

    Ok(BenchResult {
        method,
        src_size: src.len(),
        compressed_size,
        compress_speed: mb_per_sec(src.len(), c_time),
        decompress_speed: mb_per_sec(src.len(), d_time),
    })
}

/// Benchmarks each method in turn and prints one line per method.
pub fn run_bench(
    name: &str,
    src: &[u8],
    methods: &[Method],
    block_size: usize,
    seconds: u64,
) -> anyhow::Result<Vec<BenchResult>> {
    let mut results = Vec::with_capacity(methods.len());
    for &method in methods {
        let r = bench_method(src, method, block_size, seconds)
            .with_context(|| format!("benchmarking {method} on {name}"))?;
        println!(
            "{:<14} {:<17.17} :{:>10} ->{:>10} ({:5.3}),{:7.1} MB/s,{:7.1} MB/s",
            r.method.to_string(),
            name,
            r.src_size,
            r.compressed_size,
            r.ratio(),
            r.compress_speed,
            r.decompress_speed
        );
        results.push(r);
    }
    Ok(results)
}
