// sample.rs: Deterministic synthetic inputs for `lzo bench`, tests and benches.
//
// Three shapes cover the encoder paths that matter:
//   Text       : prose-like words, many short and medium matches
//   Records    : fixed-width rows with counters, long matches at fixed distances
//   Noise      : pseudo-random bytes, exercises the stored/literal paths

/// Kind of synthetic data to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Text,
    Records,
    Noise,
}

static WORDS: &[&str] = &[
    "block", "codec", "stream", "buffer", "match", "literal", "offset", "length",
    "window", "marker", "chunk", "level", "memory", "output", "input", "state",
    "the", "a", "of", "to", "and", "in", "is", "for", "on", "with", "by", "at",
    "compress", "decompress", "checksum", "adler", "greedy", "lazy", "hash", "chain",
];

// ---------------------------------------------------------------------------
// PRNG
// ---------------------------------------------------------------------------

/// Rotate-multiply generator; deterministic for a given seed.
struct Rng(u32);

impl Rng {
    #[inline]
    fn next(&mut self) -> u32 {
        const PRIME1: u32 = 2_654_435_761;
        const PRIME2: u32 = 2_246_822_519;
        self.0 = (self.0.wrapping_mul(PRIME1) ^ PRIME2).rotate_left(13);
        self.0
    }

    /// Uniform in `0..range`.
    #[inline]
    fn below(&mut self, range: u32) -> u32 {
        ((u64::from(self.next()) * u64::from(range)) >> 32) as u32
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn fill_text(out: &mut Vec<u8>, size: usize, rng: &mut Rng) {
    let mut words_in_sentence = 0;
    while out.len() < size {
        let word = WORDS[rng.below(WORDS.len() as u32) as usize].as_bytes();
        if words_in_sentence == 0 {
            out.push(word[0].to_ascii_uppercase());
            out.extend_from_slice(&word[1..]);
        } else {
            out.extend_from_slice(word);
        }
        words_in_sentence += 1;
        if words_in_sentence > 4 + rng.below(10) {
            out.extend_from_slice(if rng.below(8) == 0 { b".\n" } else { b". " });
            words_in_sentence = 0;
        } else {
            out.push(b' ');
        }
    }
}

fn fill_records(out: &mut Vec<u8>, size: usize, rng: &mut Rng) {
    let mut id = 0u32;
    while out.len() < size {
        let row = format!(
            "{:08}|sensor-{:02}|{:>6}|OK\n",
            id,
            rng.below(16),
            rng.below(100_000)
        );
        out.extend_from_slice(row.as_bytes());
        id += 1;
    }
}

fn fill_noise(out: &mut Vec<u8>, size: usize, rng: &mut Rng) {
    while out.len() < size {
        out.extend_from_slice(&rng.next().to_le_bytes());
    }
}

/// Generates exactly `size` bytes of `kind` data from `seed`.
pub fn generate(kind: SampleKind, size: usize, seed: u32) -> Vec<u8> {
    let mut rng = Rng(seed);
    let mut out = Vec::with_capacity(size + 64);
    match kind {
        SampleKind::Text => fill_text(&mut out, size, &mut rng),
        SampleKind::Records => fill_records(&mut out, size, &mut rng),
        SampleKind::Noise => fill_noise(&mut out, size, &mut rng),
    }
    out.truncate(size);
    out
}
