//! Error kinds returned by the codec boundary.

use std::fmt;

use crate::block::types::LzoStatus;

/// Failure of a boundary call.
///
/// Every variant is returned to the immediate caller; nothing is retried.
/// No variant is ever accompanied by a partially written buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The host asked for a method id other than 1, 2 or 3.
    UnsupportedMethod(u32),
    /// Output or working memory could not be reserved.
    AllocationFailure { requested: usize },
    /// The engine needed more than `compress_bound` bytes of output. Always a
    /// defect in the engine; `produced` is `None` when it stopped at the
    /// buffer end.
    InternalOverflow { produced: Option<usize>, bound: usize },
    /// The engine refused the call (bad level, undersized working memory,
    /// failed self-test).
    NativeFailure(LzoStatus),
    /// The compressed input is malformed, truncated or has trailing bytes.
    DecompressionFailed(LzoStatus),
    /// The stream decoded to a different length than the caller declared.
    /// `actual` is `None` when decoding would have run past `expected`.
    LengthMismatch { expected: usize, actual: Option<usize> },
    /// A block size of zero or above `MAX_BLOCK_SIZE`.
    InvalidBlockSize(usize),
    /// A decoded block does not match its stored Adler-32.
    ChecksumMismatch { block: usize, expected: u32, actual: u32 },
}

impl CodecError {
    /// Short stable name of the error kind, for logs and the CLI.
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::UnsupportedMethod(_) => "unsupported-method",
            CodecError::AllocationFailure { .. } => "allocation-failure",
            CodecError::InternalOverflow { .. } => "internal-overflow",
            CodecError::NativeFailure(_) => "native-failure",
            CodecError::DecompressionFailed(_) => "decompression-failed",
            CodecError::LengthMismatch { .. } => "length-mismatch",
            CodecError::InvalidBlockSize(_) => "invalid-block-size",
            CodecError::ChecksumMismatch { .. } => "checksum-mismatch",
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnsupportedMethod(m) => {
                write!(f, "unsupported compression method {m} (expected 1, 2 or 3)")
            }
            CodecError::AllocationFailure { requested } => {
                write!(f, "failed to allocate {requested} bytes")
            }
            CodecError::InternalOverflow { produced: Some(n), bound } => {
                write!(f, "compressor produced {n} bytes, above the {bound}-byte bound")
            }
            CodecError::InternalOverflow { produced: None, bound } => {
                write!(f, "compressor overran the {bound}-byte bound")
            }
            CodecError::NativeFailure(status) => write!(f, "compressor failed: {status}"),
            CodecError::DecompressionFailed(status) => {
                write!(f, "corrupt compressed input: {status}")
            }
            CodecError::LengthMismatch { expected, actual: Some(n) } => {
                write!(f, "decompressed {n} bytes, expected {expected}")
            }
            CodecError::LengthMismatch { expected, actual: None } => {
                write!(f, "decompressed data exceeds the expected {expected} bytes")
            }
            CodecError::InvalidBlockSize(n) => write!(f, "invalid block size {n}"),
            CodecError::ChecksumMismatch { block, expected, actual } => write!(
                f,
                "block {block}: adler32 mismatch (stored {expected:#010x}, computed {actual:#010x})"
            ),
        }
    }
}

impl std::error::Error for CodecError {}
