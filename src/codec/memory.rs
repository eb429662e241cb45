//! Per-call scratch and output buffers.
//!
//! Both are plain `Vec`s reserved with `try_reserve_exact`, so an allocation
//! failure comes back as `CodecError::AllocationFailure` instead of aborting,
//! and both are released by `Drop` on every exit path.

use super::error::CodecError;
use crate::block::types::Method;

/// Scratch memory handed to an encoder for the duration of one call.
///
/// Stored as `u32` words because every encoder indexes it as a table of
/// positions; [`WorkingMemory::size`] reports bytes, like `LZO1X_*_MEM_COMPRESS`.
pub struct WorkingMemory {
    words: Vec<u32>,
}

impl WorkingMemory {
    /// Allocates the minimum working memory `method` needs.
    pub fn for_method(method: Method) -> Result<Self, CodecError> {
        Self::with_size(method.work_mem_size())
    }

    /// Allocates at least `bytes` bytes of zeroed working memory.
    pub fn with_size(bytes: usize) -> Result<Self, CodecError> {
        let n_words = bytes.div_ceil(core::mem::size_of::<u32>());
        let mut words = Vec::new();
        words
            .try_reserve_exact(n_words)
            .map_err(|_| CodecError::AllocationFailure { requested: bytes })?;
        words.resize(n_words, 0);
        Ok(WorkingMemory { words })
    }

    /// Size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len() * core::mem::size_of::<u32>()
    }

    #[inline]
    pub fn as_words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }
}

/// Allocates a zeroed output buffer of exactly `len` bytes.
pub(crate) fn alloc_output(len: usize) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| CodecError::AllocationFailure { requested: len })?;
    out.resize(len, 0);
    Ok(out)
}
