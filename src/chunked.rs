//! Splitting large inputs into independently compressed blocks.
//!
//! The boundary itself never chunks; this helper does it the way lzop does:
//!
//! 1. cut the input into `block_size` pieces (the last one may be shorter),
//! 2. compress every piece on the rayon pool,
//! 3. keep the compressed form only when it is strictly smaller, otherwise
//!    store the piece raw,
//! 4. record the Adler-32 of the uncompressed piece so the reader can tell a
//!    corrupt block from a good one.
//!
//! Blocks are independent, so any subset can be decoded in parallel too.

use rayon::prelude::*;

use crate::block::types::Method;
use crate::checksum::{adler32, ADLER32_INIT_VALUE};
use crate::codec::{self, CodecError};
use crate::config::MAX_BLOCK_SIZE;

/// One block of a chunked stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedBlock {
    /// Length of the block before compression.
    pub uncompressed_len: usize,
    /// LZO1X data, or the raw bytes when `payload.len() == uncompressed_len`.
    pub payload: Vec<u8>,
    /// Adler-32 of the uncompressed bytes.
    pub adler32: u32,
}

impl CompressedBlock {
    /// `true` when the block was kept uncompressed.
    #[inline]
    pub fn is_stored(&self) -> bool {
        self.payload.len() == self.uncompressed_len
    }
}

fn check_block_size(size: usize) -> Result<(), CodecError> {
    if size == 0 || size > MAX_BLOCK_SIZE {
        return Err(CodecError::InvalidBlockSize(size));
    }
    Ok(())
}

fn compress_one(chunk: &[u8], method: Method) -> Result<CompressedBlock, CodecError> {
    let packed = codec::compress(chunk, method)?;
    let payload = if packed.len() < chunk.len() { packed } else { chunk.to_vec() };
    Ok(CompressedBlock {
        uncompressed_len: chunk.len(),
        payload,
        adler32: adler32(ADLER32_INIT_VALUE, chunk),
    })
}

/// Compresses `input` as a sequence of `block_size` blocks, in parallel.
///
/// An empty input yields no blocks. Fails with
/// [`CodecError::InvalidBlockSize`] for a block size of zero or above
/// [`MAX_BLOCK_SIZE`]; any per-block error aborts the whole call.
pub fn compress_blocks(
    input: &[u8],
    method: Method,
    block_size: usize,
) -> Result<Vec<CompressedBlock>, CodecError> {
    check_block_size(block_size)?;

    // Collecting into a Result keeps block order and stops at the first error.
    let blocks: Vec<CompressedBlock> = input
        .par_chunks(block_size)
        .map(|chunk| compress_one(chunk, method))
        .collect::<Result<_, _>>()?;

    let stored = blocks.iter().filter(|b| b.is_stored()).count();
    log::debug!(
        "compress_blocks {}: {} bytes in {} blocks ({} stored raw)",
        method,
        input.len(),
        blocks.len(),
        stored
    );
    Ok(blocks)
}

/// Reassembles the output of [`compress_blocks`].
///
/// With `verify`, each block's Adler-32 is recomputed and a mismatch fails
/// with [`CodecError::ChecksumMismatch`]. Without it, literal corruption
/// inside a block can go unnoticed.
pub fn decompress_blocks(blocks: &[CompressedBlock], verify: bool) -> Result<Vec<u8>, CodecError> {
    for b in blocks {
        check_block_size(b.uncompressed_len)?;
        if b.payload.len() > b.uncompressed_len {
            // lzop rejects a block whose compressed form grew
            return Err(CodecError::InvalidBlockSize(b.payload.len()));
        }
    }

    let decoded: Vec<Vec<u8>> = blocks
        .par_iter()
        .enumerate()
        .map(|(idx, b)| {
            let data = if b.is_stored() {
                b.payload.clone()
            } else {
                codec::decompress(&b.payload, b.uncompressed_len)?
            };
            if verify {
                let actual = adler32(ADLER32_INIT_VALUE, &data);
                if actual != b.adler32 {
                    log::warn!("block {}: checksum mismatch", idx);
                    return Err(CodecError::ChecksumMismatch {
                        block: idx,
                        expected: b.adler32,
                        actual,
                    });
                }
            }
            Ok(data)
        })
        .collect::<Result<_, _>>()?;

    Ok(decoded.concat())
}
