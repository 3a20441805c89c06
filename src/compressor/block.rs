//! Single-buffer LZ4 and Snappy codecs.
//!
//! Used whole-corpus by the block compressors and per record by composed
//! encodings. Both produce raw blocks: LZ4 without a size prefix, Snappy in
//! its raw (unframed) format.

use crate::error::{BenchError, Result};
use snap::raw::{Decoder, Encoder};
use std::io;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCodec {
    Lz4,
    Snappy,
}

impl BlockCodec {
    pub fn name(&self) -> &str {
        match self {
            BlockCodec::Lz4 => "LZ4",
            BlockCodec::Snappy => "Snappy",
        }
    }

    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            BlockCodec::Lz4 => Ok(lz4::block::compress(data, None, false)?),
            BlockCodec::Snappy => Ok(Encoder::new().compress_vec(data)?),
        }
    }

    /// Reverses [`compress`](Self::compress).
    ///
    /// LZ4 blocks carry no length, so the caller supplies the original size.
    /// Snappy stores it in its header and ignores `uncompressed_len`.
    pub fn decompress(&self, data: &[u8], uncompressed_len: usize) -> Result<Vec<u8>> {
        match self {
            BlockCodec::Lz4 => {
                let size = i32::try_from(uncompressed_len).map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidInput, "LZ4 block larger than 2 GiB")
                })?;
                Ok(lz4::block::decompress(data, Some(size))?)
            }
            BlockCodec::Snappy => Ok(Decoder::new().decompress_vec(data)?),
        }
    }
}

/// Concatenates all records into a buffer of exactly `capacity` bytes.
///
/// Fails with [`BenchError::CapacityExceeded`] as soon as a record does not fit;
/// the buffer never grows past its initial allocation.
pub(crate) fn fill_buffer(
    compressor: &str,
    capacity: usize,
    records: &mut dyn Iterator<Item = Result<Vec<u8>>>,
) -> Result<Vec<u8>> {
    let mut buffer: Vec<u8> = Vec::with_capacity(capacity);
    for record in records {
        let record = record?;
        let required = buffer.len() + record.len();
        if required > capacity {
            return Err(BenchError::CapacityExceeded {
                compressor: compressor.to_string(),
                capacity,
                required,
            });
        }
        buffer.extend_from_slice(&record);
    }
    debug!(compressor, bytes = buffer.len(), capacity, "working buffer filled");
    Ok(buffer)
}

/// Fills the working buffer and compresses it once with `codec`.
pub(crate) fn measure_block(
    codec: BlockCodec,
    capacity: usize,
    records: &mut dyn Iterator<Item = Result<Vec<u8>>>,
) -> Result<usize> {
    let buffer = fill_buffer(codec.name(), capacity, records)?;
    if buffer.is_empty() {
        return Ok(0);
    }
    let compressed = codec.compress(&buffer)?;
    debug!(
        compressor = codec.name(),
        uncompressed = buffer.len(),
        compressed = compressed.len(),
        "block compressed"
    );
    Ok(compressed.len())
}
