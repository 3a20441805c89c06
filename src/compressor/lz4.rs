use crate::compressor::block::{measure_block, BlockCodec};
use crate::compressor::Compressor;
use crate::error::Result;

/// Compresses the whole corpus as one LZ4 block held in a fixed-size buffer.
#[derive(Debug, Clone, Copy)]
pub struct LZ4Compressor {
    capacity: usize, // Working buffer size in bytes, never grown
}

impl LZ4Compressor {
    /// Creates a compressor whose working buffer holds at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        LZ4Compressor { capacity }
    }
}

impl Compressor for LZ4Compressor {
    fn measure(&self, records: &mut dyn Iterator<Item = Result<Vec<u8>>>) -> Result<usize> {
        measure_block(BlockCodec::Lz4, self.capacity, records)
    }

    fn name(&self) -> &str {
        "LZ4"
    }
}
