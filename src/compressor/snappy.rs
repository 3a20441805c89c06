use crate::compressor::block::{measure_block, BlockCodec};
use crate::compressor::Compressor;
use crate::error::Result;

/// Compresses the whole corpus as one raw Snappy block held in a fixed-size buffer.
#[derive(Debug, Clone, Copy)]
pub struct SnappyCompressor {
    capacity: usize, // Working buffer size in bytes, never grown
}

impl SnappyCompressor {
    pub fn new(capacity: usize) -> Self {
        SnappyCompressor { capacity }
    }
}

impl Compressor for SnappyCompressor {
    fn measure(&self, records: &mut dyn Iterator<Item = Result<Vec<u8>>>) -> Result<usize> {
        measure_block(BlockCodec::Snappy, self.capacity, records)
    }

    fn name(&self) -> &str {
        "Snappy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BlockPattern;
    use crate::error::BenchError;

    #[test]
    fn measures_one_block_over_the_concatenation() {
        let records: Vec<Vec<u8>> = BlockPattern::Random.records(256).collect();
        let concatenation = records.concat();
        let expected = BlockCodec::Snappy.compress(&concatenation).unwrap().len();

        let mut input = records.into_iter().map(Ok::<_, BenchError>);
        let size = SnappyCompressor::new(1 << 20).measure(&mut input).unwrap();
        assert_eq!(size, expected);
    }

    #[test]
    fn undersized_buffer_fails() {
        let mut records = BlockPattern::Sinusoidal.records(2).map(Ok::<_, BenchError>);
        let err = SnappyCompressor::new(1024).measure(&mut records).unwrap_err();
        assert!(matches!(err, BenchError::CapacityExceeded { capacity: 1024, .. }));
    }
}
