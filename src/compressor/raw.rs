//! Uncompressed baseline
//!
//! Reports the plain size of the encoded data so the other compressors have
//! something to be compared against.

use crate::compressor::Compressor;
use crate::error::Result;

/// Baseline that sums record lengths without transforming anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCompressor;

impl RawCompressor {
    pub fn new() -> Self {
        RawCompressor
    }
}

impl Compressor for RawCompressor {
    fn measure(&self, records: &mut dyn Iterator<Item = Result<Vec<u8>>>) -> Result<usize> {
        let mut total = 0;
        for record in records {
            total += record?.len();
        }
        Ok(total)
    }

    fn name(&self) -> &str {
        "Uncompressed"
    }
}
