use crate::compressor::Compressor;
use crate::error::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tracing::debug;

/// Size of a finished GZIP stream with no payload: 10-byte header, 2-byte empty
/// final deflate block and 8-byte CRC32/length trailer.
pub const GZIP_EMPTY_STREAM_BYTES: usize = 20;

/// Streams every record through one GZIP encoder at the default level.
#[derive(Debug, Default, Clone, Copy)]
pub struct GzipCompressor;

impl GzipCompressor {
    pub fn new() -> Self {
        GzipCompressor
    }

    /// Writes the records in order into a single GZIP stream and returns the finished stream.
    pub fn compress(&self, records: &mut dyn Iterator<Item = Result<Vec<u8>>>) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut written = 0;
        for record in records {
            let record = record?;
            encoder.write_all(&record)?;
            written += record.len();
        }
        let compressed = encoder.finish()?;
        debug!(uncompressed = written, compressed = compressed.len(), "gzip stream finished");
        Ok(compressed)
    }
}

impl Compressor for GzipCompressor {
    fn measure(&self, records: &mut dyn Iterator<Item = Result<Vec<u8>>>) -> Result<usize> {
        Ok(self.compress(records)?.len())
    }

    fn name(&self) -> &str {
        "GZIP"
    }
}
