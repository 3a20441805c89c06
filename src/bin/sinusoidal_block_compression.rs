use block_compression_benchmark::benchmark::run_scenario;
use block_compression_benchmark::benchmark_utils::init_logging;
use block_compression_benchmark::compressor::gzip::GzipCompressor;
use block_compression_benchmark::compressor::lz4::LZ4Compressor;
use block_compression_benchmark::compressor::raw::RawCompressor;
use block_compression_benchmark::compressor::snappy::SnappyCompressor;
use block_compression_benchmark::compressor::Compressor;
use block_compression_benchmark::config::{BLOCK_BUFFER_CAPACITY, RECORD_COUNT};
use block_compression_benchmark::dataset::BlockPattern;
use block_compression_benchmark::encoding;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let encodings = vec![encoding::binary(), encoding::base64()];
    let compressors: Vec<Box<dyn Compressor>> = vec![
        Box::new(RawCompressor::new()),
        Box::new(GzipCompressor::new()),
        Box::new(LZ4Compressor::new(BLOCK_BUFFER_CAPACITY)),
        Box::new(SnappyCompressor::new(BLOCK_BUFFER_CAPACITY)),
    ];

    let pattern = BlockPattern::Sinusoidal;
    run_scenario(pattern.name(), &encodings, &compressors, |n| pattern.records(n), RECORD_COUNT)?;
    Ok(())
}
