use block_compression_benchmark::benchmark::run_scenario;
use block_compression_benchmark::benchmark_utils::init_logging;
use block_compression_benchmark::compressor::block::BlockCodec;
use block_compression_benchmark::compressor::gzip::GzipCompressor;
use block_compression_benchmark::compressor::lz4::LZ4Compressor;
use block_compression_benchmark::compressor::raw::RawCompressor;
use block_compression_benchmark::compressor::snappy::SnappyCompressor;
use block_compression_benchmark::compressor::Compressor;
use block_compression_benchmark::config::{BLOCK_BUFFER_CAPACITY, RECORD_COUNT};
use block_compression_benchmark::dataset::BlockPattern;
use block_compression_benchmark::encoding;
use std::error::Error;

/// Per-record compression followed by a second, whole-corpus compression.
fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let pre_compressions = vec![
        encoding::uncompressed(),
        encoding::pre_compressed(BlockCodec::Snappy),
        encoding::pre_compressed(BlockCodec::Lz4),
    ];
    let compressors: Vec<Box<dyn Compressor>> = vec![
        Box::new(RawCompressor::new()),
        Box::new(LZ4Compressor::new(BLOCK_BUFFER_CAPACITY)),
        Box::new(SnappyCompressor::new(BLOCK_BUFFER_CAPACITY)),
        Box::new(GzipCompressor::new()),
    ];

    run_scenario(
        "monotonic, composed compression",
        &pre_compressions,
        &compressors,
        |n| BlockPattern::Monotonic.records(n),
        RECORD_COUNT,
    )?;
    Ok(())
}
