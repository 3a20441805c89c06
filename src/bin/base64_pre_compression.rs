use block_compression_benchmark::benchmark::run_scenario;
use block_compression_benchmark::benchmark_utils::init_logging;
use block_compression_benchmark::compressor::block::BlockCodec;
use block_compression_benchmark::compressor::gzip::GzipCompressor;
use block_compression_benchmark::compressor::raw::RawCompressor;
use block_compression_benchmark::compressor::Compressor;
use block_compression_benchmark::config::RECORD_COUNT;
use block_compression_benchmark::dataset::BlockPattern;
use block_compression_benchmark::encoding;
use std::error::Error;

/// Does compressing each Base64 record on the client still pay off once the
/// whole stream is gzipped?
fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let encodings = vec![
        encoding::binary(),
        encoding::base64(),
        encoding::base64_then(BlockCodec::Snappy),
        encoding::base64_then(BlockCodec::Lz4),
    ];
    let compressors: Vec<Box<dyn Compressor>> = vec![
        Box::new(RawCompressor::new()),
        Box::new(GzipCompressor::new()),
    ];

    run_scenario(
        "monotonic, pre-compressed base64",
        &encodings,
        &compressors,
        |n| BlockPattern::Monotonic.records(n),
        RECORD_COUNT,
    )?;
    Ok(())
}
