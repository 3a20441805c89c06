use block_compression_benchmark::benchmark::run_scenario;
use block_compression_benchmark::benchmark_utils::init_logging;
use block_compression_benchmark::compressor::gzip::GzipCompressor;
use block_compression_benchmark::compressor::lz4::LZ4Compressor;
use block_compression_benchmark::compressor::raw::RawCompressor;
use block_compression_benchmark::compressor::snappy::SnappyCompressor;
use block_compression_benchmark::compressor::Compressor;
use block_compression_benchmark::config::{RECORD_COUNT, UUID_BUFFER_CAPACITY};
use block_compression_benchmark::dataset::uuids;
use block_compression_benchmark::encoding;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let encodings = vec![encoding::uuid_binary(), encoding::latin1(), encoding::utf16()];
    let compressors: Vec<Box<dyn Compressor>> = vec![
        Box::new(LZ4Compressor::new(UUID_BUFFER_CAPACITY)),
        Box::new(RawCompressor::new()),
        Box::new(GzipCompressor::new()),
        Box::new(SnappyCompressor::new(UUID_BUFFER_CAPACITY)),
    ];

    run_scenario("random UUIDs", &encodings, &compressors, uuids, RECORD_COUNT)?;
    Ok(())
}
