use block_compression_benchmark::compressor::block::BlockCodec;
use block_compression_benchmark::compressor::gzip::GzipCompressor;
use block_compression_benchmark::compressor::raw::RawCompressor;
use block_compression_benchmark::compressor::Compressor;
use block_compression_benchmark::dataset::BlockPattern;
use block_compression_benchmark::encoding::{self, unbase64};
use flate2::read::GzDecoder;
use std::io::Read;

const COUNT: usize = 100_000;

/// Panics with the first differing byte range when `actual` and `expected` differ.
fn assert_same_bytes(expected: &[u8], actual: &[u8], context: &str) {
    if expected == actual {
        return;
    }
    let first = expected
        .iter()
        .zip(actual.iter())
        .position(|(a, b)| a != b)
        .unwrap_or(expected.len().min(actual.len()));
    let last_expected = expected.len().min(first + 16);
    let last_actual = actual.len().min(first + 16);
    panic!(
        "{}: bytes differ from offset {} (expected len {}, actual len {}): expected {:?}, actual {:?}",
        context,
        first,
        expected.len(),
        actual.len(),
        &expected[first..last_expected],
        &actual[first..last_actual],
    );
}

#[test]
fn composed_encodings_recover_every_record() {
    for codec in [BlockCodec::Snappy, BlockCodec::Lz4] {
        let composed = encoding::base64_then(codec);
        let base64 = encoding::base64();
        for (i, kb) in BlockPattern::Monotonic.records(COUNT).enumerate() {
            let expected = base64.encode(kb.clone()).unwrap();
            let compressed = composed.encode(kb.clone()).unwrap();
            let restored = codec.decompress(&compressed, expected.len()).unwrap();
            assert_same_bytes(&expected, &restored, &format!("{} record {}", composed.name(), i));
            assert_same_bytes(&kb, &unbase64(&restored).unwrap(), &format!("{} record {} decoded", composed.name(), i));
        }
    }
}

#[test]
fn gzip_stream_of_snappy_base64_splits_back_into_records() {
    let composed = encoding::base64_then(BlockCodec::Snappy);
    let mut records = BlockPattern::Monotonic.records(COUNT).map(|kb| composed.encode(kb));
    let gzipped = GzipCompressor::new().compress(&mut records).unwrap();

    let mut ungzipped = Vec::new();
    GzDecoder::new(&gzipped[..]).read_to_end(&mut ungzipped).unwrap();

    let mut offset = 0;
    for (i, kb) in BlockPattern::Monotonic.records(COUNT).enumerate() {
        let encoded = composed.encode(kb).unwrap();
        let end = offset + encoded.len();
        assert!(end <= ungzipped.len(), "stream ended before record {}", i);
        let slice = &ungzipped[offset..end];
        assert_same_bytes(&encoded, slice, &format!("record {}", i));

        let expected = unbase64(&BlockCodec::Snappy.decompress(&encoded, 0).unwrap()).unwrap();
        let actual = unbase64(&BlockCodec::Snappy.decompress(slice, 0).unwrap()).unwrap();
        assert_same_bytes(&expected, &actual, &format!("record {} reverted", i));
        offset = end;
    }
    assert_eq!(offset, ungzipped.len());
}

#[test]
fn uncompressed_is_sum_of_encoded_lengths() {
    let encodings = vec![
        encoding::binary(),
        encoding::base64(),
        encoding::base64_then(BlockCodec::Lz4),
        encoding::pre_compressed(BlockCodec::Snappy),
    ];
    for encoding in &encodings {
        let expected: usize = BlockPattern::Sinusoidal
            .records(1_000)
            .map(|kb| encoding.encode(kb).unwrap().len())
            .sum();
        let mut records = BlockPattern::Sinusoidal.records(1_000).map(|kb| encoding.encode(kb));
        let measured = RawCompressor::new().measure(&mut records).unwrap();
        assert_eq!(measured, expected, "encoding {}", encoding.name());
    }
}

#[test]
fn random_generator_is_not_repeatable() {
    let first: Vec<Vec<u8>> = BlockPattern::Random.records(100).collect();
    let second: Vec<Vec<u8>> = BlockPattern::Random.records(100).collect();
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}
