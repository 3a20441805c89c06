use crate::benchmark_utils::{print_benchmark_results, ResultRow, CSV_HEADER};
use crate::compressor::Compressor;
use crate::encoding::Encoding;
use crate::error::{BenchError, Result};
use std::collections::HashSet;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

/// Measures every (compressor, encoding) pair over the records of `generator(count)`.
///
/// Writes the CSV header and then one line per pair to `out`, compressors in the
/// outer loop and encodings in the inner one. The generator is restarted for
/// every pair. The first error stops the run; encodings sharing a name are
/// rejected before anything is written.
pub fn benchmark<T, G, I, W>(
    encodings: &[Encoding<T>],
    compressors: &[Box<dyn Compressor>],
    generator: G,
    count: usize,
    out: &mut W,
) -> Result<Vec<ResultRow>>
where
    T: 'static,
    G: Fn(usize) -> I,
    I: Iterator<Item = T>,
    W: Write,
{
    let mut names = HashSet::with_capacity(encodings.len());
    for encoding in encodings {
        if !names.insert(encoding.name()) {
            return Err(BenchError::DuplicateEncoding(encoding.name().to_string()));
        }
    }

    writeln!(out, "{}", CSV_HEADER)?;
    let mut results = Vec::with_capacity(encodings.len() * compressors.len());

    for compressor in compressors {
        for encoding in encodings {
            let start = Instant::now();
            let mut records = generator(count).map(|record| encoding.encode(record));
            let compressed_bytes = compressor.measure(&mut records)?;

            let result = ResultRow {
                compressor_name: compressor.name().to_string(),
                encoding_name: encoding.name().to_string(),
                count,
                compressed_bytes,
            };
            writeln!(out, "{}", result.to_csv())?;
            out.flush()?;

            info!(
                compressor = compressor.name(),
                encoding = encoding.name(),
                count,
                compressed_bytes,
                elapsed_secs = start.elapsed().as_secs_f64(),
                "pair measured"
            );
            results.push(result);
        }
    }

    Ok(results)
}

/// Runs [`benchmark`] with the report on stdout and a summary table on stderr.
pub fn run_scenario<T, G, I>(
    title: &str,
    encodings: &[Encoding<T>],
    compressors: &[Box<dyn Compressor>],
    generator: G,
    count: usize,
) -> Result<Vec<ResultRow>>
where
    T: 'static,
    G: Fn(usize) -> I,
    I: Iterator<Item = T>,
{
    info!(scenario = title, count, "starting benchmark");
    let start = Instant::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let results = benchmark(encodings, compressors, generator, count, &mut out)?;
    print_benchmark_results(title, &results)?;
    info!(scenario = title, elapsed_secs = start.elapsed().as_secs_f64(), "benchmark finished");
    Ok(results)
}
