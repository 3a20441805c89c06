use prettytable::{row, Table};
use std::io;
use tracing_subscriber::EnvFilter;

/// Header of the CSV report, one column per [`ResultRow`] field.
pub const CSV_HEADER: &str = "Compression,Encoding,Count,Compressed Size (MB)";

/// One measured (compressor, encoding) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub compressor_name: String,
    pub encoding_name: String,
    pub count: usize,
    pub compressed_bytes: usize,
}

impl ResultRow {
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.compressed_bytes)
    }

    /// Size in MB rounded to 2 decimals, ties going up.
    pub fn rounded_size_mb(&self) -> f64 {
        round_half_up(self.size_mb())
    }

    /// Formats the row as `<compressor>,<encoding>,<count>,<MB with 2 decimals>`.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{:.2}",
            self.compressor_name,
            self.encoding_name,
            self.count,
            self.rounded_size_mb()
        )
    }
}

pub fn bytes_to_mb(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Rounds to 2 decimals with ties away from zero; `{:.2}` alone rounds ties to even.
fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Prints results as a table on stderr, keeping stdout for the CSV report.
///
/// The ratio column compares each row with the `Uncompressed` row of the same
/// encoding, when the run measured one.
pub fn print_benchmark_results(title: &str, results: &[ResultRow]) -> io::Result<()> {
    let mut table = Table::new();
    table.add_row(row![
        "Compression",
        "Encoding",
        "Count",
        "Compressed Size (MB)",
        "Ratio"
    ]);

    for result in results {
        let baseline = results
            .iter()
            .find(|r| r.compressor_name == "Uncompressed" && r.encoding_name == result.encoding_name)
            .map(|r| r.compressed_bytes);
        let ratio = match baseline {
            Some(raw) if result.compressed_bytes > 0 => {
                format!("{:.3}", raw as f64 / result.compressed_bytes as f64)
            }
            _ => "-".to_string(),
        };
        table.add_row(row![
            result.compressor_name,
            result.encoding_name,
            result.count,
            format!("{:.2}", result.rounded_size_mb()),
            ratio
        ]);
    }

    let mut stderr = io::stderr();
    eprintln!("\nResults for {}", title);
    table.print(&mut stderr)?;
    Ok(())
}

/// Installs the stderr log subscriber, `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
