//! Fixed parameters shared by the scenario programs.
//!
//! Scenarios take no arguments; everything that shapes a run lives here and is
//! passed explicitly into the compressors and the runner.

/// Size of one generated block record in bytes.
pub const KILOBYTE: usize = 1024;

/// Number of records generated for every scenario.
pub const RECORD_COUNT: usize = 1_000_000;

/// Working buffer for block compressors over kilobyte records (1.5 GiB).
///
/// One million Base64-encoded kilobytes take 1368 MB, which still fits.
pub const BLOCK_BUFFER_CAPACITY: usize = 1536 * 1024 * 1024;

/// Working buffer for block compressors over UUID records (256 MiB).
pub const UUID_BUFFER_CAPACITY: usize = 256 * 1024 * 1024;
