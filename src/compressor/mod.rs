pub mod block;
pub mod gzip;
pub mod lz4;
pub mod raw;
pub mod snappy;

use crate::error::Result;

/// A named strategy reducing a sequence of encoded records to a compressed size.
///
/// Implementations keep no state between calls, so one instance can measure any
/// number of (generator, encoding) combinations.
pub trait Compressor {
    /// Consumes every record in order and returns the total compressed size in bytes.
    fn measure(&self, records: &mut dyn Iterator<Item = Result<Vec<u8>>>) -> Result<usize>;

    /// Returns the name of the compressor as shown in reports.
    fn name(&self) -> &str;
}
