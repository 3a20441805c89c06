use thiserror::Error;

/// Errors that abort a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The fixed working buffer of a block compressor is too small for the data fed to it.
    #[error("{compressor} working buffer too small: capacity {capacity} bytes, need at least {required}")]
    CapacityExceeded {
        compressor: String,
        capacity: usize,
        required: usize,
    },

    /// Two encodings of one run carry the same name, so their rows could not be told apart.
    #[error("encoding name {0:?} is used more than once in the same run")]
    DuplicateEncoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snappy codec failed: {0}")]
    Snappy(#[from] snap::Error),

    #[error("invalid Base64 input: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
