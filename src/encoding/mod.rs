//! Named record encodings.
//!
//! An [`Encoding`] turns one generated record into the bytes a compressor will
//! see. Encodings are orthogonal to the benchmark's compressor axis, except for
//! composed encodings which already run a block codec on every record (client
//! side pre-compression before transport).

pub mod text;

use crate::compressor::block::BlockCodec;
use crate::error::Result;
use ::base64::{engine::general_purpose::STANDARD, Engine};

pub use text::{latin1, utf16, utf8, uuid_binary};

/// A named, pure transform from a record to bytes.
pub struct Encoding<T> {
    name: String,
    serialiser: Box<dyn Fn(T) -> Result<Vec<u8>>>,
}

impl<T: 'static> Encoding<T> {
    pub fn new<F>(name: impl Into<String>, serialiser: F) -> Self
    where
        F: Fn(T) -> Result<Vec<u8>> + 'static,
    {
        Encoding {
            name: name.into(),
            serialiser: Box::new(serialiser),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encode(&self, value: T) -> Result<Vec<u8>> {
        (self.serialiser)(value)
    }

    /// Composes this encoding with a per-record block compression pass.
    pub fn then_compress(self, name: impl Into<String>, codec: BlockCodec) -> Encoding<T> {
        let inner = self.serialiser;
        Encoding::new(name, move |value| codec.compress(&inner(value)?))
    }
}

/// The record's own bytes, untouched.
pub fn binary() -> Encoding<Vec<u8>> {
    Encoding::new("binary", Ok)
}

/// Standard-alphabet, padded Base64 of the record bytes.
pub fn base64() -> Encoding<Vec<u8>> {
    Encoding::new("base64", |bytes: Vec<u8>| Ok(STANDARD.encode(bytes).into_bytes()))
}

/// Base64 followed by `codec`, named e.g. `base64/snappy`.
pub fn base64_then(codec: BlockCodec) -> Encoding<Vec<u8>> {
    let name = format!("base64/{}", codec.name().to_lowercase());
    base64().then_compress(name, codec)
}

/// Identity named after the compressor it stands in for.
pub fn uncompressed() -> Encoding<Vec<u8>> {
    Encoding::new("Uncompressed", Ok)
}

/// The raw record compressed with `codec`, named after the codec.
pub fn pre_compressed(codec: BlockCodec) -> Encoding<Vec<u8>> {
    Encoding::new(codec.name(), move |bytes: Vec<u8>| codec.compress(&bytes))
}

/// Decodes bytes produced by [`base64`].
pub fn unbase64(encoded: &[u8]) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}
