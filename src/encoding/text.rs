//! Encodings of UUID records, binary and as character data.
//!
//! Text encodings render the canonical lowercase hyphenated form, 36 chars.

use super::Encoding;
use uuid::Uuid;

/// UTF-16 byte order mark, big-endian.
const UTF16_BOM: [u8; 2] = [0xFE, 0xFF];

/// 16 bytes: most significant half first, each half big-endian.
pub fn uuid_binary() -> Encoding<Uuid> {
    Encoding::new("binary", |uuid: Uuid| Ok(uuid.as_bytes().to_vec()))
}

pub fn latin1() -> Encoding<Uuid> {
    Encoding::new("ISO-8859-1", |uuid: Uuid| Ok(encode_latin1(&uuid.to_string())))
}

pub fn utf8() -> Encoding<Uuid> {
    Encoding::new("UTF-8", |uuid: Uuid| Ok(uuid.to_string().into_bytes()))
}

/// Big-endian UTF-16, always preceded by a byte order mark.
pub fn utf16() -> Encoding<Uuid> {
    Encoding::new("UTF-16", |uuid: Uuid| Ok(encode_utf16(&uuid.to_string())))
}

/// One byte per char; chars outside Latin-1 become `?`.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

pub fn encode_utf16(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(UTF16_BOM.len() + text.len() * 2);
    bytes.extend_from_slice(&UTF16_BOM);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}
