//! Mac OS Roman, the single-byte character set behind classic four-character
//! codes.
//!
//! The mapping is total over all 256 byte values: `0x00..=0x7F` is ASCII and
//! `0x80..=0xFF` is the fixed extended set in [`DECODE_TABLE`]. Decoding can
//! therefore never fail, while encoding fails for any character outside the
//! repertoire.
//!
//! # Example
//!
//! ```
//! use classic_code_mac_roman::{decode, encode};
//!
//! let bytes = encode("caf\u{e9}").unwrap();
//! assert_eq!(bytes, vec![b'c', b'a', b'f', 0x8E]);
//! assert_eq!(decode(&bytes), "caf\u{e9}");
//! assert!(encode("\u{65E5}").is_err());
//! ```

mod constants;

pub use constants::{DECODE_TABLE, HIGH_HALF};

use thiserror::Error;

/// Error type for Mac OS Roman encoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MacRomanError {
    #[error("character {0:?} is not representable in Mac OS Roman")]
    Unmappable(char),
}

/// Decodes one byte to its character.
#[inline]
pub fn decode_byte(byte: u8) -> char {
    if byte < HIGH_HALF {
        byte as char
    } else {
        DECODE_TABLE[(byte - HIGH_HALF) as usize]
    }
}

/// Encodes one character to its byte.
///
/// # Errors
///
/// Returns [`MacRomanError::Unmappable`] if `ch` has no Mac OS Roman byte.
pub fn encode_char(ch: char) -> Result<u8, MacRomanError> {
    if ch.is_ascii() {
        return Ok(ch as u8);
    }
    DECODE_TABLE
        .iter()
        .position(|&c| c == ch)
        .map(|i| HIGH_HALF + i as u8)
        .ok_or(MacRomanError::Unmappable(ch))
}

/// Decodes a byte slice to a string.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(decode_byte).collect()
}

/// Encodes a string to bytes, one byte per character.
///
/// # Errors
///
/// Fails on the first character outside the repertoire.
pub fn encode(text: &str) -> Result<Vec<u8>, MacRomanError> {
    text.chars().map(encode_char).collect()
}
