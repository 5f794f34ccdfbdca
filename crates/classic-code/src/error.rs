//! Error type for building codes from text and byte sources.

use classic_code_mac_roman::MacRomanError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    #[error("code text must be 4 characters or 8 hex digits, got {0} characters")]
    InvalidLength(usize),
    #[error("character {0:?} is not representable in Mac OS Roman")]
    Unmappable(char),
    #[error("code text is not an 8-digit hexadecimal number")]
    InvalidHexDigit,
    #[error("byte source ended after {0} of 4 octets")]
    InsufficientOctets(usize),
    #[error("byte source has octets left after the fourth")]
    TrailingOctets,
}

impl From<MacRomanError> for CodeError {
    fn from(err: MacRomanError) -> Self {
        match err {
            MacRomanError::Unmappable(ch) => CodeError::Unmappable(ch),
        }
    }
}
