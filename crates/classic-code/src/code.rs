//! The packed code value and its byte-level constructors.

use crate::swar;
use crate::CodeError;

/// A four-character code packed into a `u32`, first character in the
/// highest-order byte.
///
/// # Example
///
/// ```
/// use classic_code::ClassicCode;
///
/// let code = ClassicCode::from_octets(b'A', b'B', b'C', b'D');
/// assert_eq!(code.raw_value(), 0x4142_4344);
/// assert_eq!(code.to_octets(), *b"ABCD");
/// assert_eq!(code.to_string(), "ABCD");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ClassicCode(pub(crate) u32);

impl ClassicCode {
    /// The all-zero code.
    pub const ZERO: ClassicCode = ClassicCode(0);

    /// Number of octets in every code.
    pub const LEN: usize = 4;

    /// Wraps a raw integer.
    #[inline]
    pub const fn new(raw_value: u32) -> Self {
        ClassicCode(raw_value)
    }

    /// The raw integer.
    #[inline]
    pub const fn raw_value(self) -> u32 {
        self.0
    }

    /// Packs four octets, most significant first.
    #[inline]
    pub const fn from_octets(b0: u8, b1: u8, b2: u8, b3: u8) -> Self {
        ClassicCode(u32::from_be_bytes([b0, b1, b2, b3]))
    }

    /// Packs an ASCII byte-string literal, e.g. `ClassicCode::from_ascii(b"TEXT")`.
    #[inline]
    pub const fn from_ascii(text: &[u8; 4]) -> Self {
        ClassicCode(u32::from_be_bytes(*text))
    }

    /// A code whose four octets all equal `byte`.
    #[inline]
    pub const fn repeating(byte: u8) -> Self {
        ClassicCode(swar::repeat_byte(byte))
    }

    /// The four octets in text order.
    #[inline]
    pub const fn to_octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Takes exactly four octets from `source`.
    ///
    /// Passing `&mut iter` reads from a live iterator, so repeated calls
    /// split a longer stream into consecutive codes. With `consume_all` the
    /// source must also be exhausted after the fourth octet; one extra octet
    /// is pulled to check that. Without it, anything past the fourth octet is
    /// left unread.
    ///
    /// # Errors
    ///
    /// [`CodeError::InsufficientOctets`] if the source ends early,
    /// [`CodeError::TrailingOctets`] if `consume_all` is set and the source
    /// has more to give.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_code::ClassicCode;
    ///
    /// let mut stream = b"ABCDabcd".iter().copied();
    /// let first = ClassicCode::from_octet_source(&mut stream, false).unwrap();
    /// let second = ClassicCode::from_octet_source(&mut stream, true).unwrap();
    /// assert_eq!(first.raw_value(), 0x4142_4344);
    /// assert_eq!(second.raw_value(), 0x6162_6364);
    /// assert!(stream.next().is_none());
    /// ```
    pub fn from_octet_source<I>(source: I, consume_all: bool) -> Result<Self, CodeError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut iter = source.into_iter();
        let mut octets = [0u8; 4];
        for (filled, slot) in octets.iter_mut().enumerate() {
            *slot = iter.next().ok_or(CodeError::InsufficientOctets(filled))?;
        }
        if consume_all && iter.next().is_some() {
            return Err(CodeError::TrailingOctets);
        }
        Ok(ClassicCode::from(octets))
    }

    /// [`from_octet_source`](Self::from_octet_source) requiring the source
    /// to hold exactly four octets.
    pub fn from_octet_source_exact<I>(source: I) -> Result<Self, CodeError>
    where
        I: IntoIterator<Item = u8>,
    {
        Self::from_octet_source(source, true)
    }

    /// Whether no octet is an ASCII control code (`0..=31`) or DEL (`127`).
    #[inline]
    pub const fn is_printable(self) -> bool {
        !swar::has_byte_less_than(self.0, 0x20) && !swar::has_byte_equal_to(self.0, 0x7F)
    }
}

impl From<u32> for ClassicCode {
    fn from(raw_value: u32) -> Self {
        ClassicCode(raw_value)
    }
}

impl From<ClassicCode> for u32 {
    fn from(code: ClassicCode) -> Self {
        code.0
    }
}

impl From<[u8; 4]> for ClassicCode {
    fn from(octets: [u8; 4]) -> Self {
        ClassicCode(u32::from_be_bytes(octets))
    }
}

impl From<ClassicCode> for [u8; 4] {
    fn from(code: ClassicCode) -> Self {
        code.to_octets()
    }
}

impl TryFrom<&[u8]> for ClassicCode {
    type Error = CodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_octet_source_exact(bytes.iter().copied())
    }
}
