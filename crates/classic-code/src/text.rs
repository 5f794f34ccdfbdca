//! Display form (four Mac OS Roman characters) and debug form (eight
//! uppercase hex digits), plus the parser that accepts either.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use classic_code_mac_roman as mac_roman;

use crate::{ClassicCode, CodeError};

impl ClassicCode {
    /// The four octets decoded as Mac OS Roman characters.
    ///
    /// Every byte value has a character, so this never fails.
    pub fn to_display_string(self) -> String {
        self.to_string()
    }

    /// The raw integer as eight zero-padded uppercase hex digits.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_code::ClassicCode;
    ///
    /// assert_eq!(ClassicCode::ZERO.to_debug_string(), "00000000");
    /// assert_eq!(ClassicCode::new(0xbeef).to_debug_string(), "0000BEEF");
    /// ```
    pub fn to_debug_string(self) -> String {
        format!("{:08X}", self.0)
    }

    /// Parses either text form, chosen purely by length in characters.
    ///
    /// Four characters are encoded as Mac OS Roman; eight characters must be
    /// hex digits. Anything else is rejected, including four hex digits,
    /// which are read as characters.
    ///
    /// # Errors
    ///
    /// [`CodeError::InvalidLength`] for any length other than 4 or 8,
    /// [`CodeError::Unmappable`] for a character outside Mac OS Roman,
    /// [`CodeError::InvalidHexDigit`] for a non-hex eight-character string.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_code::ClassicCode;
    ///
    /// assert_eq!(ClassicCode::parse("ABCD").unwrap().raw_value(), 0x4142_4344);
    /// assert_eq!(ClassicCode::parse("41624344").unwrap().raw_value(), 0x4162_4344);
    /// assert!(ClassicCode::parse("Abov3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        match text.chars().count() {
            4 => {
                let mut octets = [0u8; 4];
                for (slot, ch) in octets.iter_mut().zip(text.chars()) {
                    *slot = mac_roman::encode_char(ch)?;
                }
                Ok(ClassicCode::from(octets))
            }
            8 => {
                // from_str_radix tolerates a leading sign; the digit check does not.
                if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(CodeError::InvalidHexDigit);
                }
                u32::from_str_radix(text, 16)
                    .map(ClassicCode)
                    .map_err(|_| CodeError::InvalidHexDigit)
            }
            n => Err(CodeError::InvalidLength(n)),
        }
    }
}

impl FromStr for ClassicCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassicCode::parse(s)
    }
}

impl fmt::Display for ClassicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_octets() {
            f.write_char(mac_roman::decode_byte(byte))?;
        }
        Ok(())
    }
}

impl fmt::Debug for ClassicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassicCode({:08X})", self.0)
    }
}

impl fmt::UpperHex for ClassicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for ClassicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
