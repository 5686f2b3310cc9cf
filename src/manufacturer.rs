//! M-Bus Manufacturer Code Conversion
//!
//! The manufacturer field of an M-Bus or wM-Bus header packs a 3-letter
//! FLAG Association code into 16 bits. Each letter is mapped to 1..=26
//! (`'A'` = 1) and weighted by 32², 32 and 1:
//!
//! ```text
//! id = (char1 - 64) * 1024 + (char2 - 64) * 32 + (char3 - 64)
//! ```
//!
//! Valid range: 0x0421 (AAA) to 0x6B5A (ZZZ). Bit 15 is not part of the code;
//! EN 13757-3 uses it to flag a locally unique ("soft") address.
//!
//! Two APIs are provided:
//!
//! - [`to_manufacturer_code`] / [`to_manufacturer_name`] follow the formula
//!   literally. Only the length of the input is checked, so existing callers
//!   that rely on arithmetic results for odd input keep working.
//! - [`ManufacturerCode`] validates its input and is what new code should use.
//!
//! ## Usage Example
//!
//! ```rust
//! use mbus_codec::manufacturer::{to_manufacturer_code, to_manufacturer_name, ManufacturerCode};
//!
//! let id = to_manufacturer_code("ELV").unwrap(); // 0x1596
//! assert_eq!(to_manufacturer_name(id), "ELV");
//!
//! let code: ManufacturerCode = "kam".parse().unwrap();
//! assert_eq!(code.id(), 0x2C2D);
//! assert_eq!(code.to_string(), "KAM");
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    EXTENSION_BIT, MANUFACTURER_CODE_LEN, MANUFACTURER_FIRST_WEIGHT, MANUFACTURER_ID_MAX,
    MANUFACTURER_ID_MIN, MANUFACTURER_LETTER_OFFSET, MANUFACTURER_SECOND_WEIGHT,
    MANUFACTURER_SOFT_ADDRESS_BIT,
};
use crate::error::CodecError;
use crate::util::bits::mask;

/// Pack a 3-character manufacturer code into its 16-bit id
///
/// Characters are not validated. Anything other than `[A-Z]` still produces
/// the value of the formula, narrowed to 16 bits with two's-complement
/// truncation.
///
/// # Errors
/// * `CodecError::InvalidManufacturerLength` - input is not exactly 3 characters
///
/// # Examples
/// ```rust
/// use mbus_codec::manufacturer::to_manufacturer_code;
///
/// assert_eq!(to_manufacturer_code("CEN").unwrap(), 0x0CAE);
/// assert!(to_manufacturer_code("AB").is_err());
/// ```
pub fn to_manufacturer_code(man_id: &str) -> Result<i16, CodecError> {
    let letters: Vec<char> = man_id.chars().collect();

    if letters.len() != MANUFACTURER_CODE_LEN {
        debug!("Rejected manufacturer id {man_id:?}: {} characters", letters.len());
        return Err(CodecError::InvalidManufacturerLength(letters.len()));
    }

    let value = |c: char| c as i32 - MANUFACTURER_LETTER_OFFSET;
    let id = value(letters[0]) * MANUFACTURER_FIRST_WEIGHT
        + value(letters[1]) * MANUFACTURER_SECOND_WEIGHT
        + value(letters[2]);

    Ok(id as i16)
}

/// Unpack a 16-bit manufacturer id into its 3-letter code
///
/// Inverse of [`to_manufacturer_code`] for every `[A-Z]{3}` input. Other
/// values decode arithmetically: division truncates toward zero and each
/// character is taken modulo 2¹⁶, with non-scalar values replaced by U+FFFD.
pub fn to_manufacturer_name(man_id: i16) -> String {
    let v = i32::from(man_id);
    [
        v / MANUFACTURER_FIRST_WEIGHT,
        (v % MANUFACTURER_FIRST_WEIGHT) / MANUFACTURER_SECOND_WEIGHT,
        v % MANUFACTURER_SECOND_WEIGHT,
    ]
    .into_iter()
    .map(|field| letter_from_field(field + MANUFACTURER_LETTER_OFFSET))
    .collect()
}

/// Unpack a manufacturer id held in a 32-bit integer
///
/// Only the low 16 bits are significant; the value is narrowed with `as i16`
/// before decoding.
pub fn to_manufacturer_name_i32(man_id: i32) -> String {
    to_manufacturer_name(man_id as i16)
}

/// Check the extension bit (bit 7) of a DIF/DIFE/VIF/VIFE byte
///
/// ```rust
/// use mbus_codec::manufacturer::has_extension_bit;
///
/// assert!(has_extension_bit(0b1000_0000));
/// assert!(!has_extension_bit(0b0111_1111));
/// ```
#[inline]
pub const fn has_extension_bit(b: u8) -> bool {
    mask(b, EXTENSION_BIT) == EXTENSION_BIT
}

fn letter_from_field(code: i32) -> char {
    char::from_u32(u32::from(code as u16)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// A validated M-Bus manufacturer id
///
/// Construct it by parsing a 3-letter code (case insensitive) or from the raw
/// 16-bit header field with [`ManufacturerCode::new`]. The raw value may carry
/// the soft address flag in bit 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManufacturerCode(u16);

impl ManufacturerCode {
    /// Wrap a raw manufacturer field as read from a telegram header
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Parse a 3-letter code, accepting only ASCII letters
    ///
    /// # Errors
    /// * `CodecError::InvalidManufacturerLength` - not exactly 3 characters
    /// * `CodecError::InvalidManufacturerCharacter` - a character outside A-Z/a-z
    pub fn parse_strict(code: &str) -> Result<Self, CodecError> {
        let count = code.chars().count();
        if count != MANUFACTURER_CODE_LEN {
            return Err(CodecError::InvalidManufacturerLength(count));
        }

        if let Some(bad) = code.chars().find(|c| !c.is_ascii_alphabetic()) {
            debug!("Rejected manufacturer id {code:?}: invalid character {bad:?}");
            return Err(CodecError::InvalidManufacturerCharacter(bad));
        }

        let id = to_manufacturer_code(&code.to_ascii_uppercase())?;
        Ok(Self(id as u16))
    }

    /// The raw 16-bit value, including the soft address flag
    pub const fn id(self) -> u16 {
        self.0
    }

    /// The 3-letter code, ignoring the soft address flag
    pub fn name(self) -> String {
        to_manufacturer_name((self.0 & !MANUFACTURER_SOFT_ADDRESS_BIT) as i16)
    }

    /// Whether every letter field decodes to A-Z
    pub fn is_valid(self) -> bool {
        let id = self.0 & !MANUFACTURER_SOFT_ADDRESS_BIT;
        let fields = [id >> 10, (id >> 5) & 0x1F, id & 0x1F];
        (MANUFACTURER_ID_MIN..=MANUFACTURER_ID_MAX).contains(&id)
            && fields.iter().all(|f| (1..=26).contains(f))
    }

    /// Whether bit 15 marks the address as locally unique
    pub const fn is_soft_address(self) -> bool {
        self.0 & MANUFACTURER_SOFT_ADDRESS_BIT != 0
    }

    /// Set or clear the soft address flag
    pub const fn with_soft_address(self, soft: bool) -> Self {
        if soft {
            Self(self.0 | MANUFACTURER_SOFT_ADDRESS_BIT)
        } else {
            Self(self.0 & !MANUFACTURER_SOFT_ADDRESS_BIT)
        }
    }
}

impl FromStr for ManufacturerCode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for ManufacturerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<ManufacturerCode> for u16 {
    fn from(code: ManufacturerCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EXTENSION_BIT_POSITION;
    use crate::util::bits::{get_bit, set_bit};

    #[test]
    fn test_standard_encoding() {
        // CEN is the example used in the M-Bus documentation
        assert_eq!(to_manufacturer_code("CEN"), Ok(0x0CAE));
        assert_eq!(to_manufacturer_code("ELV"), Ok(0x1596));
        assert_eq!(to_manufacturer_code("KAM"), Ok(0x2C2D));
        assert_eq!(to_manufacturer_code("QDS"), Ok(0x4493));
        assert_eq!(to_manufacturer_code("ZEN"), Ok(0x68AE));
    }

    #[test]
    fn test_standard_decoding() {
        assert_eq!(to_manufacturer_name(0x0CAE), "CEN");
        assert_eq!(to_manufacturer_name(0x1596), "ELV");
        assert_eq!(to_manufacturer_name(0x2C2D), "KAM");
    }

    #[test]
    fn test_boundary_conditions() {
        assert_eq!(to_manufacturer_code("AAA"), Ok(0x0421));
        assert_eq!(to_manufacturer_code("ZZZ"), Ok(0x6B5A));
        assert_eq!(to_manufacturer_name(0x0421), "AAA");
        assert_eq!(to_manufacturer_name(0x6B5A), "ZZZ");
    }

    #[test]
    fn test_length_is_the_only_check() {
        assert_eq!(to_manufacturer_code(""), Err(CodecError::InvalidManufacturerLength(0)));
        assert_eq!(to_manufacturer_code("AB"), Err(CodecError::InvalidManufacturerLength(2)));
        assert_eq!(to_manufacturer_code("ABCD"), Err(CodecError::InvalidManufacturerLength(4)));

        // '@' is 64 and maps to field value 0
        assert_eq!(to_manufacturer_code("@@@"), Ok(0));
        // '1' is 49, below the offset
        assert_eq!(to_manufacturer_code("11A"), Ok(-15 * 1024 - 15 * 32 + 1));
    }

    #[test]
    fn test_narrowing_wraps() {
        // Lowercase letters overflow the 15-bit range and wrap into negatives
        let raw = 33 * 1024 + 34 * 32 + 35;
        assert_eq!(to_manufacturer_code("abc"), Ok(raw as i16));
        assert!(to_manufacturer_code("abc").unwrap() < 0);
    }

    #[test]
    fn test_name_from_i32_truncates() {
        assert_eq!(to_manufacturer_name_i32(0x1596), "ELV");
        assert_eq!(to_manufacturer_name_i32(0x0001_1596), "ELV");
        assert_eq!(to_manufacturer_name_i32(-1), to_manufacturer_name(-1));
    }

    #[test]
    fn test_negative_id_decodes_arithmetically() {
        // -1 / 1024 == 0, -1 % 1024 / 32 == 0, -1 % 32 == -1
        assert_eq!(to_manufacturer_name(-1), "@@?");
    }

    #[test]
    fn test_extension_bit_matches_get_bit() {
        for b in 0..=u8::MAX {
            assert_eq!(has_extension_bit(b), get_bit(b, EXTENSION_BIT_POSITION));
        }
        assert_eq!(set_bit(0x00, EXTENSION_BIT_POSITION), EXTENSION_BIT);
        assert!(has_extension_bit(0x80));
        assert!(has_extension_bit(0xFF));
        assert!(!has_extension_bit(0x7F));
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("QDS".parse::<ManufacturerCode>().unwrap().id(), 0x4493);
        assert_eq!("qds".parse::<ManufacturerCode>().unwrap().id(), 0x4493);
        assert_eq!(
            "A1B".parse::<ManufacturerCode>(),
            Err(CodecError::InvalidManufacturerCharacter('1'))
        );
        assert_eq!(
            "ABCD".parse::<ManufacturerCode>(),
            Err(CodecError::InvalidManufacturerLength(4))
        );
        assert_eq!(
            "A-B".parse::<ManufacturerCode>(),
            Err(CodecError::InvalidManufacturerCharacter('-'))
        );
    }

    #[test]
    fn test_soft_address() {
        let code = ManufacturerCode::new(0x0CAE);
        assert!(!code.is_soft_address());

        let soft = code.with_soft_address(true);
        assert_eq!(soft.id(), 0x8CAE);
        assert!(soft.is_soft_address());
        assert_eq!(soft.name(), "CEN");
        assert_eq!(soft.with_soft_address(false), code);
    }

    #[test]
    fn test_validity() {
        assert!(ManufacturerCode::new(0x0421).is_valid());
        assert!(ManufacturerCode::new(0x6B5A).is_valid());
        assert!(ManufacturerCode::new(0x8CAE).is_valid());
        assert!(!ManufacturerCode::new(0x0000).is_valid());
        assert!(!ManufacturerCode::new(0x0420).is_valid());
        assert!(!ManufacturerCode::new(0x6B5B).is_valid());
        // B, A, field 27
        assert!(!ManufacturerCode::new((2 << 10) | (1 << 5) | 27).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(ManufacturerCode::new(0x2C2D).to_string(), "KAM");
        assert_eq!(u16::from(ManufacturerCode::new(0x2C2D)), 0x2C2D);
    }
}
