//! M-Bus Codec Constants
//!
//! Masks and weights shared by the byte and manufacturer codecs, based on the
//! EN 13757-3 field layouts.

/// Mask selecting the low nibble of a byte
pub const NIBBLE_MASK: u8 = 0b0000_1111;

/// DIF/DIFE/VIF/VIFE extension bit
pub const EXTENSION_BIT: u8 = 0b1000_0000;

/// Bit position of the extension bit
pub const EXTENSION_BIT_POSITION: u8 = 7;

/// Offset between an ASCII letter and its 5-bit manufacturer value ('A' = 1)
pub const MANUFACTURER_LETTER_OFFSET: i32 = 64;

/// Weight of the first manufacturer letter (32²)
pub const MANUFACTURER_FIRST_WEIGHT: i32 = 1024;

/// Weight of the second manufacturer letter
pub const MANUFACTURER_SECOND_WEIGHT: i32 = 32;

/// Number of letters in a manufacturer code
pub const MANUFACTURER_CODE_LEN: usize = 3;

/// Soft address flag in the manufacturer field
pub const MANUFACTURER_SOFT_ADDRESS_BIT: u16 = 0x8000;

/// Smallest valid packed manufacturer id (AAA)
pub const MANUFACTURER_ID_MIN: u16 = 0x0421;

/// Largest valid packed manufacturer id (ZZZ)
pub const MANUFACTURER_ID_MAX: u16 = 0x6B5A;
