//! # Byte-Level Bit Utilities
//!
//! Nibble and single-bit helpers for the one-byte fields of M-Bus telegrams
//! (DIF, DIFE, VIF, VIFE, CI, status). Every function works on a single `u8`
//! and every result is truncated to 8 bits.
//!
//! ## Usage
//!
//! ```rust
//! use mbus_codec::util::bits::{get_bit, high_nibble, low_nibble, set_bit};
//!
//! // DIF 0x84: extension bit set, 32-bit integer data field
//! assert_eq!(high_nibble(0x84), 0x08);
//! assert_eq!(low_nibble(0x84), 0x04);
//! assert!(get_bit(0x84, 7));
//!
//! assert_eq!(set_bit(0x04, 7), 0x84);
//! ```
//!
//! Bit positions are expected in `0..=7`. Positions outside that range trip a
//! `debug_assert!` in debug builds; release builds treat the bit as absent.

use crate::constants::NIBBLE_MASK;

/// Get the high nibble (bits 4-7) shifted down into bits 0-3
///
/// # Examples
///
/// ```rust
/// use mbus_codec::util::bits::high_nibble;
///
/// assert_eq!(high_nibble(0xA5), 0x0A);
/// assert_eq!(high_nibble(0x0F), 0x00);
/// ```
#[inline]
pub const fn high_nibble(b: u8) -> u8 {
    mask(shift_right(b, 4), NIBBLE_MASK)
}

/// Get the low nibble (bits 0-3)
#[inline]
pub const fn low_nibble(b: u8) -> u8 {
    mask(b, NIBBLE_MASK)
}

/// Combine two nibbles into one byte, `high` in bits 4-7 and `low` in bits 0-3
///
/// Only the low four bits of each argument are used.
///
/// ```rust
/// use mbus_codec::util::bits::{combine_nibbles, high_nibble, low_nibble};
///
/// let b = 0x3C;
/// assert_eq!(combine_nibbles(high_nibble(b), low_nibble(b)), b);
/// ```
#[inline]
pub const fn combine_nibbles(high: u8, low: u8) -> u8 {
    or(shift_left(mask(high, NIBBLE_MASK), 4), mask(low, NIBBLE_MASK))
}

/// Test the bit at `position` (0 = least significant)
#[inline]
pub const fn get_bit(b: u8, position: u8) -> bool {
    debug_assert!(position < 8, "bit position out of range");
    match 1u8.checked_shl(position as u32) {
        Some(bit) => b & bit != 0,
        None => false,
    }
}

/// Force the bit at `position` to 1, leaving all other bits unchanged
#[inline]
pub const fn set_bit(b: u8, position: u8) -> u8 {
    debug_assert!(position < 8, "bit position out of range");
    match 1u8.checked_shl(position as u32) {
        Some(bit) => b | bit,
        None => b,
    }
}

/// Force the bit at `position` to 0, leaving all other bits unchanged
#[inline]
pub const fn clear_bit(b: u8, position: u8) -> u8 {
    debug_assert!(position < 8, "bit position out of range");
    match 1u8.checked_shl(position as u32) {
        Some(bit) => b & !bit,
        None => b,
    }
}

/// Bitwise AND
#[inline]
pub const fn mask(b: u8, mask_value: u8) -> u8 {
    b & mask_value
}

/// Bitwise OR
#[inline]
pub const fn or(b: u8, other: u8) -> u8 {
    b | other
}

/// Logical right shift; shifting by 8 or more places yields 0
#[inline]
pub const fn shift_right(b: u8, places: u8) -> u8 {
    match b.checked_shr(places as u32) {
        Some(v) => v,
        None => 0,
    }
}

/// Logical left shift truncated to 8 bits; shifting by 8 or more places yields 0
#[inline]
pub const fn shift_left(b: u8, places: u8) -> u8 {
    match b.checked_shl(places as u32) {
        Some(v) => v,
        None => 0,
    }
}
