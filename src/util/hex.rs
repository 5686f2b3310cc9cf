//! # Hex Encoding/Decoding Utilities
//!
//! Conversion between raw bytes and uppercase hexadecimal text, as used for
//! telegram dumps, AES keys and test frames.
//!
//! ## Usage
//!
//! ```rust
//! use mbus_codec::util::hex::{bytes_to_hex_string, hex_string_to_bytes};
//!
//! let data = hex_string_to_bytes("68313168").unwrap();
//! assert_eq!(data, vec![0x68, 0x31, 0x31, 0x68]);
//! assert_eq!(bytes_to_hex_string(&data), "68313168");
//! ```
//!
//! [`hex_string_to_bytes`] only rejects odd-length input; other characters are
//! mapped arithmetically and never fail. Use [`decode_hex_strict`] when the
//! input comes from an untrusted source.

use log::debug;

use crate::error::CodecError;
use crate::util::bits::{high_nibble, low_nibble};

/// Decode a hex string into bytes
///
/// Input is case insensitive. Each pair of characters forms one byte, the
/// first character giving the high nibble.
///
/// # Errors
/// * `CodecError::OddHexLength` - the string has an odd number of characters
///
/// # Examples
/// ```rust
/// use mbus_codec::util::hex::hex_string_to_bytes;
///
/// assert_eq!(hex_string_to_bytes("0aFF").unwrap(), vec![0x0A, 0xFF]);
/// assert!(hex_string_to_bytes("").unwrap().is_empty());
/// assert!(hex_string_to_bytes("A").is_err());
/// ```
pub fn hex_string_to_bytes(hex_str: &str) -> Result<Vec<u8>, CodecError> {
    // ASCII folding keeps one output character per input character
    let digits: Vec<char> = hex_str.chars().map(|c| c.to_ascii_uppercase()).collect();

    if digits.len() % 2 == 1 {
        debug!("Rejected hex string with {} digits", digits.len());
        return Err(CodecError::OddHexLength(digits.len()));
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| {
            let value = (hex_digit_value(pair[0]) << 4).wrapping_add(hex_digit_value(pair[1]));
            value as u8
        })
        .collect())
}

/// Decode a hex string, rejecting anything that is not a hex digit
///
/// # Errors
/// * `CodecError::OddHexLength` - odd number of characters
/// * `CodecError::InvalidHexCharacter` - a character outside `[0-9A-Fa-f]`
pub fn decode_hex_strict(hex_str: &str) -> Result<Vec<u8>, CodecError> {
    if let Some(bad) = hex_str.chars().find(|c| !c.is_ascii_hexdigit()) {
        debug!("Strict hex decoding failed: invalid character {bad:?}");
        return Err(CodecError::InvalidHexCharacter(bad));
    }

    hex::decode(hex_str).map_err(|e| {
        debug!("Strict hex decoding failed: {e}");
        match e {
            hex::FromHexError::InvalidHexCharacter { c, .. } => CodecError::InvalidHexCharacter(c),
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                CodecError::OddHexLength(hex_str.len())
            }
        }
    })
}

/// Format one byte as two uppercase hex digits
///
/// ```rust
/// use mbus_codec::util::hex::byte_to_hex_string;
///
/// assert_eq!(byte_to_hex_string(0x0A), "0A");
/// ```
pub fn byte_to_hex_string(b: u8) -> String {
    format!("{b:02X}")
}

/// Format bytes as a contiguous uppercase hex string
pub fn bytes_to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(nibble_to_hex_char(high_nibble(b)));
        out.push(nibble_to_hex_char(low_nibble(b)));
    }
    out
}

/// Format bytes for compact display in logs, e.g. "68 31 31 68"
pub fn format_hex_compact(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| byte_to_hex_string(b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a nibble in `0..=15` to its uppercase ASCII hex digit
#[inline]
pub(crate) fn nibble_to_hex_char(nibble: u8) -> char {
    if nibble < 10 {
        (b'0' + nibble) as char
    } else {
        (b'A' + (nibble - 10)) as char
    }
}

// Expects uppercase input; '0'..='9' and 'A'..='F' map to 0..=15.
#[inline]
fn hex_digit_value(c: char) -> i32 {
    let val = c as i32;
    val - if val < 58 { 48 } else { 55 }
}
