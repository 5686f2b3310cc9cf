//! # mbus-codec - Byte-Level Codecs for M-Bus (Meter-Bus) Wire Formats
//!
//! The mbus-codec crate provides the small, stateless building blocks that
//! M-Bus and wireless M-Bus frame parsers are built on.
//!
//! ## Features
//!
//! - Nibble extraction and single-bit get/set on header bytes
//! - Hex string to byte conversion for telegram dumps and keys
//! - Packing and unpacking of the 3-letter FLAG Association manufacturer code
//! - Extension bit detection for DIF/DIFE/VIF/VIFE chains
//!
//! All functions are pure and can be called from any thread.
//!
//! ## Usage
//!
//! ```rust
//! use mbus_codec::{
//!     bytes_to_hex_string, has_extension_bit, hex_string_to_bytes, to_manufacturer_code,
//!     to_manufacturer_name,
//! };
//!
//! let header = hex_string_to_bytes("9615").unwrap();
//! let id = i16::from_le_bytes([header[0], header[1]]);
//! assert_eq!(to_manufacturer_name(id), "ELV");
//! assert_eq!(to_manufacturer_code("ELV").unwrap(), id);
//!
//! assert!(has_extension_bit(0x84));
//! assert_eq!(bytes_to_hex_string(&header), "9615");
//! ```

pub mod constants;
pub mod error;
pub mod logging;
pub mod manufacturer;
pub mod util;

pub use crate::error::CodecError;
pub use crate::logging::{init_logger, log_info};

pub use manufacturer::{
    has_extension_bit, to_manufacturer_code, to_manufacturer_name, to_manufacturer_name_i32,
    ManufacturerCode,
};
pub use util::bits::{
    clear_bit, combine_nibbles, get_bit, high_nibble, low_nibble, mask, or, set_bit, shift_left,
    shift_right,
};
pub use util::hex::{
    byte_to_hex_string, bytes_to_hex_string, decode_hex_strict, format_hex_compact,
    hex_string_to_bytes,
};
