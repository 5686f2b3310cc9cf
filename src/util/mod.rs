//! # Utility Modules
//!
//! Byte-level helpers shared by the M-Bus codecs: bit and nibble manipulation
//! on single bytes, and hex encoding/decoding.

pub mod bits;
pub mod hex;

// Re-export commonly used functions
pub use bits::{
    clear_bit, combine_nibbles, get_bit, high_nibble, low_nibble, mask, or, set_bit, shift_left,
    shift_right,
};
pub use hex::{
    byte_to_hex_string, bytes_to_hex_string, decode_hex_strict, format_hex_compact,
    hex_string_to_bytes,
};
