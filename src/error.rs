//! # Codec Error Handling
//!
//! This module defines the CodecError enum, which represents the input
//! validation failures that can occur in the mbus-codec crate.

use thiserror::Error;

/// Represents the different error types that can occur in the codec functions.
///
/// Every variant is a caller input error. None of them are transient, so there
/// is nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Indicates a hex string with an odd number of digits.
    #[error("Odd number of hex digits: {0}")]
    OddHexLength(usize),

    /// Indicates a non-hex character in strict hex decoding.
    #[error("Invalid hex character: {0:?}")]
    InvalidHexCharacter(char),

    /// Indicates a manufacturer id that is not exactly 3 characters long.
    #[error("Manufacturer name must be exactly 3 letters, got {0}")]
    InvalidManufacturerLength(usize),

    /// Indicates a manufacturer id character outside A-Z in strict parsing.
    #[error("Invalid manufacturer character: {0:?}")]
    InvalidManufacturerCharacter(char),
}
