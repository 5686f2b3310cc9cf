//! Integration tests for the bit and hex codecs.

use mbus_codec::util::bits;
use mbus_codec::{
    byte_to_hex_string, bytes_to_hex_string, decode_hex_strict, hex_string_to_bytes, CodecError,
};

#[test]
fn test_hex_examples() {
    assert_eq!(bytes_to_hex_string(&[0x0A, 0xFF]), "0AFF");
    assert_eq!(byte_to_hex_string(0x0A), "0A");
    assert_eq!(hex_string_to_bytes("").unwrap(), Vec::<u8>::new());
    assert_eq!(bytes_to_hex_string(&[]), "");
    assert_eq!(hex_string_to_bytes("A"), Err(CodecError::OddHexLength(1)));
}

#[test]
fn test_hex_case_insensitive() {
    assert_eq!(hex_string_to_bytes("ab").unwrap(), hex_string_to_bytes("AB").unwrap());
    assert_eq!(hex_string_to_bytes("ab").unwrap(), vec![0xAB]);
}

#[test]
fn test_hex_every_byte() {
    for b in 0..=u8::MAX {
        let s = byte_to_hex_string(b);
        assert_eq!(s.len(), 2);
        assert_eq!(s, bytes_to_hex_string(&[b]));
        assert_eq!(hex_string_to_bytes(&s).unwrap(), vec![b]);
        assert_eq!(decode_hex_strict(&s).unwrap(), vec![b]);
    }
}

#[test]
fn test_hex_matches_hex_crate() {
    let data: Vec<u8> = (0..=u8::MAX).collect();
    assert_eq!(bytes_to_hex_string(&data), hex::encode_upper(&data));
}

#[test]
fn test_strict_rejects_what_permissive_accepts() {
    assert!(hex_string_to_bytes("ZZ").is_ok());
    assert_eq!(decode_hex_strict("ZZ"), Err(CodecError::InvalidHexCharacter('Z')));
}

#[test]
fn test_bits_on_dif() {
    // DIF 0x8C: extension, BCD 8 digits
    let dif = 0x8C;
    assert!(bits::get_bit(dif, 7));
    assert_eq!(bits::low_nibble(dif), 0x0C);
    assert_eq!(bits::clear_bit(dif, 7), 0x0C);
    assert_eq!(bits::set_bit(0x0C, 7), dif);
    assert_eq!(bits::or(bits::mask(dif, 0x0F), 0x80), dif);
    assert_eq!(bits::shift_left(bits::high_nibble(dif), 4), 0x80);
    assert_eq!(bits::shift_right(dif, 7), 1);
}
