#![no_main]

use libfuzzer_sys::fuzz_target;
use mbus_codec::{bytes_to_hex_string, decode_hex_strict, hex_string_to_bytes};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = hex_string_to_bytes(s);
        if let Ok(bytes) = decode_hex_strict(s) {
            assert_eq!(bytes_to_hex_string(&bytes), s.to_uppercase());
        }
    }
    let hex = bytes_to_hex_string(data);
    assert_eq!(hex_string_to_bytes(&hex).ok().as_deref(), Some(data));
});
