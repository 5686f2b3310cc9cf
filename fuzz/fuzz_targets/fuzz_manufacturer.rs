#![no_main]

use libfuzzer_sys::fuzz_target;
use mbus_codec::{to_manufacturer_code, to_manufacturer_name, ManufacturerCode};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = to_manufacturer_code(s);
        if let Ok(code) = s.parse::<ManufacturerCode>() {
            assert_eq!(code.name(), s.to_ascii_uppercase());
        }
    }
    if data.len() >= 2 {
        let id = i16::from_le_bytes([data[0], data[1]]);
        let _ = to_manufacturer_name(id);
    }
});
