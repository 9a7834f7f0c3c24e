#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let code = ekuatia::core::unit_code_for(Some(s));
        assert!(ekuatia::core::units::SET_UNIT_CODES.iter().any(|(_, c)| *c == code));
        let phone = ekuatia::core::normalize_phone(s, "PY");
        assert!(phone.is_empty() || phone.starts_with("595"));
    }
});
