#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = ekuatia::core::ruc_check_digit(s);
        let valid = ekuatia::core::validate_ruc(s).is_ok();
        let formatted = ekuatia::core::format_ruc(s);
        // A valid RUC is never rewritten.
        if valid {
            assert_eq!(formatted, s.trim());
        }
    }
});
