#![no_main]

use libfuzzer_sys::fuzz_target;
use weft::SyntaxConfig;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsing must never panic; it either succeeds or returns a
        // positioned error.
        let _ = weft::parse("fuzz", s);
        let _ = weft::parse_with("fuzz", s, &SyntaxConfig::at_sign());
    }
});
