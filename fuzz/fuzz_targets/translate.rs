#![no_main]

use libfuzzer_sys::fuzz_target;
use tracefg::TranslateConfig;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexing, parsing, lowering and translation must fail with errors, never panic
        let _ = tracefg::translate_source(s, &TranslateConfig::default());
    }
});
