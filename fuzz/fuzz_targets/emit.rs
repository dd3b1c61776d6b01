#![no_main]

use crb::backend::emit;
use crb::json;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the loader
        if let Ok(ast) = json::from_str(s) {
            // If loading succeeds, emission must return text or an error, never panic
            let _ = emit(&ast);
        }
    }
});
