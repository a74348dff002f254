#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Decoding a command line should never panic
        let _ = roster::presentation::tokenize(line);
        let _ = roster::parse_command(line);
    }
});
