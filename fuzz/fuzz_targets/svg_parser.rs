#![no_main]
use libfuzzer_sys::fuzz_target;
use svgparse::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Err(err) = parse(s) {
            assert!(err.offset() <= s.len());
        }
    }
});
