#![no_main]
use libfuzzer_sys::fuzz_target;
use svgparse::locate;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        for offset in 0..=source.len() + 1 {
            let location = locate(source, offset);
            assert!(location.line >= 1);
            assert!(location.snippet.ends_with('^'));
        }
    }
});
