#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let rows = lexparse::parse_table(s);
        let _ = lexparse::format_csv(&rows, ',');
    }
});
