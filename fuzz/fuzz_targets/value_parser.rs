#![no_main]
use libfuzzer_sys::fuzz_target;
use lexparse::json::{Config, Parser};
use lexparse::Whitespace;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = lexparse::parse_value(s);
        let _ = lexparse::parse_array(s);
        let config = Config::default().with_whitespace(Whitespace::Significant);
        let _ = Parser::with_config(s, config).parse();
    }
});
