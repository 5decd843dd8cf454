#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let parsed = csv_marker_map::parse_csv_document(text);
        assert!(parsed.records.len() + parsed.failures.len() <= text.lines().count());
    }
});
