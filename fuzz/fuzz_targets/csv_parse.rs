#![no_main]
use basispath::io::{parse_expected, parse_vectors};
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let source = Path::new("<fuzz>");
    if let Ok(vectors) = parse_vectors(data, source) {
        let _ = basispath::classify_batch(&vectors);
    }
    let _ = parse_expected(data, source);
});
