#![no_main]
use basispath::classify::{classify, Label};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|sides: (f64, f64, f64)| {
    let (a, b, c) = sides;
    let label = classify(a, b, c);
    // Labels do not depend on side order.
    assert_eq!(label, classify(c, a, b));
    assert_eq!(label, classify(b, a, c));
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        assert_eq!(label, Label::InvalidNonpositive);
    }
});
