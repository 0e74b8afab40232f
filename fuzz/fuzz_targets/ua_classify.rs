#![no_main]

use libfuzzer_sys::fuzz_target;
use uaprobe::ua::{UserAgent, classify};

fuzz_target!(|input: String| {
    let classification = classify(&input);
    let ua = UserAgent::new(input);
    assert_eq!(ua.classification(), &classification);
});
