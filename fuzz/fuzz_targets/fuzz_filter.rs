//! Fuzz target for the key filter.
//!
//! Tests that the filter never panics and never admits foreign chars.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cc_input_mask::{filter, DateMask, NumberMask};

#[derive(Debug, Arbitrary)]
struct Input {
    source: String,
    dest: String,
    start: u8,
    end: u8,
    date: bool,
}

fuzz_target!(|input: Input| {
    let range = usize::from(input.start)..usize::from(input.end);
    let result = if input.date {
        filter::filter(&DateMask::new(), &input.source, &input.dest, range)
    } else {
        filter::filter(&NumberMask::new(), &input.source, &input.dest, range)
    };

    if let Ok(admitted) = result {
        let separator = if input.date { '/' } else { ' ' };
        assert!(admitted.chars().all(|c| c.is_ascii_digit() || c == separator));
        assert!(admitted.chars().count() <= input.source.chars().count());
    }
});
