//! Fuzz target for the separator engine.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_input_mask::{detect, format, redact};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = detect::classify(data);
    let _ = detect::candidates(data);
    let _ = format::format_date(data);
    let _ = format::split_into_groups(data, &[4, 6, 5]);
    let _ = redact::redact_text(data);

    for cursor in [0, data.chars().count() / 2, data.chars().count() + 3] {
        let _ = format::strip_with_cursor(data, ' ', cursor);
        let _ = format::insert_with_cursor(data, &[4, 4, 4, 4], '/', cursor);
    }

    // Verify roundtrip property
    let formatted = format::format_card_number(data);
    let stripped = format::strip(&formatted, ' ');
    let original_digits: String = data.chars().filter(|c| c.is_ascii_digit()).collect();
    assert_eq!(stripped, original_digits, "Format roundtrip should preserve digits");
    assert_eq!(format::format_card_number(&formatted), formatted, "Format should be idempotent");
});
