//! PCI-DSS compliant redaction for logs and debug output.
//!
//! A card number field sees the full PAN on every keystroke. Nothing in this
//! crate writes those digits to a log line or a `Debug` string; this module
//! produces the redacted forms used instead.
//!
//! # PCI-DSS Compliance
//!
//! PCI-DSS allows displaying only the last 4 digits for customer-facing
//! display. Everything else is replaced with `*`.

/// Masks every digit but the last four.
///
/// Non-digit characters are dropped. Four digits or fewer are masked
/// completely, so a partially typed number never leaks its prefix.
///
/// # Example
///
/// ```
/// use cc_input_mask::redact::redact_digits;
///
/// assert_eq!(redact_digits("4242424242424242"), "************4242");
/// assert_eq!(redact_digits("4242"), "****");
/// ```
pub fn redact_digits(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let mut result = String::with_capacity(len);
    for _ in 0..len - 4 {
        result.push('*');
    }
    result.extend(&digits[len - 4..]);
    result
}

/// Masks the digits of a displayed text, keeping its separators in place.
///
/// Same rule as [`redact_digits`]: only the last four digits survive, and
/// only when there are more than four.
///
/// # Example
///
/// ```
/// use cc_input_mask::redact::redact_text;
///
/// assert_eq!(redact_text("4242 1110 2222 3"), "**** **** *222 3");
/// assert_eq!(redact_text("4242 1"), "*242 1");
/// ```
pub fn redact_text(text: &str) -> String {
    let total = text.chars().filter(|c| c.is_ascii_digit()).count();
    let visible_from = if total > 4 { total - 4 } else { usize::MAX };

    let mut seen = 0;
    text.chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            let shown = seen >= visible_from;
            seen += 1;
            if shown {
                c
            } else {
                '*'
            }
        })
        .collect()
}
