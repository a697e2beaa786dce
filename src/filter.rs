//! Key filter: decides how much of an insertion a field admits.
//!
//! Every replacement of `dest[dstart..dend]` by `source` passes through
//! [`filter`] before it reaches the field. The filter drops characters that
//! are neither digits nor the separator, drops separators that would not
//! land on a separator position, applies the field's own content rule and
//! finally cuts the insertion to what still fits in the display length.
//!
//! # Example
//!
//! ```
//! use cc_input_mask::filter::filter;
//! use cc_input_mask::mask::NumberMask;
//!
//! let mask = NumberMask::new();
//! assert_eq!(filter(&mask, "42a4", "", 0..0).unwrap(), "424");
//! // a space is kept only where the format puts a separator
//! assert_eq!(filter(&mask, " ", "4242", 4..4).unwrap(), " ");
//! assert_eq!(filter(&mask, " ", "4242", 2..2).unwrap(), "");
//! ```

use std::ops::Range;

use tracing::warn;

use crate::error::EditError;
use crate::format::strip;
use crate::mask::InputMask;

/// Returns the part of `source` that may replace `dest[range]`.
///
/// `range` is in chars of `dest`. The result is empty when nothing of
/// `source` is admitted. Pure: neither `source` nor `dest` is modified.
///
/// # Errors
///
/// [`EditError::InvalidRange`] if `range` is inverted or extends past the
/// end of `dest`.
pub fn filter<M: InputMask + ?Sized>(
    mask: &M,
    source: &str,
    dest: &str,
    range: Range<usize>,
) -> Result<String, EditError> {
    let length = dest.chars().count();
    let Range {
        start: dstart,
        end: dend,
    } = range;
    if dstart > dend || dend > length {
        return Err(EditError::InvalidRange {
            start: dstart,
            end: dend,
            length,
        });
    }

    let separator = mask.separator();

    let accepted: Vec<char> = source
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == separator)
        .collect();
    if !source.is_empty() && accepted.is_empty() {
        return Ok(String::new());
    }

    let mut trial = String::with_capacity(dest.len() + accepted.len());
    trial.extend(dest.chars().take(dstart));
    trial.extend(accepted.iter());
    trial.extend(dest.chars().skip(dend));
    let format = mask.layout(&strip(&trial, separator));

    let span: String = accepted
        .iter()
        .enumerate()
        .filter(|&(i, &c)| c != separator || format.is_separator_position(dstart + i))
        .map(|(_, &c)| c)
        .collect();

    let span = mask.constrain(&trial, dstart, span);

    let remaining = length - (dend - dstart);
    let capacity = format.display_length();
    if remaining >= capacity {
        return Ok(String::new());
    }
    let keep = capacity - remaining;

    if span.chars().count() <= keep {
        return Ok(span);
    }
    Ok(span.chars().take(keep).collect())
}

/// Infallible [`filter`] for hosts that cannot surface an error.
///
/// A precondition violation is logged and admits nothing, which leaves the
/// field unchanged.
pub fn admit<M: InputMask + ?Sized>(
    mask: &M,
    source: &str,
    dest: &str,
    range: Range<usize>,
) -> String {
    match filter(mask, source, dest, range) {
        Ok(span) => span,
        Err(err) => {
            warn!(error = %err, "key filter rejected replacement");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{DateMask, NumberMask};

    #[test]
    fn test_keeps_digits_and_separator_only() {
        let mask = NumberMask::new();
        assert_eq!(filter(&mask, "4x2-4_2", "", 0..0).unwrap(), "4242");
        assert_eq!(filter(&mask, "abc", "", 0..0).unwrap(), "");
        assert_eq!(filter(&mask, "/", "", 0..0).unwrap(), "");
    }

    #[test]
    fn test_empty_source_is_admitted() {
        let mask = NumberMask::new();
        assert_eq!(filter(&mask, "", "4242 1", 5..6).unwrap(), "");
    }

    #[test]
    fn test_separator_positions() {
        let mask = NumberMask::new();
        // on a separator
        assert_eq!(filter(&mask, " ", "4242 1110 2222", 9..9).unwrap(), " ");
        // inside a group
        assert_eq!(filter(&mask, " ", "4242 1110 2222", 7..7).unwrap(), "");
        assert_eq!(filter(&mask, " ", "4242 1110 2222", 5..5).unwrap(), "");
        assert_eq!(filter(&mask, " ", "4242 1110 2222", 0..0).unwrap(), "");
        // end of the text, at a group boundary
        assert_eq!(filter(&mask, " ", "4242 1110 2222", 14..14).unwrap(), " ");
        // pasted separators in the right place survive
        assert_eq!(filter(&mask, "4242 4242", "", 0..0).unwrap(), "4242 4242");
        assert_eq!(filter(&mask, "42 424242", "", 0..0).unwrap(), "42424242");
    }

    #[test]
    fn test_separator_positions_follow_brand_of_trial() {
        let mask = NumberMask::new();
        // Amex groups 4-6-5: position 9 is inside the second group
        assert_eq!(filter(&mask, " ", "3782 82246", 9..9).unwrap(), "");
        assert_eq!(filter(&mask, " ", "3782 822463", 11..11).unwrap(), " ");
        // unknown brand has no separator positions at all
        assert_eq!(filter(&mask, " ", "6011", 4..4).unwrap(), "");
    }

    #[test]
    fn test_length_cap() {
        let mask = NumberMask::new();
        assert_eq!(filter(&mask, "5", "4242 4242 4242 4242", 19..19).unwrap(), "");
        assert_eq!(filter(&mask, "55549", "4242 1110 2222 ", 15..15).unwrap(), "5554");
        // replacing a selection frees its room
        assert_eq!(filter(&mask, "1", "4242 4242 4242 4242", 18..19).unwrap(), "1");
        // Amex caps at 17
        assert_eq!(filter(&mask, "12", "3782 822463 1000", 16..16).unwrap(), "1");
        // unknown caps at 19 digits
        assert_eq!(
            filter(&mask, "12345678901234567890", "", 0..0).unwrap(),
            "1234567890123456789"
        );
    }

    #[test]
    fn test_whole_content_replacement_cuts_overflow() {
        let mask = NumberMask::new();
        let dest = "42421110222255549";
        let admitted = filter(&mask, "4242 1110 2222 5554 9", dest, 0..dest.len()).unwrap();
        assert_eq!(admitted, "4242 1110 2222 5554");

        let mask = DateMask::new();
        assert_eq!(filter(&mask, "01/23/4", "01234", 0..5).unwrap(), "01/23");
    }

    #[test]
    fn test_date_month_rules() {
        let mask = DateMask::new();
        assert_eq!(filter(&mask, "2", "", 0..0).unwrap(), "");
        assert_eq!(filter(&mask, "1", "", 0..0).unwrap(), "1");
        assert_eq!(filter(&mask, "3", "1", 1..1).unwrap(), "");
        assert_eq!(filter(&mask, "0", "0", 1..1).unwrap(), "");
        assert_eq!(filter(&mask, "2", "1", 1..1).unwrap(), "2");
        assert_eq!(filter(&mask, "13", "", 0..0).unwrap(), "1");
        assert_eq!(filter(&mask, "00", "", 0..0).unwrap(), "0");
        // reformatting is left to the edit transform
        assert_eq!(filter(&mask, "1234", "0", 1..1).unwrap(), "1234");
    }

    #[test]
    fn test_date_separator() {
        let mask = DateMask::new();
        assert_eq!(filter(&mask, "/", "01", 2..2).unwrap(), "/");
        assert_eq!(filter(&mask, "/", "01/2", 3..3).unwrap(), "");
        assert_eq!(filter(&mask, "/", "01/2", 1..1).unwrap(), "");
        assert_eq!(filter(&mask, "/", "01/23", 5..5).unwrap(), "");
        assert_eq!(filter(&mask, " ", "01", 2..2).unwrap(), "");
    }

    #[test]
    fn test_custom_separator() {
        let mask = NumberMask::with_separator('-').unwrap();
        assert_eq!(filter(&mask, "-", "4242", 4..4).unwrap(), "-");
        assert_eq!(filter(&mask, " ", "4242", 4..4).unwrap(), "");
    }

    #[test]
    fn test_is_idempotent() {
        let mask = NumberMask::new();
        let once = filter(&mask, "4a242 11x10", "", 0..0).unwrap();
        let twice = filter(&mask, &once, "", 0..0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_range() {
        let mask = NumberMask::new();
        assert_eq!(
            filter(&mask, "1", "4242", 3..2),
            Err(EditError::InvalidRange {
                start: 3,
                end: 2,
                length: 4
            })
        );
        assert!(filter(&mask, "1", "4242", 0..5).is_err());
        assert_eq!(admit(&mask, "1", "4242", 0..5), "");
        assert_eq!(admit(&mask, "1", "4242", 4..4), "1");
    }

    #[test]
    fn test_ranges_count_chars() {
        let mask = NumberMask::with_separator('·').unwrap();
        assert_eq!(filter(&mask, "·", "4242", 4..4).unwrap(), "·");
        assert_eq!(filter(&mask, "1", "4242·", 5..5).unwrap(), "1");
    }
}
