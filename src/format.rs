//! Separator stripping and insertion with cursor tracking.
//!
//! This module is the formatting engine shared by both fields. The displayed
//! text is always `digits` with a separator between consecutive groups; these
//! functions move between the two representations and carry a cursor offset
//! through the same transformation, so the caret lands on the same logical
//! digit after a reformat.
//!
//! Cursor offsets are char indices.
//!
//! # Example
//!
//! ```
//! use cc_input_mask::format::{insert_with_cursor, strip_with_cursor};
//!
//! // "4242 1110 2222" with the caret after the first "0"
//! let (digits, cursor) = strip_with_cursor("4242 11103 2222", ' ', 10);
//! assert_eq!((digits.as_str(), cursor), ("4242111032222", 9));
//!
//! let (text, cursor) = insert_with_cursor(&digits, &[4, 4, 4, 4], ' ', cursor);
//! assert_eq!((text.as_str(), cursor), ("4242 1110 3222 2", 11));
//! ```

use crate::date::DATE_FORMAT;
use crate::detect::classify;

/// Separator of the card number field.
pub const NUMBER_SEPARATOR: char = ' ';

/// Separator of the expiry date field.
pub const DATE_SEPARATOR: char = '/';

/// Removes every separator from `text`.
///
/// # Example
///
/// ```
/// use cc_input_mask::format::strip;
///
/// assert_eq!(strip("4242 4242 4242 4242", ' '), "4242424242424242");
/// assert_eq!(strip("01/23", '/'), "0123");
/// ```
pub fn strip(text: &str, separator: char) -> String {
    text.chars().filter(|&c| c != separator).collect()
}

/// Removes every separator from `text` and maps `cursor` through the removal.
///
/// Each separator strictly before the cursor moves it one place left; a
/// separator at or after the cursor leaves it alone.
pub fn strip_with_cursor(text: &str, separator: char, cursor: usize) -> (String, usize) {
    let mut digits = String::with_capacity(text.len());
    let mut new_cursor = cursor;

    for (i, c) in text.chars().enumerate() {
        if c == separator {
            if i < cursor {
                new_cursor -= 1;
            }
        } else {
            digits.push(c);
        }
    }

    (digits, new_cursor)
}

/// Keeps only the ASCII digits of `text` and maps `cursor` through the
/// removal.
///
/// Host text can carry anything a paste or an IME produced (`-`, `.`, a
/// foreign separator); every dropped char before the cursor moves it one
/// place left.
///
/// # Example
///
/// ```
/// use cc_input_mask::format::digits_with_cursor;
///
/// assert_eq!(digits_with_cursor("4242-4242", 9), ("42424242".to_string(), 8));
/// assert_eq!(digits_with_cursor("42 a42", 3), ("4242".to_string(), 2));
/// ```
pub fn digits_with_cursor(text: &str, cursor: usize) -> (String, usize) {
    let mut digits = String::with_capacity(text.len());
    let mut new_cursor = cursor;

    for (i, c) in text.chars().enumerate() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if i < cursor {
            new_cursor -= 1;
        }
    }

    (digits, new_cursor)
}

/// Inserts separators at the group boundaries and maps `cursor` through the
/// insertion.
///
/// A separator is inserted at a boundary only while the text extends past
/// it, so there is never a trailing separator. Each separator inserted at or
/// before the cursor moves it one place right. Digits beyond the last group
/// are separated from it as well; the key filter cuts them off when the
/// result is written back to a field.
pub fn insert_with_cursor(
    digits: &str,
    groups: &[usize],
    separator: char,
    cursor: usize,
) -> (String, usize) {
    let mut chars: Vec<char> = digits.chars().collect();
    let mut new_cursor = cursor;
    let mut boundary = 0;

    for &size in groups {
        boundary += size;
        if chars.len() <= boundary {
            break;
        }
        chars.insert(boundary, separator);
        if boundary <= new_cursor {
            new_cursor += 1;
        }
        boundary += 1;
    }

    (chars.into_iter().collect(), new_cursor)
}

/// Strips `text` and re-inserts separators for `groups`.
///
/// # Example
///
/// ```
/// use cc_input_mask::format::reformat;
///
/// assert_eq!(reformat("424 21", ' ', &[4, 4, 4, 4]), "4242 1");
/// ```
pub fn reformat(text: &str, separator: char, groups: &[usize]) -> String {
    insert_with_cursor(&strip(text, separator), groups, separator, 0).0
}

/// Formats a card number with the grouping of its brand.
///
/// Anything that is not an ASCII digit is dropped first; digits beyond the
/// brand maximum are kept.
///
/// # Example
///
/// ```
/// use cc_input_mask::format::format_card_number;
///
/// assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
/// assert_eq!(format_card_number("3056-9309-0259-04"), "3056 930902 5904");
/// ```
pub fn format_card_number(input: &str) -> String {
    let digits = digits_only(input);
    let format = classify(&digits).format();
    insert_with_cursor(&digits, format.groups, NUMBER_SEPARATOR, 0).0
}

/// Formats an expiry date as `MM/YY`.
///
/// # Example
///
/// ```
/// use cc_input_mask::format::format_date;
///
/// assert_eq!(format_date("0123"), "01/23");
/// assert_eq!(format_date("1"), "1");
/// ```
pub fn format_date(input: &str) -> String {
    let digits = digits_only(input);
    insert_with_cursor(&digits, DATE_FORMAT.groups, DATE_SEPARATOR, 0).0
}

/// Splits a digit string into its groups for flexible rendering.
///
/// The last group may be partial; digits beyond the last group are returned
/// as one extra group.
///
/// # Example
///
/// ```
/// use cc_input_mask::format::split_into_groups;
///
/// let groups = split_into_groups("378282246310005", &[4, 6, 5]);
/// assert_eq!(groups, vec!["3782", "822463", "10005"]);
///
/// let groups = split_into_groups("424242", &[4, 4, 4, 4]);
/// assert_eq!(groups, vec!["4242", "42"]);
/// ```
pub fn split_into_groups(digits: &str, groups: &[usize]) -> Vec<String> {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = Vec::with_capacity(groups.len());
    let mut pos = 0;

    for &size in groups {
        if pos >= chars.len() {
            break;
        }
        let end = (pos + size).min(chars.len());
        result.push(chars[pos..end].iter().collect());
        pos = end;
    }

    if pos < chars.len() {
        result.push(chars[pos..].iter().collect());
    }

    result
}

fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
