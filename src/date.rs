//! Credit card expiry date field rules.
//!
//! The date field holds `MMYY` displayed as `MM/YY`. Its format is fixed;
//! the only content rule is that the leading digits must be able to form a
//! month (`01`-`12`).
//!
//! # Example
//!
//! ```
//! use cc_input_mask::date::{CardDate, is_valid_month_start, is_valid_month};
//!
//! let date = CardDate::from_digits("0123");
//! assert_eq!(date.month(), "01");
//! assert_eq!(date.year(), "23");
//! assert_eq!(date.to_string(), "01/23");
//!
//! assert!(is_valid_month_start("1"));
//! assert!(!is_valid_month_start("2"));
//! assert!(is_valid_month("12/"));
//! assert!(!is_valid_month("13"));
//! ```

use std::fmt;

use crate::card::Format;

/// Format of the expiry date field: two groups of two digits.
pub const DATE_FORMAT: Format = Format {
    min_length: 4,
    max_length: 4,
    groups: &[2, 2],
};

/// Logical value of a date field.
///
/// Month and year are the raw, possibly partial digit runs: `"0"` while the
/// month is being typed, `""` before anything is entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDate {
    month: String,
    year: String,
}

impl CardDate {
    /// Creates a date from month and year digit runs.
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    /// Splits a separator-free digit string into month and year.
    ///
    /// Missing parts are empty; digits past the fourth are ignored.
    pub fn from_digits(digits: &str) -> Self {
        Self {
            month: safe_substring(digits, 0, 2).to_string(),
            year: safe_substring(digits, 2, 4).to_string(),
        }
    }

    /// Returns the month digits (0-2 of them).
    #[inline]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Returns the year digits (0-2 of them).
    #[inline]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns true if both month and year have two digits.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.month.len() == 2 && self.year.len() == 2
    }

    /// Returns the month as a number, once both digits are present.
    pub fn month_number(&self) -> Option<u8> {
        if self.month.len() != 2 {
            return None;
        }
        self.month.parse().ok()
    }
}

impl fmt::Display for CardDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = if self.month.is_empty() { "  " } else { &self.month };
        let year = if self.year.is_empty() { "  " } else { &self.year };
        write!(f, "{}/{}", month, year)
    }
}

/// Returns true if `text` can still begin a month: empty, or starting with
/// `0` or `1`.
#[inline]
pub fn is_valid_month_start(text: &str) -> bool {
    matches!(text.as_bytes(), [] | [b'0' | b'1', ..])
}

/// Returns true if the first two chars of `text` are a month, `01`-`12`.
#[inline]
pub fn is_valid_month(text: &str) -> bool {
    matches!(
        text.as_bytes(),
        [b'0', b'1'..=b'9', ..] | [b'1', b'0'..=b'2', ..]
    )
}

/// Char-based substring that yields `""` instead of panicking when the
/// range falls outside `s`.
fn safe_substring(s: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let mut indices = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
    let Some(from) = indices.nth(start) else {
        return "";
    };
    let to = indices.nth(end - start - 1).unwrap_or(s.len());
    if from >= to {
        return "";
    }
    &s[from..to]
}
