//! Field rules: what separates the digits, how they group, and what value
//! listeners receive.
//!
//! The two fields share every algorithm and differ only in the answers to
//! these questions. [`InputMask`] is the seam; [`NumberMask`] and
//! [`DateMask`] are the two answers.

use crate::card::{CardNumber, Format};
use crate::date::{is_valid_month, is_valid_month_start, CardDate, DATE_FORMAT};
use crate::detect::classify;
use crate::error::EditError;
use crate::format::{DATE_SEPARATOR, NUMBER_SEPARATOR};
use crate::redact::redact_text;

/// Rules of one kind of masked field.
pub trait InputMask {
    /// Logical value handed to listeners once an edit settles.
    type Value;

    /// Decorative character placed between digit groups.
    fn separator(&self) -> char;

    /// Format for a separator-free digit string.
    ///
    /// Called on every edit; the number field answers with the format of
    /// the brand the digits classify as.
    fn layout(&self, digits: &str) -> Format;

    /// Logical value of a separator-free digit string.
    fn value(&self, digits: &str) -> Self::Value;

    /// Field-specific admission rule applied by the key filter.
    ///
    /// `trial` is the destination with the insertion merged in, `dstart`
    /// where the insertion lands and `span` the candidate insertion. Returns
    /// the part of `span` that may be inserted.
    fn constrain(&self, trial: &str, dstart: usize, span: String) -> String {
        let _ = (trial, dstart);
        span
    }

    /// Form of the displayed text that is safe to log.
    fn redact(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Rules of the card number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMask {
    separator: char,
}

impl NumberMask {
    /// Number mask with a space separator.
    pub const fn new() -> Self {
        Self {
            separator: NUMBER_SEPARATOR,
        }
    }

    /// Number mask with a custom separator.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidSeparator`] if `separator` is an ASCII digit.
    pub fn with_separator(separator: char) -> Result<Self, EditError> {
        check_separator(separator)?;
        Ok(Self { separator })
    }
}

impl Default for NumberMask {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMask for NumberMask {
    type Value = CardNumber;

    #[inline]
    fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    fn layout(&self, digits: &str) -> Format {
        classify(digits).format()
    }

    fn value(&self, digits: &str) -> CardNumber {
        CardNumber::new(digits)
    }

    fn redact(&self, text: &str) -> String {
        redact_text(text)
    }
}

/// Rules of the expiry date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMask {
    separator: char,
}

impl DateMask {
    /// Date mask with a `/` separator.
    pub const fn new() -> Self {
        Self {
            separator: DATE_SEPARATOR,
        }
    }

    /// Date mask with a custom separator.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidSeparator`] if `separator` is an ASCII digit.
    pub fn with_separator(separator: char) -> Result<Self, EditError> {
        check_separator(separator)?;
        Ok(Self { separator })
    }
}

impl Default for DateMask {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMask for DateMask {
    type Value = CardDate;

    #[inline]
    fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    fn layout(&self, _digits: &str) -> Format {
        DATE_FORMAT
    }

    fn value(&self, digits: &str) -> CardDate {
        CardDate::from_digits(digits)
    }

    fn constrain(&self, trial: &str, dstart: usize, span: String) -> String {
        if !is_valid_month_start(trial) {
            return String::new();
        }
        // Not a month: only a char landing on the first position survives.
        if trial.chars().nth(1).is_some() && !is_valid_month(trial) {
            if dstart == 0 {
                return span.chars().take(1).collect();
            }
            return String::new();
        }
        span
    }
}

fn check_separator(separator: char) -> Result<(), EditError> {
    if separator.is_ascii_digit() {
        return Err(EditError::InvalidSeparator(separator));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardBrand;

    #[test]
    fn test_number_layout_follows_brand() {
        let mask = NumberMask::new();
        assert_eq!(mask.layout("4"), CardBrand::Visa.format());
        assert_eq!(mask.layout("37"), CardBrand::AmericanExpress.format());
        assert_eq!(mask.layout("3"), CardBrand::Unknown.format());
    }

    #[test]
    fn test_number_value() {
        let value = NumberMask::new().value("4242");
        assert_eq!(value.number(), "4242");
        assert_eq!(value.brand(), CardBrand::Visa);
    }

    #[test]
    fn test_date_layout_is_fixed() {
        let mask = DateMask::new();
        assert_eq!(mask.layout(""), DATE_FORMAT);
        assert_eq!(mask.layout("0123"), DATE_FORMAT);
        assert_eq!(mask.value("012"), CardDate::new("01", "2"));
    }

    #[test]
    fn test_date_constrain() {
        let mask = DateMask::new();
        assert_eq!(mask.constrain("2", 0, "2".into()), "");
        assert_eq!(mask.constrain("13", 1, "3".into()), "");
        assert_eq!(mask.constrain("13", 0, "13".into()), "1");
        assert_eq!(mask.constrain("00", 0, "00".into()), "0");
        assert_eq!(mask.constrain("12", 1, "2".into()), "2");
        assert_eq!(mask.constrain("", 0, String::new()), "");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(NumberMask::with_separator('-').unwrap().separator(), '-');
        assert_eq!(DateMask::with_separator(' ').unwrap().separator(), ' ');
        assert_eq!(
            NumberMask::with_separator('7'),
            Err(EditError::InvalidSeparator('7'))
        );
    }

    #[test]
    fn test_redaction() {
        assert_eq!(NumberMask::new().redact("4242 4242 4242 4242"), "**** **** **** 4242");
        assert_eq!(DateMask::new().redact("01/23"), "01/23");
    }
}
