//! Card brands and their display formats.
//!
//! This module provides the `CardBrand` enum for identifying card networks,
//! the `Format` descriptor that drives separator placement, and the
//! `CardNumber` value handed to listeners of a number field.

use std::fmt;
use zeroize::Zeroize;

/// Digit layout of a field: length bounds and group sizes.
///
/// Separators go between groups, never before the first or after the last.
/// For every branded format the group sizes add up to `max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Format {
    /// Fewest digits of a complete value.
    pub min_length: usize,
    /// Most digits the field accepts.
    pub max_length: usize,
    /// Group sizes, in display order.
    pub groups: &'static [usize],
}

impl Format {
    /// Number of separators in a fully typed value.
    #[inline]
    pub const fn separator_count(&self) -> usize {
        self.groups.len().saturating_sub(1)
    }

    /// Longest displayed text, separators included.
    #[inline]
    pub const fn display_length(&self) -> usize {
        self.max_length + self.separator_count()
    }

    /// Returns true if a separator belongs at this display index.
    pub fn is_separator_position(&self, index: usize) -> bool {
        let mut boundary = 0;
        for &size in self.groups.iter().take(self.separator_count()) {
            boundary += size;
            if boundary == index {
                return true;
            }
            if boundary > index {
                return false;
            }
            boundary += 1;
        }
        false
    }

    /// Returns true if `length` digits make a complete value.
    #[inline]
    pub const fn accepts_length(&self, length: usize) -> bool {
        self.min_length <= length && length <= self.max_length
    }
}

/// Card networks recognised by the number field.
///
/// Variants are listed in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CardBrand {
    /// No prefix rule matched (ISO/IEC 7812 bounds, no grouping).
    #[default]
    Unknown,
    /// Visa - Prefix 4, length 13-16
    Visa,
    /// Mastercard - Prefix 51-55, length 16
    MasterCard,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
    /// JCB - Prefix 35, length 16
    Jcb,
    /// Diners Club - Prefix 30, 36, 38, 39, length 14
    DinersClub,
}

const UNKNOWN_FORMAT: Format = Format {
    min_length: 8,
    max_length: 19,
    groups: &[],
};

const FOUR_BY_FOUR: &[usize] = &[4, 4, 4, 4];

impl CardBrand {
    /// Every brand, in classification priority order.
    pub const ALL: [CardBrand; 6] = [
        Self::Unknown,
        Self::Visa,
        Self::MasterCard,
        Self::AmericanExpress,
        Self::Jcb,
        Self::DinersClub,
    ];

    /// Returns the display format of this brand.
    #[inline]
    pub const fn format(&self) -> Format {
        match self {
            Self::Unknown => UNKNOWN_FORMAT,
            Self::Visa => Format {
                min_length: 13,
                max_length: 16,
                groups: FOUR_BY_FOUR,
            },
            Self::MasterCard => Format {
                min_length: 16,
                max_length: 16,
                groups: FOUR_BY_FOUR,
            },
            Self::AmericanExpress => Format {
                min_length: 15,
                max_length: 15,
                groups: &[4, 6, 5],
            },
            Self::Jcb => Format {
                min_length: 16,
                max_length: 16,
                groups: FOUR_BY_FOUR,
            },
            Self::DinersClub => Format {
                min_length: 14,
                max_length: 14,
                groups: &[4, 6, 4],
            },
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::MasterCard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
        }
    }

    /// Returns the wire tag (`VISA`, `MASTER_CARD`, ...).
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Visa => "VISA",
            Self::MasterCard => "MASTER_CARD",
            Self::AmericanExpress => "AMERICAN_EXPRESS",
            Self::Jcb => "JCB",
            Self::DinersClub => "DINERS_CLUB",
        }
    }

    /// Parses a wire tag, as produced by [`CardBrand::tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|brand| brand.tag() == tag)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Logical value of a number field: the digits and their brand.
///
/// # Security
///
/// - Debug output is masked to prevent accidental logging
/// - The digit buffer is zeroed on drop using the `zeroize` crate
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardNumber {
    number: String,
    brand: CardBrand,
}

impl CardNumber {
    /// Classifies a separator-free digit string.
    pub fn new(number: impl Into<String>) -> Self {
        let number = number.into();
        let brand = crate::detect::classify(&number);
        Self { number, brand }
    }

    /// Returns the digits (separators not included).
    ///
    /// # Security Warning
    ///
    /// This is the full card number. Never log it.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the brand the digits classify as.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns the number of digits entered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.number.len()
    }

    /// Returns true if no digit has been entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }

    /// Returns true if the digit count is within the brand's bounds.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.brand.format().accepts_length(self.len())
    }

    /// Returns the digits with all but the last four masked.
    pub fn masked(&self) -> String {
        crate::redact::redact_digits(&self.number)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("number", &self.masked())
            .field("brand", &self.brand)
            .finish()
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.number.zeroize();
    }
}
