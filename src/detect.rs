//! Card brand classification using prefix matching.
//!
//! The brand decides the digit grouping of the number field, so it is
//! re-evaluated on every edit: a prefix that is ambiguous while being typed
//! (`"3"`) resolves once more digits arrive (`"34"`, `"35"`, `"36"`), and the
//! displayed separators follow.
//!
//! # Performance
//!
//! Detection is O(1) using pattern matching - no loops or hash lookups.

use crate::CardBrand;

/// Classifies a separator-free digit string.
///
/// Rules are tried in priority order and the first match wins. Anything
/// that matches no rule, including the empty string, is
/// [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use cc_input_mask::detect::classify;
/// use cc_input_mask::CardBrand;
///
/// assert_eq!(classify("4242"), CardBrand::Visa);
/// assert_eq!(classify("3"), CardBrand::Unknown);
/// assert_eq!(classify("34"), CardBrand::AmericanExpress);
/// assert_eq!(classify("30"), CardBrand::DinersClub);
/// ```
#[inline]
pub fn classify(digits: &str) -> CardBrand {
    match digits.as_bytes() {
        // Visa: 4
        [b'4', ..] => CardBrand::Visa,

        // Mastercard: 51-55
        [b'5', b'1'..=b'5', ..] => CardBrand::MasterCard,

        // American Express: 34 or 37
        [b'3', b'4' | b'7', ..] => CardBrand::AmericanExpress,

        // JCB: 35
        [b'3', b'5', ..] => CardBrand::Jcb,

        // Diners Club: 30, 36, 38, 39
        [b'3', b'0' | b'6' | b'8' | b'9', ..] => CardBrand::DinersClub,

        _ => CardBrand::Unknown,
    }
}

/// Lists the brands a digit prefix can still turn into.
///
/// A prefix that already classifies yields just that brand. An unclassified
/// prefix yields every brand it could still become once more digits are
/// typed; `"3"` gives American Express, JCB and Diners Club.
///
/// # Example
///
/// ```
/// use cc_input_mask::detect::candidates;
/// use cc_input_mask::CardBrand;
///
/// assert_eq!(
///     candidates("3"),
///     vec![CardBrand::AmericanExpress, CardBrand::Jcb, CardBrand::DinersClub]
/// );
/// assert_eq!(candidates("5"), vec![CardBrand::MasterCard]);
/// assert!(candidates("9").is_empty());
/// ```
pub fn candidates(prefix: &str) -> Vec<CardBrand> {
    let brand = classify(prefix);
    if brand != CardBrand::Unknown {
        return vec![brand];
    }

    // Every rule decides within two digits.
    let missing = 2usize.saturating_sub(prefix.len());
    if missing == 0 {
        return Vec::new();
    }

    let mut reachable = Vec::with_capacity(CardBrand::ALL.len());
    let extensions = 10usize.pow(missing as u32);
    for n in 0..extensions {
        let mut extended = String::with_capacity(prefix.len() + missing);
        extended.push_str(prefix);
        if missing == 2 {
            extended.push(char::from(b'0' + (n / 10) as u8));
        }
        extended.push(char::from(b'0' + (n % 10) as u8));
        let brand = classify(&extended);
        if !reachable.contains(&brand) {
            reachable.push(brand);
        }
    }

    CardBrand::ALL
        .into_iter()
        .filter(|brand| *brand != CardBrand::Unknown && reachable.contains(brand))
        .collect()
}
