//! Edit transform: turns one observed edit into a correction or a settled
//! value.
//!
//! An edit is described by the field state right before it ([`Snapshot`]
//! `before`) and right after it (`after`). The transform rebuilds the
//! canonical display of the edited digits. When the edited text is already
//! canonical the edit has settled and its logical value is returned;
//! otherwise the canonical text and the cursor to show with it are returned
//! as a [`Correction`].
//!
//! Backspacing over a separator removes the digit before it as well, so a
//! single keystroke always changes the digits.
//!
//! # Example
//!
//! ```
//! use cc_input_mask::edit::{transform, Correction, Outcome, Snapshot};
//! use cc_input_mask::mask::NumberMask;
//!
//! let mask = NumberMask::new();
//! let before = Snapshot::collapsed("4242", 4);
//! let after = Snapshot::collapsed("42421", 5);
//!
//! match transform(&mask, &before, &after) {
//!     Outcome::Corrected(Correction { text, cursor }) => {
//!         assert_eq!(text, "4242 1");
//!         assert_eq!(cursor, 6);
//!     }
//!     Outcome::Settled(_) => unreachable!(),
//! }
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::filter::admit;
use crate::format::{digits_with_cursor, insert_with_cursor};
use crate::mask::InputMask;
use crate::redact::redact_text;

/// Text and selection of a field at one instant.
///
/// Selection offsets are char indices. `Debug` output masks the digits.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Displayed text.
    pub text: String,
    /// Selection start.
    pub selection_start: usize,
    /// Selection end; equal to `selection_start` for a bare cursor.
    pub selection_end: usize,
}

impl Snapshot {
    /// Creates a snapshot with a selection.
    pub fn new(text: impl Into<String>, selection_start: usize, selection_end: usize) -> Self {
        Self {
            text: text.into(),
            selection_start,
            selection_end,
        }
    }

    /// Creates a snapshot with a bare cursor.
    pub fn collapsed(text: impl Into<String>, cursor: usize) -> Self {
        Self::new(text, cursor, cursor)
    }

    /// Returns true if a range, not just a cursor, is selected.
    #[inline]
    pub fn has_range_selection(&self) -> bool {
        self.selection_start != self.selection_end
    }

    /// Length of the text in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if both selection ends lie within the text.
    pub fn selection_in_bounds(&self) -> bool {
        let length = self.len();
        self.selection_start <= length && self.selection_end <= length
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("text", &redact_text(&self.text))
            .field("selection_start", &self.selection_start)
            .field("selection_end", &self.selection_end)
            .finish()
    }
}

/// Canonical text to display in place of an edit, and where the cursor
/// goes.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    /// Replacement for the whole text of the field.
    pub text: String,
    /// Collapsed cursor, in chars of `text`.
    pub cursor: usize,
}

impl fmt::Debug for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Correction")
            .field("text", &redact_text(&self.text))
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Result of [`transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V> {
    /// The text must be replaced before the edit settles.
    Corrected(Correction),
    /// The text is canonical; the edit is complete with this value.
    Settled(V),
}

impl<V> Outcome<V> {
    /// Returns the correction, if any.
    pub fn correction(&self) -> Option<&Correction> {
        match self {
            Self::Corrected(correction) => Some(correction),
            Self::Settled(_) => None,
        }
    }

    /// Returns true if the edit settled without correction.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled(_))
    }
}

/// Computes the canonical form of an edit.
///
/// `before` is the field right before the mutation, `after` right after it.
/// Neither is modified.
pub fn transform<M: InputMask + ?Sized>(
    mask: &M,
    before: &Snapshot,
    after: &Snapshot,
) -> Outcome<M::Value> {
    let separator = mask.separator();
    let before_chars: Vec<char> = before.text.chars().collect();
    let mut edited: Vec<char> = after.text.chars().collect();
    let start = before.selection_start;

    // A single char left of a bare cursor vanished.
    let backspace = !before.has_range_selection()
        && start > 1
        && after.selection_start + 1 == start
        && !after.has_range_selection();

    // A separator at the end of the text never cascades.
    let separator_deleted = backspace
        && start < before_chars.len()
        && before_chars.get(start - 1) == Some(&separator);

    // Two adjacent separators mean one was typed, not that a digit was lost.
    let cascade = separator_deleted
        && before_chars.get(start) != Some(&separator)
        && after.selection_start <= edited.len();
    if cascade {
        edited.remove(after.selection_start - 1);
    }

    let edited: String = edited.into_iter().collect();
    let (digits, _) = digits_with_cursor(&edited, 0);
    let format = mask.layout(&digits);
    let (canonical, _) = insert_with_cursor(&digits, format.groups, separator, 0);

    if canonical == after.text {
        trace!(
            text = %mask.redact(&after.text),
            cursor = after.selection_start,
            "edit settled"
        );
        return Outcome::Settled(mask.value(&digits));
    }

    let text = admit(mask, &canonical, &after.text, 0..after.len());

    let cursor = if cascade {
        after.selection_start - 1
    } else {
        after.selection_start
    };
    let (_, cursor) = digits_with_cursor(&after.text, cursor);
    let (_, cursor) = insert_with_cursor(&digits, format.groups, separator, cursor);
    let cursor = cursor
        .min(format.display_length())
        .min(text.chars().count());

    debug!(
        from = %mask.redact(&after.text),
        to = %mask.redact(&text),
        cursor,
        cascade,
        "edit corrected"
    );

    Outcome::Corrected(Correction { text, cursor })
}
