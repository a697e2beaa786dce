//! Masked input fields.
//!
//! [`MaskedField`] owns the text and selection of one input and runs every
//! edit through the key filter and the edit transform, so its text is always
//! canonical between edits. Listeners see the logical value once per
//! completed edit.
//!
//! Hosts drive a field in one of two ways:
//!
//! - **Controlled**: the field applies the edit itself
//!   ([`type_text`](MaskedField::type_text), [`paste`](MaskedField::paste),
//!   [`delete_backward`](MaskedField::delete_backward), ...).
//! - **Observed**: the host owns the mutation and reports the state around
//!   it with [`begin_edit`](MaskedField::begin_edit) and
//!   [`end_edit`](MaskedField::end_edit), then displays the returned
//!   correction.
//!
//! # Example
//!
//! ```
//! use cc_input_mask::{CardBrand, NumberField};
//!
//! let mut field = NumberField::default();
//! field.type_text("42421").unwrap();
//!
//! assert_eq!(field.text(), "4242 1");
//! assert_eq!(field.cursor(), 6);
//! assert_eq!(field.brand(), CardBrand::Visa);
//! ```

use std::fmt;
use std::ops::Range;

use tracing::{trace, warn};
use zeroize::Zeroize;

use crate::card::{CardBrand, CardNumber, Format};
use crate::date::CardDate;
use crate::edit::{transform, Correction, Outcome, Snapshot};
use crate::error::EditError;
use crate::filter::filter;
use crate::format::strip;
use crate::mask::{DateMask, InputMask, NumberMask};
use crate::notify::{ChangeListener, ChangeNotifier, ListenerId};

/// Card number field.
pub type NumberField = MaskedField<NumberMask>;

/// Expiry date field.
pub type DateField = MaskedField<DateMask>;

/// Where a field is in its edit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CycleState {
    /// No edit in progress.
    #[default]
    Idle,
    /// An edit has begun; holds the state right before it.
    Observing(Snapshot),
    /// A correction is being applied and reported.
    ///
    /// Only held inside [`end_edit`](MaskedField::end_edit), while listeners
    /// run. Listeners get the value, not the field, and every edit takes
    /// `&mut self`, so no edit can start in this state.
    Correcting,
}

/// One masked text input.
///
/// Offsets are char indices. The selection may be given in either order;
/// [`cursor`](MaskedField::cursor) is its second end.
///
/// # Security
///
/// - `Debug` output shows the text the way the mask redacts it
/// - The text buffer is zeroed when replaced and on drop
pub struct MaskedField<M: InputMask> {
    mask: M,
    text: String,
    selection_start: usize,
    selection_end: usize,
    state: CycleState,
    listeners: ChangeNotifier<M::Value>,
}

impl<M: InputMask> MaskedField<M> {
    /// Creates an empty field.
    pub fn new(mask: M) -> Self {
        Self {
            mask,
            text: String::new(),
            selection_start: 0,
            selection_end: 0,
            state: CycleState::Idle,
            listeners: ChangeNotifier::new(),
        }
    }

    /// Returns the rules of this field.
    #[inline]
    pub fn mask(&self) -> &M {
        &self.mask
    }

    /// Returns the displayed text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the selection as `(start, end)`.
    #[inline]
    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Returns the cursor position.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.selection_end
    }

    /// Returns the text and selection.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.text.clone(), self.selection_start, self.selection_end)
    }

    /// Returns the edit cycle state.
    #[inline]
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    /// Length of the text in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the field is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the text without separators.
    pub fn digits(&self) -> String {
        strip(&self.text, self.mask.separator())
    }

    /// Returns the logical value of the current text.
    pub fn value(&self) -> M::Value {
        self.mask.value(&self.digits())
    }

    /// Returns the format the current digits are displayed with.
    pub fn format(&self) -> Format {
        self.mask.layout(&self.digits())
    }

    /// Returns true if the digit count is within the format bounds.
    pub fn is_complete(&self) -> bool {
        let digits = self.digits();
        self.mask
            .layout(&digits)
            .accepts_length(digits.chars().count())
    }

    /// Registers a listener for completed edits.
    pub fn add_listener(
        &mut self,
        listener: impl ChangeListener<M::Value> + 'static,
    ) -> ListenerId {
        self.listeners.register(listener)
    }

    /// Unregisters a listener. Returns false if `id` is unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    // -- observed edits --

    /// Records the field state right before a host-applied edit.
    ///
    /// Starting a new edit while one is open replaces it.
    ///
    /// # Errors
    ///
    /// [`EditError::SelectionOutOfBounds`] if the selection of `before` lies
    /// outside its text.
    pub fn begin_edit(&mut self, before: Snapshot) -> Result<(), EditError> {
        check_selection(&before)?;

        trace!(
            text = %self.mask.redact(&before.text),
            selection_start = before.selection_start,
            selection_end = before.selection_end,
            "edit started"
        );
        self.state = CycleState::Observing(before);
        Ok(())
    }

    /// Completes a host-applied edit.
    ///
    /// The field takes the state of `after`, then the correction of the
    /// edit, if any. The correction is returned for the host to display.
    /// Listeners are notified once either way.
    ///
    /// # Errors
    ///
    /// - [`EditError::NotObserving`] without a preceding
    ///   [`begin_edit`](MaskedField::begin_edit)
    /// - [`EditError::SelectionOutOfBounds`] if the selection of `after`
    ///   lies outside its text; the edit is abandoned
    pub fn end_edit(&mut self, after: Snapshot) -> Result<Option<Correction>, EditError> {
        let before = match std::mem::take(&mut self.state) {
            CycleState::Observing(before) => before,
            other => {
                self.state = other;
                warn!("edit completed without being started");
                return Err(EditError::NotObserving);
            }
        };
        check_selection(&after)?;

        self.replace_text(after.text.clone());
        self.selection_start = after.selection_start;
        self.selection_end = after.selection_end;

        Ok(self.settle(&before, &after))
    }

    fn settle(&mut self, before: &Snapshot, after: &Snapshot) -> Option<Correction> {
        match transform(&self.mask, before, after) {
            Outcome::Settled(value) => {
                self.listeners.notify(&value);
                None
            }
            Outcome::Corrected(correction) => {
                self.state = CycleState::Correcting;
                self.replace_text(correction.text.clone());
                self.selection_start = correction.cursor;
                self.selection_end = correction.cursor;

                let value = self.value();
                self.listeners.notify(&value);
                self.state = CycleState::Idle;
                Some(correction)
            }
        }
    }

    // -- controlled edits --

    /// Replaces `range` with what the key filter admits of `source`.
    ///
    /// The cursor lands after the inserted text, then moves with the
    /// correction. An edit that neither removes nor inserts anything is
    /// ignored.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidRange`] if `range` is inverted or extends past
    /// the end of the text.
    pub fn replace(&mut self, range: Range<usize>, source: &str) -> Result<(), EditError> {
        let before = Snapshot::new(self.text.clone(), range.start, range.end);
        self.apply(before, range, source)
    }

    /// Replaces the selection with `source`.
    pub fn insert(&mut self, source: &str) -> Result<(), EditError> {
        let before = self.snapshot();
        let range = self.selection_range();
        self.apply(before, range, source)
    }

    /// Types `text` one char at a time, one edit per char.
    pub fn type_text(&mut self, text: &str) -> Result<(), EditError> {
        let mut buf = [0u8; 4];
        for c in text.chars() {
            self.insert(c.encode_utf8(&mut buf))?;
        }
        Ok(())
    }

    /// Pastes `text` over the selection as a single edit.
    pub fn paste(&mut self, text: &str) -> Result<(), EditError> {
        self.insert(text)
    }

    /// Removes the selection, or the char before the cursor.
    ///
    /// Removing a separator this way removes the digit before it too.
    pub fn delete_backward(&mut self) -> Result<(), EditError> {
        let before = self.snapshot();
        let range = if before.has_range_selection() {
            self.selection_range()
        } else if self.selection_end == 0 {
            return Ok(());
        } else {
            self.selection_end - 1..self.selection_end
        };
        self.apply(before, range, "")
    }

    /// Removes the selection, or the char after the cursor.
    pub fn delete_forward(&mut self) -> Result<(), EditError> {
        let before = self.snapshot();
        let range = if before.has_range_selection() {
            self.selection_range()
        } else if self.selection_end >= self.len() {
            return Ok(());
        } else {
            self.selection_end..self.selection_end + 1
        };
        self.apply(before, range, "")
    }

    /// Replaces the whole text, as a host assigning the field would.
    pub fn set_text(&mut self, text: &str) -> Result<(), EditError> {
        let length = self.len();
        self.replace(0..length, text)
    }

    /// Empties the field.
    pub fn clear(&mut self) -> Result<(), EditError> {
        self.set_text("")
    }

    fn apply(&mut self, before: Snapshot, range: Range<usize>, source: &str) -> Result<(), EditError> {
        let span = filter(&self.mask, source, &self.text, range.clone())?;
        if span.is_empty() && range.is_empty() {
            trace!(position = range.start, "edit filtered out");
            return Ok(());
        }

        self.begin_edit(before)?;

        let mut text = String::with_capacity(self.text.len() + span.len());
        text.extend(self.text.chars().take(range.start));
        text.push_str(&span);
        text.extend(self.text.chars().skip(range.end));
        let cursor = range.start + span.chars().count();

        self.end_edit(Snapshot::collapsed(text, cursor))?;
        Ok(())
    }

    // -- cursor movement --

    /// Sets the selection without editing.
    ///
    /// # Errors
    ///
    /// [`EditError::SelectionOutOfBounds`] if either end lies past the text.
    pub fn set_selection(&mut self, start: usize, end: usize) -> Result<(), EditError> {
        let length = self.len();
        if start > length || end > length {
            return Err(EditError::SelectionOutOfBounds { start, end, length });
        }
        self.selection_start = start;
        self.selection_end = end;
        Ok(())
    }

    /// Collapses the selection to `index`.
    pub fn set_cursor(&mut self, index: usize) -> Result<(), EditError> {
        self.set_selection(index, index)
    }

    /// Moves the cursor one char left, or to the start of the selection.
    pub fn move_left(&mut self) {
        let target = if self.selection_start != self.selection_end {
            self.selection_start.min(self.selection_end)
        } else {
            self.selection_end.saturating_sub(1)
        };
        self.collapse(target);
    }

    /// Moves the cursor one char right, or to the end of the selection.
    pub fn move_right(&mut self) {
        let target = if self.selection_start != self.selection_end {
            self.selection_start.max(self.selection_end)
        } else {
            (self.selection_end + 1).min(self.len())
        };
        self.collapse(target);
    }

    /// Moves the cursor before the first char.
    pub fn move_to_start(&mut self) {
        self.collapse(0);
    }

    /// Moves the cursor after the last char.
    pub fn move_to_end(&mut self) {
        let length = self.len();
        self.collapse(length);
    }

    fn collapse(&mut self, index: usize) {
        self.selection_start = index;
        self.selection_end = index;
    }

    fn selection_range(&self) -> Range<usize> {
        let start = self.selection_start.min(self.selection_end);
        let end = self.selection_start.max(self.selection_end);
        start..end
    }

    fn replace_text(&mut self, text: String) {
        let mut old = std::mem::replace(&mut self.text, text);
        old.zeroize();
    }
}

fn check_selection(snapshot: &Snapshot) -> Result<(), EditError> {
    if snapshot.selection_in_bounds() {
        return Ok(());
    }
    warn!(
        selection_start = snapshot.selection_start,
        selection_end = snapshot.selection_end,
        length = snapshot.len(),
        "selection outside text"
    );
    Err(EditError::SelectionOutOfBounds {
        start: snapshot.selection_start,
        end: snapshot.selection_end,
        length: snapshot.len(),
    })
}

impl<M: InputMask + Default> Default for MaskedField<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<M: InputMask + fmt::Debug> fmt::Debug for MaskedField<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedField")
            .field("mask", &self.mask)
            .field("text", &self.mask.redact(&self.text))
            .field("selection", &(self.selection_start, self.selection_end))
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<M: InputMask> Drop for MaskedField<M> {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}

impl MaskedField<NumberMask> {
    /// Returns the brand the current digits classify as.
    pub fn brand(&self) -> CardBrand {
        crate::detect::classify(&self.digits())
    }

    /// Returns the digits and brand.
    pub fn number(&self) -> CardNumber {
        self.value()
    }
}

impl MaskedField<DateMask> {
    /// Returns the month and year typed so far.
    pub fn date(&self) -> CardDate {
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn number_field(text: &str, cursor: usize) -> NumberField {
        let mut field = NumberField::default();
        field.set_text(text).unwrap();
        assert_eq!(field.text(), text);
        field.set_cursor(cursor).unwrap();
        field
    }

    fn date_field(text: &str, cursor: usize) -> DateField {
        let mut field = DateField::default();
        field.set_text(text).unwrap();
        assert_eq!(field.text(), text);
        field.set_cursor(cursor).unwrap();
        field
    }

    fn record<M: InputMask>(field: &mut MaskedField<M>) -> Rc<RefCell<Vec<M::Value>>>
    where
        M::Value: Clone + 'static,
    {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.add_listener(move |value: &M::Value| sink.borrow_mut().push(value.clone()));
        seen
    }

    #[test]
    fn test_typing_groups_digits() {
        let mut field = NumberField::default();
        field.type_text("4242").unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242", 4));

        field.type_text("1").unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1", 6));
    }

    #[test]
    fn test_paste_into_empty_field() {
        let mut field = NumberField::default();
        field.paste("424211102222").unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1110 2222", 14));
    }

    #[test]
    fn test_insert_before_separator() {
        let mut field = number_field("4242 1110 2222", 9);
        field.type_text("3").unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1110 3222 2", 11));
    }

    #[test]
    fn test_overflowing_paste() {
        let mut field = NumberField::default();
        field.type_text("4").unwrap();
        field.paste("2421110222255549").unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1110 2222 5554", 19));
    }

    #[test]
    fn test_typing_past_maximum_is_ignored() {
        let mut field = number_field("4242 4242 4242 4242", 19);
        let seen = record(&mut field);
        field.type_text("5").unwrap();
        assert_eq!(field.text(), "4242 4242 4242 4242");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_delete_last_digit_of_group() {
        let mut field = number_field("4242 1110 2", 11);
        field.delete_backward().unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1110", 9));
    }

    #[test]
    fn test_delete_separator_takes_previous_digit() {
        let mut field = number_field("4242 1110 2", 10);
        field.delete_backward().unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1112", 8));
    }

    #[test]
    fn test_delete_at_start_is_ignored() {
        let mut field = number_field("4242", 0);
        field.delete_backward().unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242", 0));
    }

    #[test]
    fn test_delete_selection() {
        let mut field = number_field("4242 1110 2222", 0);
        field.set_selection(5, 9).unwrap();
        field.delete_backward().unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 2222", 5));
    }

    #[test]
    fn test_delete_forward() {
        let mut field = number_field("4242 1110", 5);
        field.delete_forward().unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 110", 5));

        let mut field = number_field("4242 1110", 9);
        field.delete_forward().unwrap();
        assert_eq!(field.text(), "4242 1110");
    }

    #[test]
    fn test_space_on_separator_moves_cursor() {
        let mut field = number_field("4242 1110 2222", 9);
        field.type_text(" ").unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1110 2222", 10));
    }

    #[test]
    fn test_space_elsewhere_is_ignored() {
        for cursor in [0, 5, 7] {
            let mut field = number_field("4242 1110 2222", cursor);
            let seen = record(&mut field);
            field.type_text(" ").unwrap();
            assert_eq!((field.text(), field.cursor()), ("4242 1110 2222", cursor));
            assert!(seen.borrow().is_empty());
        }
    }

    #[test]
    fn test_space_at_end() {
        let mut field = number_field("4242 1110 2222", 14);
        field.type_text(" ").unwrap();
        assert_eq!((field.text(), field.cursor()), ("4242 1110 2222", 14));
    }

    #[test]
    fn test_letters_are_ignored() {
        let mut field = NumberField::default();
        field.type_text("4a2b4c2").unwrap();
        assert_eq!(field.text(), "4242");
    }

    #[test]
    fn test_brand_changes_grouping() {
        let mut field = NumberField::default();
        field.type_text("3").unwrap();
        assert_eq!(field.brand(), CardBrand::Unknown);
        field.type_text("78282246310005").unwrap();
        assert_eq!(field.text(), "3782 822463 10005");
        assert_eq!(field.brand(), CardBrand::AmericanExpress);
        assert!(field.is_complete());
    }

    #[test]
    fn test_set_text_notifies_once() {
        let mut field = NumberField::default();
        let seen = record(&mut field);
        field.set_text("4242424242424242").unwrap();

        assert_eq!(field.text(), "4242 4242 4242 4242");
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].number(), "4242424242424242");
        assert_eq!(seen[0].brand(), CardBrand::Visa);
    }

    #[test]
    fn test_one_notification_per_keystroke() {
        let mut field = NumberField::default();
        let seen = record(&mut field);
        field.type_text("42421").unwrap();
        let numbers: Vec<String> = seen.borrow().iter().map(|n| n.number().to_string()).collect();
        assert_eq!(numbers, vec!["4", "42", "424", "4242", "42421"]);
    }

    #[test]
    fn test_removed_listener_is_not_called() {
        let mut field = NumberField::default();
        let seen = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&seen);
        let id = field.add_listener(move |_: &CardNumber| *counter.borrow_mut() += 1);
        field.type_text("4").unwrap();
        assert!(field.remove_listener(id));
        assert!(!field.remove_listener(id));
        field.type_text("2").unwrap();
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_observed_edit() {
        let mut field = NumberField::default();
        let seen = record(&mut field);

        field.begin_edit(Snapshot::collapsed("4242", 4)).unwrap();
        assert!(matches!(field.state(), CycleState::Observing(_)));
        let correction = field.end_edit(Snapshot::collapsed("42421", 5)).unwrap();

        assert_eq!(
            correction,
            Some(Correction {
                text: "4242 1".into(),
                cursor: 6
            })
        );
        assert_eq!(field.text(), "4242 1");
        assert_eq!(field.state(), &CycleState::Idle);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_observed_edit_that_settles() {
        let mut field = NumberField::default();
        field.begin_edit(Snapshot::collapsed("424", 3)).unwrap();
        assert_eq!(field.end_edit(Snapshot::collapsed("4242", 4)).unwrap(), None);
        assert_eq!((field.text(), field.cursor()), ("4242", 4));
    }

    #[test]
    fn test_observed_paste_with_dashes() {
        let mut field = NumberField::default();
        let seen = record(&mut field);

        field.begin_edit(Snapshot::collapsed("", 0)).unwrap();
        let correction = field
            .end_edit(Snapshot::collapsed("4242-4242-4242-4242", 19))
            .unwrap();

        assert_eq!(correction.map(|c| c.cursor), Some(19));
        assert_eq!(field.text(), "4242 4242 4242 4242");
        assert_eq!(field.digits(), "4242424242424242");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_edits_resume_after_correction() {
        let mut field = NumberField::default();
        field.begin_edit(Snapshot::collapsed("4242", 4)).unwrap();
        field.end_edit(Snapshot::collapsed("42421", 5)).unwrap();
        assert_eq!(field.state(), &CycleState::Idle);

        field.begin_edit(Snapshot::collapsed("4242 1", 6)).unwrap();
        assert!(matches!(field.state(), CycleState::Observing(_)));
        field.end_edit(Snapshot::collapsed("4242 12", 7)).unwrap();

        field.type_text("3").unwrap();
        assert_eq!(field.text(), "4242 123");
        assert_eq!(field.state(), &CycleState::Idle);
    }

    #[test]
    fn test_end_edit_without_begin() {
        let mut field = NumberField::default();
        assert_eq!(
            field.end_edit(Snapshot::collapsed("4", 1)),
            Err(EditError::NotObserving)
        );
    }

    #[test]
    fn test_selection_out_of_bounds() {
        let mut field = NumberField::default();
        assert_eq!(
            field.begin_edit(Snapshot::collapsed("4242", 9)),
            Err(EditError::SelectionOutOfBounds {
                start: 9,
                end: 9,
                length: 4
            })
        );
        assert!(field.set_cursor(1).is_err());
        assert!(field.replace(0..3, "4").is_err());
    }

    #[test]
    fn test_cursor_movement() {
        let mut field = number_field("4242 1", 6);
        field.move_left();
        assert_eq!(field.cursor(), 5);
        field.move_to_start();
        field.move_left();
        assert_eq!(field.cursor(), 0);
        field.move_right();
        assert_eq!(field.cursor(), 1);
        field.move_to_end();
        field.move_right();
        assert_eq!(field.cursor(), 6);

        field.set_selection(1, 3).unwrap();
        field.move_left();
        assert_eq!(field.selection(), (1, 1));
        field.set_selection(3, 1).unwrap();
        field.move_right();
        assert_eq!(field.selection(), (3, 3));
    }

    #[test]
    fn test_clear() {
        let mut field = number_field("4242 1", 6);
        let seen = record(&mut field);
        field.clear().unwrap();
        assert_eq!((field.text(), field.cursor()), ("", 0));
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].is_empty());
    }

    #[test]
    fn test_debug_is_redacted() {
        let field = number_field("4242 4242 4242 4242", 19);
        let debug = format!("{:?}", field);
        assert!(!debug.contains("4242 4242"));
        assert!(debug.contains("**** 4242"));
    }

    #[test]
    fn test_date_typing() {
        let mut field = DateField::default();
        field.type_text("011").unwrap();
        assert_eq!((field.text(), field.cursor()), ("01/1", 4));
        assert_eq!(field.date(), CardDate::new("01", "1"));
    }

    #[test]
    fn test_date_delete() {
        let mut field = date_field("01/2", 4);
        field.delete_backward().unwrap();
        assert_eq!((field.text(), field.cursor()), ("01", 2));

        let mut field = date_field("01/2", 3);
        field.delete_backward().unwrap();
        assert_eq!((field.text(), field.cursor()), ("02", 1));
    }

    #[test]
    fn test_date_insert_before_separator() {
        let mut field = date_field("01/2", 2);
        field.type_text("3").unwrap();
        assert_eq!((field.text(), field.cursor()), ("01/32", 4));
    }

    #[test]
    fn test_date_overflowing_paste() {
        let mut field = DateField::default();
        field.type_text("0").unwrap();
        field.paste("1234").unwrap();
        assert_eq!((field.text(), field.cursor()), ("01/23", 5));
        assert!(field.is_complete());
    }

    #[test]
    fn test_date_slash() {
        let mut field = date_field("01/2", 2);
        field.type_text("/").unwrap();
        assert_eq!((field.text(), field.cursor()), ("01/2", 3));

        field.type_text("/").unwrap();
        assert_eq!((field.text(), field.cursor()), ("01/2", 3));

        let mut field = date_field("01/2", 1);
        field.type_text("/").unwrap();
        assert_eq!((field.text(), field.cursor()), ("01/2", 1));

        let mut field = date_field("01/23", 5);
        field.type_text("/").unwrap();
        assert_eq!((field.text(), field.cursor()), ("01/23", 5));
    }

    #[test]
    fn test_date_month_rules() {
        let mut field = DateField::default();
        field.set_text("13").unwrap();
        assert_eq!(field.text(), "1");

        field.set_text("00").unwrap();
        assert_eq!(field.text(), "0");

        field.set_text("2").unwrap();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_date_notifications() {
        let mut field = DateField::default();
        let seen = record(&mut field);
        field.type_text("1230").unwrap();
        let last = seen.borrow().last().cloned();
        assert_eq!(last, Some(CardDate::new("12", "30")));
        assert_eq!(seen.borrow().len(), 4);
    }
}
