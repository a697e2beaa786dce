//! Edit scripts: keystroke sequences written as text.
//!
//! A script is a whitespace-separated list of edits, replayed against a
//! field in order. Scripts drive the `ccmask replay` command, the
//! integration tests and the fuzz targets.
//!
//! | Token | Edit |
//! |-------|------|
//! | `type:4242` | type each char |
//! | `paste:4242` | paste as one edit |
//! | `del`, `backspace` | delete backward |
//! | `fdel`, `delete` | delete forward |
//! | `left`, `left:3` | move left |
//! | `right`, `right:3` | move right |
//! | `home`, `end` | move to start / end |
//! | `select:2-5` | select a range |
//! | `set:4242` | replace the whole text |
//! | `clear` | empty the field |
//!
//! In values `_` stands for a space, so `type:_` types the number separator.
//!
//! # Example
//!
//! ```
//! use cc_input_mask::script::{parse_script, render_cursor, replay};
//! use cc_input_mask::NumberField;
//!
//! let events = parse_script("paste:424211102222 left:5 type:3").unwrap();
//! let mut field = NumberField::default();
//! let values = replay(&mut field, &events).unwrap();
//!
//! assert_eq!(render_cursor(field.text(), field.cursor()), "4242 1110 3<>222 2");
//! assert_eq!(values.len(), 2);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::EditError;
use crate::field::MaskedField;
use crate::mask::InputMask;

/// One step of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum EditEvent {
    /// Type each char as its own edit.
    Type(String),
    /// Paste over the selection as one edit.
    Paste(String),
    /// Delete the selection or the char before the cursor.
    Backspace,
    /// Delete the selection or the char after the cursor.
    Delete,
    /// Move the cursor left this many times.
    Left(usize),
    /// Move the cursor right this many times.
    Right(usize),
    /// Move the cursor to the start.
    Home,
    /// Move the cursor to the end.
    End,
    /// Select from the first offset to the second.
    Select(usize, usize),
    /// Replace the whole text.
    SetText(String),
    /// Empty the field.
    Clear,
}

impl EditEvent {
    /// Applies this edit to `field`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying field operation reports.
    pub fn apply<M: InputMask>(&self, field: &mut MaskedField<M>) -> Result<(), EditError> {
        match self {
            Self::Type(text) => field.type_text(text),
            Self::Paste(text) => field.paste(text),
            Self::Backspace => field.delete_backward(),
            Self::Delete => field.delete_forward(),
            Self::Left(count) => {
                for _ in 0..*count {
                    field.move_left();
                }
                Ok(())
            }
            Self::Right(count) => {
                for _ in 0..*count {
                    field.move_right();
                }
                Ok(())
            }
            Self::Home => {
                field.move_to_start();
                Ok(())
            }
            Self::End => {
                field.move_to_end();
                Ok(())
            }
            Self::Select(start, end) => field.set_selection(*start, *end),
            Self::SetText(text) => field.set_text(text),
            Self::Clear => field.clear(),
        }
    }
}

impl fmt::Display for EditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(text) => write!(f, "type:{}", encode_value(text)),
            Self::Paste(text) => write!(f, "paste:{}", encode_value(text)),
            Self::Backspace => write!(f, "del"),
            Self::Delete => write!(f, "fdel"),
            Self::Left(1) => write!(f, "left"),
            Self::Left(count) => write!(f, "left:{}", count),
            Self::Right(1) => write!(f, "right"),
            Self::Right(count) => write!(f, "right:{}", count),
            Self::Home => write!(f, "home"),
            Self::End => write!(f, "end"),
            Self::Select(start, end) => write!(f, "select:{}-{}", start, end),
            Self::SetText(text) => write!(f, "set:{}", encode_value(text)),
            Self::Clear => write!(f, "clear"),
        }
    }
}

/// Parses a whitespace-separated edit script.
///
/// # Errors
///
/// [`EditError::Script`] naming the first token that is not understood.
pub fn parse_script(script: &str) -> Result<Vec<EditEvent>, EditError> {
    script
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            parse_event(token).ok_or_else(|| EditError::Script {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses a single token, or `None` if it is not an edit.
pub fn parse_event(token: &str) -> Option<EditEvent> {
    let (name, value) = match token.split_once(':') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    };

    let event = match (name, value) {
        ("type", Some(text)) if !text.is_empty() => EditEvent::Type(decode_value(text)),
        ("paste", Some(text)) if !text.is_empty() => EditEvent::Paste(decode_value(text)),
        ("set", Some(text)) => EditEvent::SetText(decode_value(text)),
        ("del" | "backspace", None) => EditEvent::Backspace,
        ("fdel" | "delete", None) => EditEvent::Delete,
        ("left", None) => EditEvent::Left(1),
        ("left", Some(count)) => EditEvent::Left(count.parse().ok()?),
        ("right", None) => EditEvent::Right(1),
        ("right", Some(count)) => EditEvent::Right(count.parse().ok()?),
        ("home", None) => EditEvent::Home,
        ("end", None) => EditEvent::End,
        ("clear", None) => EditEvent::Clear,
        ("select", Some(range)) => {
            let (start, end) = range.split_once('-')?;
            EditEvent::Select(start.parse().ok()?, end.parse().ok()?)
        }
        _ => return None,
    };
    Some(event)
}

fn decode_value(text: &str) -> String {
    text.replace('_', " ")
}

fn encode_value(text: &str) -> String {
    text.replace(' ', "_")
}

/// Iterator that applies edits to a field one at a time.
///
/// Yields the field text after each edit, or the error that stopped it.
/// Created by [`ReplayExt::replay_on`].
pub struct Replay<'a, M: InputMask, I> {
    field: &'a mut MaskedField<M>,
    events: I,
}

impl<'a, M, I, E> Iterator for Replay<'a, M, I>
where
    M: InputMask,
    I: Iterator<Item = E>,
    E: std::borrow::Borrow<EditEvent>,
{
    type Item = Result<String, EditError>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.next()?;
        Some(
            std::borrow::Borrow::borrow(&event)
                .apply(self.field)
                .map(|()| self.field.text().to_string()),
        )
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.events.size_hint()
    }
}

/// Extension trait for replaying any iterator of edits.
pub trait ReplayExt: Iterator + Sized {
    /// Applies each edit to `field` as the iterator advances.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_input_mask::script::{parse_script, ReplayExt};
    /// use cc_input_mask::DateField;
    ///
    /// let mut field = DateField::default();
    /// let texts: Vec<_> = parse_script("type:0 type:1 type:2")
    ///     .unwrap()
    ///     .into_iter()
    ///     .replay_on(&mut field)
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    ///
    /// assert_eq!(texts, vec!["0", "01", "01/2"]);
    /// ```
    fn replay_on<M: InputMask>(self, field: &mut MaskedField<M>) -> Replay<'_, M, Self>;
}

impl<I: Iterator + Sized> ReplayExt for I {
    #[inline]
    fn replay_on<M: InputMask>(self, field: &mut MaskedField<M>) -> Replay<'_, M, Self> {
        Replay {
            field,
            events: self,
        }
    }
}

/// Applies `events` to `field` and returns every value its listeners saw.
///
/// # Errors
///
/// The first error a field operation reports; the field keeps the edits
/// applied before it.
pub fn replay<M>(field: &mut MaskedField<M>, events: &[EditEvent]) -> Result<Vec<M::Value>, EditError>
where
    M: InputMask,
    M::Value: Clone + 'static,
{
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = field.add_listener(move |value: &M::Value| sink.borrow_mut().push(value.clone()));

    let result = events.iter().replay_on(field).try_for_each(|step| step.map(drop));
    field.remove_listener(id);
    result?;

    let values = RefCell::borrow(&seen).clone();
    Ok(values)
}

/// Renders `text` with `<>` at the cursor.
///
/// # Example
///
/// ```
/// use cc_input_mask::script::render_cursor;
///
/// assert_eq!(render_cursor("4242 1110 3222 2", 11), "4242 1110 3<>222 2");
/// ```
pub fn render_cursor(text: &str, cursor: usize) -> String {
    render_selection(text, cursor, cursor)
}

/// Renders `text` with `<` at the selection start and `>` at its end.
///
/// Offsets past the end of the text are drawn at the end.
pub fn render_selection(text: &str, start: usize, end: usize) -> String {
    let (start, end) = (start.min(end), start.max(end));
    let mut out = String::with_capacity(text.len() + 2);
    let mut length = 0;
    for (index, c) in text.chars().enumerate() {
        if index == start {
            out.push('<');
        }
        if index == end {
            out.push('>');
        }
        out.push(c);
        length = index + 1;
    }
    if start >= length {
        out.push('<');
    }
    if end >= length {
        out.push('>');
    }
    out
}
