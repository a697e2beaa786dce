//! Error type for the masked input engine.
//!
//! Formatting itself never fails. Errors only describe calls that break a
//! precondition the host is responsible for: ranges outside the text, edit
//! cycles that are closed without being opened, unreadable edit scripts.

use std::fmt;

/// Errors reported by the field adapter, the key filter and the script parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// A replacement range is inverted or extends past the end of the text.
    InvalidRange {
        /// Start of the range (char index).
        start: usize,
        /// End of the range (char index).
        end: usize,
        /// Length of the text in chars.
        length: usize,
    },

    /// A selection points outside the text.
    SelectionOutOfBounds {
        /// Selection start (char index).
        start: usize,
        /// Selection end (char index).
        end: usize,
        /// Length of the text in chars.
        length: usize,
    },

    /// A digit cannot be used as a separator.
    InvalidSeparator(char),

    /// `end_edit` was called without a matching `begin_edit`.
    NotObserving,

    /// An edit script contains a token that is not understood.
    Script {
        /// Index of the token in the script (0-indexed).
        position: usize,
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end, length } => {
                write!(
                    f,
                    "invalid range {}..{} for text of {} chars",
                    start, end, length
                )
            }

            Self::SelectionOutOfBounds { start, end, length } => {
                write!(
                    f,
                    "selection {}..{} is outside text of {} chars",
                    start, end, length
                )
            }

            Self::InvalidSeparator(c) => {
                write!(
                    f,
                    "'{}' cannot be used as a separator (digits are reserved)",
                    c.escape_default()
                )
            }

            Self::NotObserving => write!(f, "no edit in progress"),

            Self::Script { position, token } => {
                write!(
                    f,
                    "unrecognized edit '{}' at position {}",
                    token.escape_default(),
                    position
                )
            }
        }
    }
}

impl std::error::Error for EditError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EditError::InvalidRange {
                start: 4,
                end: 2,
                length: 9
            }
            .to_string(),
            "invalid range 4..2 for text of 9 chars"
        );

        assert_eq!(
            EditError::InvalidSeparator('7').to_string(),
            "'7' cannot be used as a separator (digits are reserved)"
        );

        assert_eq!(EditError::NotObserving.to_string(), "no edit in progress");

        assert_eq!(
            EditError::Script {
                position: 2,
                token: "jump".into()
            }
            .to_string(),
            "unrecognized edit 'jump' at position 2"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EditError>();
    }
}
