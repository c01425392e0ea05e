//! Error types for [`UniqueSequence`](super::UniqueSequence).
//!
//! Only the positional accessors and the strict moves can fail. Every failing
//! call leaves the sequence exactly as it was.

/// Identifies which argument of a strict move was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The element being moved.
    Element,
    /// The element the move is relative to.
    Anchor,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element => write!(formatter, "element"),
            Self::Anchor => write!(formatter, "anchor"),
        }
    }
}

/// Represents errors raised by [`UniqueSequence`](super::UniqueSequence).
///
/// # Examples
///
/// ```rust
/// use unique_sequence::{SequenceError, UniqueSequence};
///
/// let sequence: UniqueSequence<i32> = UniqueSequence::new();
/// assert_eq!(sequence.first(), Err(SequenceError::EmptyContainer));
/// assert_eq!(
///     format!("{}", sequence.element_at(3).unwrap_err()),
///     "index 3 is out of range for a sequence of length 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// `first` or `last` was called on an empty sequence.
    EmptyContainer,
    /// `element_at` was called with a position past the end.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },
    /// `move_after` or `move_before` referenced an absent value.
    ElementNotFound {
        /// The argument that was absent. The moved element is checked first.
        operand: Operand,
    },
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContainer => write!(formatter, "sequence is empty"),
            Self::IndexOutOfRange { index, len } => write!(
                formatter,
                "index {index} is out of range for a sequence of length {len}"
            ),
            Self::ElementNotFound { operand } => {
                write!(formatter, "{operand} is not present in the sequence")
            }
        }
    }
}

impl std::error::Error for SequenceError {}
