use crate::element::Element;
use crate::error::{ErrorKind, Location, ParseError};

/// Outcome of offering the next element to a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next<T> {
    /// The predicate accepted the element and the cursor moved past it
    Matched(T),
    /// The predicate rejected the element and the cursor did not move
    Rejected(T),
}

/// A mutable read position over an immutable, fully materialized input
///
/// The cursor is the only mutable state shared by a parse run. It is
/// created once per run and handed to every parser as `&mut`, so exactly
/// one call chain can move it at a time.
///
/// The position only ever moves forward by a successful [`next`](Cursor::next)
/// or jumps back to a position previously read through [`pos`](Cursor::pos).
pub trait Cursor {
    /// The type of elements this cursor iterates over
    type Element: Element;

    /// Offer the element at the current position to `predicate`
    ///
    /// Advances by one element only when the predicate accepts it. Returns
    /// an end-of-input error when no element is left.
    fn next<F>(&mut self, predicate: F) -> Result<Next<Self::Element>, ParseError>
    where
        F: FnOnce(&Self::Element) -> bool;

    /// The next unread index, in `[0, len()]`
    fn pos(&self) -> usize;

    /// Number of elements in the input buffer
    fn len(&self) -> usize;

    /// Move the read position to `pos`
    ///
    /// # Panics
    ///
    /// Panics when `pos` lies outside `[0, len()]`. Seeking out of bounds is
    /// a bug in the calling parser, not a parse failure, so it is never
    /// turned into a [`ParseError`].
    fn seek_to(&mut self, pos: usize);

    /// Line and column of `pos`
    fn location(&self, pos: usize) -> Location;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_at_end(&self) -> bool {
        self.pos() >= self.len()
    }

    /// Build a mismatch error stamped with the current position
    fn trap(&self, message: impl Into<String>) -> ParseError {
        let pos = self.pos();
        ParseError::new(ErrorKind::Unexpected, pos, self.location(pos), message)
    }

    /// Build an end-of-input error stamped with the current position
    fn unexpected_end(&self) -> ParseError {
        let pos = self.pos();
        ParseError::new(
            ErrorKind::EndOfInput,
            pos,
            self.location(pos),
            "unexpected end of input",
        )
    }
}

/// Shared bounds check for [`Cursor::seek_to`] implementations
pub(crate) fn check_seek(pos: usize, len: usize) {
    if pos > len {
        panic!("seek position {} out of range [0, {}]", pos, len);
    }
}
