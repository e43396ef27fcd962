use crate::cursor::{Cursor, Next, check_seek};
use crate::element::Element;
use crate::error::{Location, ParseError};

/// Cursor over a borrowed slice of arbitrary tokens
///
/// Token streams carry no line structure, so every position is reported
/// on line 1 with the column set to `pos + 1`.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'code, T: Element> {
    data: &'code [T],
    position: usize,
}

impl<'code, T: Element> TokenCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        TokenCursor { data, position: 0 }
    }

    pub fn source(&self) -> &'code [T] {
        self.data
    }

    /// The unread part of the input
    pub fn remaining(&self) -> &'code [T] {
        &self.data[self.position..]
    }
}

impl<'code, T: Element> Cursor for TokenCursor<'code, T> {
    type Element = T;

    fn next<F>(&mut self, predicate: F) -> Result<Next<T>, ParseError>
    where
        F: FnOnce(&T) -> bool,
    {
        let Some(token) = self.data.get(self.position) else {
            return Err(self.unexpected_end());
        };

        if predicate(token) {
            self.position += 1;
            Ok(Next::Matched(token.clone()))
        } else {
            Ok(Next::Rejected(token.clone()))
        }
    }

    fn pos(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn seek_to(&mut self, pos: usize) {
        check_seek(pos, self.data.len());
        log_trace!("token cursor seek {} -> {}", self.position, pos);
        self.position = pos;
    }

    fn location(&self, pos: usize) -> Location {
        Location {
            line: 1,
            column: pos + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations_u32() {
        let data = [1u32, 2, 3];
        let mut cursor = TokenCursor::new(&data);

        assert_eq!(cursor.next(|t| *t == 1), Ok(Next::Matched(1)));
        assert_eq!(cursor.next(|t| *t == 1), Ok(Next::Rejected(2)));
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.remaining(), &[2, 3]);
        assert_eq!(cursor.source(), &[1, 2, 3]);
    }

    #[test]
    fn test_end_of_input_u32() {
        let data = [10u32];
        let mut cursor = TokenCursor::new(&data);
        assert!(cursor.next(|_| true).is_ok());

        let error = cursor.next(|_| true).unwrap_err();
        assert!(error.is_end_of_input());
        assert_eq!(error.position, 1);
        assert_eq!((error.line, error.column), (1, 2));
    }

    #[test]
    fn test_empty_data() {
        let data: [u32; 0] = [];
        let mut cursor = TokenCursor::new(&data);
        assert!(cursor.is_empty());
        assert!(cursor.is_at_end());
        assert!(cursor.next(|_| true).is_err());
    }

    #[test]
    fn test_string_tokens() {
        let data = ["from", "now"];
        let mut cursor = TokenCursor::new(&data);
        assert_eq!(cursor.next(|t| *t == "from"), Ok(Next::Matched("from")));
        assert_eq!(cursor.next(|t| *t == "from"), Ok(Next::Rejected("now")));
    }

    #[test]
    fn test_seek_and_trap() {
        let data = [5u32, 10, 15, 20];
        let mut cursor = TokenCursor::new(&data);
        for _ in 0..3 {
            assert!(cursor.next(|_| true).is_ok());
        }

        cursor.seek_to(1);
        assert_eq!(cursor.next(|_| true), Ok(Next::Matched(10)));

        let error = cursor.trap("expected 20");
        assert_eq!(error.position, 2);
        assert_eq!(error.column, 3);
    }

    #[test]
    fn test_copies_are_independent() {
        let data = [5u32, 10];
        let mut cursor = TokenCursor::new(&data);
        let saved = cursor;
        assert!(cursor.next(|_| true).is_ok());
        assert_eq!(saved.pos(), 0);
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_seek_out_of_range_panics() {
        let data = [1u32];
        let mut cursor = TokenCursor::new(&data);
        cursor.seek_to(2);
    }
}
