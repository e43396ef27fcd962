use crate::cursor::{Cursor, Next};
use crate::element::Element;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that succeeds only when the input is exhausted
pub struct EndOfInput<C> {
    _cursor: PhantomData<fn(&mut C)>,
}

impl<C: Cursor> Parser for EndOfInput<C> {
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: &mut C) -> ParseResult<()> {
        // Peek with a predicate that never accepts, so nothing is consumed.
        match cursor.next(|_| false) {
            Err(error) if error.is_end_of_input() => Ok(()),
            Err(error) => Err(error),
            Ok(Next::Matched(element) | Next::Rejected(element)) => Err(cursor.trap(format!(
                "expected end of input but got {}",
                element.describe()
            ))),
        }
    }
}

/// Match the end of the input, consuming nothing either way
pub fn end_of_input<C: Cursor>() -> EndOfInput<C> {
    EndOfInput {
        _cursor: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{TextCursor, TokenCursor};

    #[test]
    fn test_end_of_input_on_empty() {
        let mut cursor = TextCursor::new("");
        assert_eq!(end_of_input().parse(&mut cursor), Ok(()));
    }

    #[test]
    fn test_end_of_input_after_consuming() {
        let data = [1u32];
        let mut cursor = TokenCursor::new(&data);
        cursor.seek_to(1);
        assert_eq!(end_of_input().parse(&mut cursor), Ok(()));
    }

    #[test]
    fn test_end_of_input_with_remaining_input() {
        let mut cursor = TextCursor::new("x");
        let error = end_of_input().parse(&mut cursor).unwrap_err();

        assert_eq!(error.message, "expected end of input but got 'x'");
        assert!(!error.is_end_of_input());
        assert_eq!(cursor.pos(), 0);
    }
}
