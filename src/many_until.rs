use crate::attempt::Attempt;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that collects items until a terminator matches
///
/// Before every item the terminator is tried with a full rewind on
/// failure. When it matches, it is consumed and the collected items are
/// returned; the terminator's own value is dropped. Otherwise one item is
/// parsed, and a failing item fails the whole parser.
pub struct ManyUntil<P, E> {
    parser: P,
    end: Attempt<E>,
}

impl<P, E> Parser for ManyUntil<P, E>
where
    P: Parser,
    E: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let mut values = Vec::new();
        loop {
            if self.end.parse(cursor).is_ok() {
                return Ok(values);
            }

            let start = cursor.pos();
            values.push(self.parser.parse(cursor)?);
            if cursor.pos() == start {
                // The terminator already failed here; looping again would
                // see the same input forever.
                return Err(cursor.trap("item parser made no progress before the terminator"));
            }
        }
    }
}

/// Match `parser` repeatedly until `end` matches
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::is_string;
///
/// let body = many_until(any_element(), is_string("END"));
/// let mut cursor = TextCursor::new("abcEND");
/// assert_eq!(body.parse(&mut cursor).unwrap(), vec!['a', 'b', 'c']);
/// assert_eq!(cursor.pos(), 6);
/// ```
pub fn many_until<P, E>(parser: P, end: E) -> ManyUntil<P, E>
where
    P: Parser,
    E: Parser<Cursor = P::Cursor>,
{
    ManyUntil {
        parser,
        end: Attempt::new(end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindExt;
    use crate::cursors::{TextCursor, TokenCursor};
    use crate::end_of_input::end_of_input;
    use crate::option::maybe;
    use crate::satisfy::{any_element, is_element};

    #[test]
    fn test_many_until_immediate_terminator() {
        let data = [0u32, 1];
        let mut cursor = TokenCursor::new(&data);
        let parser = many_until(any_element(), is_element(0));
        assert_eq!(parser.parse(&mut cursor), Ok(vec![]));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn test_many_until_partial_terminator_is_rewound() {
        // "-x" starts like the "--" terminator but is ordinary content.
        let mut cursor = TextCursor::new("a-x--");
        let terminator = is_element('-').bind_discard(is_element('-'));
        let parser = many_until(any_element(), terminator);

        assert_eq!(parser.parse(&mut cursor), Ok(vec!['a', '-', 'x']));
        assert_eq!(cursor.pos(), 5);
    }

    #[test]
    fn test_many_until_end_of_input_terminator() {
        let mut cursor = TextCursor::new("xyz");
        let parser = many_until(any_element(), end_of_input());
        assert_eq!(parser.parse(&mut cursor), Ok(vec!['x', 'y', 'z']));
    }

    #[test]
    fn test_many_until_missing_terminator() {
        let mut cursor = TextCursor::new("abc");
        let parser = many_until(any_element(), is_element(';'));

        let error = parser.parse(&mut cursor).unwrap_err();
        assert!(error.is_end_of_input());
        assert_eq!(error.position, 3);
    }

    #[test]
    fn test_many_until_item_failure_propagates() {
        let mut cursor = TextCursor::new("aab;");
        let parser = many_until(is_element('a'), is_element(';'));

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.message, "expected 'a' but got 'b'");
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_many_until_rejects_non_consuming_items() {
        let mut cursor = TextCursor::new("ab");
        let parser = many_until(maybe(is_element('x')), is_element(';'));

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.position, 0);
    }

    #[test]
    fn test_many_until_long_input() {
        let input = format!("{};", "a".repeat(100_000));
        let mut cursor = TextCursor::new(&input);
        let parser = many_until(any_element(), is_element(';'));
        assert_eq!(parser.parse(&mut cursor).map(|v| v.len()), Ok(100_000));
    }
}
