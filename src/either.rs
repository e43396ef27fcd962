use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator for committed choice between two parsers
///
/// The second parser only runs when the first fails without consuming
/// input. Once the first parser has moved the cursor it has committed to
/// its branch, and its error is returned with the cursor left where it
/// failed. Wrap the first parser in [`attempt`](crate::attempt::attempt) to
/// backtrack over partial matches.
pub struct Either<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Either<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Either { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Either<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let start = cursor.pos();
        match self.parser1.parse(cursor) {
            Ok(value) => Ok(value),
            Err(_) if cursor.pos() == start => self.parser2.parse(cursor),
            Err(error) => {
                log_trace!(
                    "either committed: first branch consumed {}..{} before failing",
                    start,
                    cursor.pos()
                );
                Err(error)
            }
        }
    }
}

/// Try `parser1`; if it fails without consuming input, try `parser2`
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::is_string;
///
/// // "for" and "fun" share a prefix, so the first branch must backtrack.
/// let keyword = either(attempt(is_string("for")), is_string("fun"));
/// let mut cursor = TextCursor::new("fun");
/// assert_eq!(keyword.parse(&mut cursor).unwrap(), "fun");
/// ```
pub fn either<P1, P2>(parser1: P1, parser2: P2) -> Either<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    Either::new(parser1, parser2)
}

/// Extension trait to add .either() method support for parsers
pub trait EitherExt: Parser + Sized {
    fn either<P>(self, other: P) -> Either<Self, P>
    where
        P: Parser<Cursor = Self::Cursor, Output = Self::Output>,
    {
        Either::new(self, other)
    }
}

impl<P: Parser> EitherExt for P {}
