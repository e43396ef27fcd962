use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Drive `parser` repeatedly, handing each value to `sink`
///
/// Stops cleanly when `parser` fails without consuming input, which is the
/// same rule [`either`](crate::either::either) uses to fall back. A failure
/// after consumption is returned as is. A success that consumed nothing
/// would repeat forever, so the loop records that value and stops.
pub(crate) fn repeat<P, F>(parser: &P, cursor: &mut P::Cursor, mut sink: F) -> ParseResult<()>
where
    P: Parser,
    F: FnMut(P::Output),
{
    loop {
        let start = cursor.pos();
        match parser.parse(cursor) {
            Ok(value) => {
                sink(value);
                if cursor.pos() == start {
                    log_trace!("repetition made no progress at {}, stopping", start);
                    return Ok(());
                }
            }
            Err(_) if cursor.pos() == start => return Ok(()),
            Err(error) => return Err(error),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// The inner parser must fail without consuming input on the repetition
/// that ends the loop. A parser that can fail part way (a sequence, say)
/// makes `Many` fail too, unless it is wrapped in
/// [`attempt`](crate::attempt::attempt).
pub struct Many<P> {
    parser: P,
}

impl<P: Parser> Parser for Many<P> {
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let mut values = Vec::new();
        repeat(&self.parser, cursor, |value| values.push(value))?;
        Ok(values)
    }
}

/// Match `parser` zero or more times, collecting the values in order
pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many { parser }
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P: Parser> Parser for Many1<P> {
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let start = cursor.pos();
        let mut values = vec![self.parser.parse(cursor)?];
        if cursor.pos() != start {
            repeat(&self.parser, cursor, |value| values.push(value))?;
        }
        Ok(values)
    }
}

/// Match `parser` one or more times, collecting the values in order
///
/// Fails with the first repetition's error when there is no match at all.
pub fn many1<P: Parser>(parser: P) -> Many1<P> {
    Many1 { parser }
}

/// Parser combinator that matches zero or more occurrences and drops the values
pub struct SkipMany<P> {
    parser: P,
}

impl<P: Parser> Parser for SkipMany<P> {
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<()> {
        repeat(&self.parser, cursor, drop)
    }
}

/// Skip over zero or more matches of `parser`
pub fn skip_many<P: Parser>(parser: P) -> SkipMany<P> {
    SkipMany { parser }
}
