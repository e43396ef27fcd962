use crate::bind::bind_discard;
use crate::cursor::Cursor;
use crate::many::repeat;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more items separated by a parser
///
/// After the first item, each further item is parsed as "separator, then
/// item". That pair stops the list cleanly only when it fails without
/// consuming anything. A separator that consumes input and is then not
/// followed by an item makes the whole list fail, so trailing separators
/// are an error.
pub struct SepBy1<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> Parser for SepBy1<P, S>
where
    P: Parser,
    S: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let mut values = vec![self.parser.parse(cursor)?];
        // An empty first item still starts the list; the separator moves on.
        let step = bind_discard(&self.separator, &self.parser);
        repeat(&step, cursor, |value| values.push(value))?;
        Ok(values)
    }
}

/// Match one or more `parser` items separated by `separator`
pub fn sep_by1<P, S>(parser: P, separator: S) -> SepBy1<P, S>
where
    P: Parser,
    S: Parser<Cursor = P::Cursor>,
{
    SepBy1 { parser, separator }
}

/// Parser combinator that matches zero or more items separated by a parser
pub struct SepBy<P, S> {
    inner: SepBy1<P, S>,
}

impl<P, S> Parser for SepBy<P, S>
where
    P: Parser,
    S: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let start = cursor.pos();
        match self.inner.parse(cursor) {
            Ok(values) => Ok(values),
            Err(_) if cursor.pos() == start => Ok(Vec::new()),
            Err(error) => Err(error),
        }
    }
}

/// Match zero or more `parser` items separated by `separator`
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::{digit, is_char};
///
/// let digits = sep_by(digit(), is_char(','));
/// let mut cursor = TextCursor::new("1,2,3");
/// assert_eq!(digits.parse(&mut cursor).unwrap(), vec!['1', '2', '3']);
/// ```
pub fn sep_by<P, S>(parser: P, separator: S) -> SepBy<P, S>
where
    P: Parser,
    S: Parser<Cursor = P::Cursor>,
{
    SepBy {
        inner: sep_by1(parser, separator),
    }
}
