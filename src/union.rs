use crate::parser::{ParseResult, Parser};

/// Parser that runs a fixed list of parsers in order and collects every value
///
/// All parsers must succeed. The first failure is returned as is and
/// nothing already consumed is given back.
pub struct UnionAll<P> {
    parsers: Vec<P>,
}

impl<P: Parser> Parser for UnionAll<P> {
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        self.parsers.iter().map(|parser| parser.parse(cursor)).collect()
    }
}

/// Run every parser in sequence, keeping all values
pub fn union_all<P: Parser>(parsers: impl IntoIterator<Item = P>) -> UnionAll<P> {
    UnionAll {
        parsers: parsers.into_iter().collect(),
    }
}

/// Parser that runs a fixed list of optional-valued parsers and keeps
/// the values that are present
pub struct Union<P> {
    parsers: Vec<P>,
}

impl<P, T> Parser for Union<P>
where
    P: Parser<Output = Option<T>>,
{
    type Cursor = P::Cursor;
    type Output = Vec<T>;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Vec<T>> {
        let mut values = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            if let Some(value) = parser.parse(cursor)? {
                values.push(value);
            }
        }
        Ok(values)
    }
}

/// Run every parser in sequence, dropping `None` values
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::{is_char, letter};
///
/// let parser = union([
///     optional(is_char('@')).boxed(),
///     letter().map(Some).boxed(),
///     optional(is_char('!')).boxed(),
/// ]);
/// let mut cursor = TextCursor::new("x!");
/// assert_eq!(parser.parse(&mut cursor).unwrap(), vec!['x', '!']);
/// ```
pub fn union<P, T>(parsers: impl IntoIterator<Item = P>) -> Union<P>
where
    P: Parser<Output = Option<T>>,
{
    Union {
        parsers: parsers.into_iter().collect(),
    }
}
