use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<U> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<P: Parser> MapExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::{TextCursor, TokenCursor};
    use crate::satisfy::{any_element, is_element};

    #[derive(Debug, PartialEq)]
    enum Value {
        Letter(char),
        Number(u32),
    }

    #[test]
    fn test_map_to_enum() {
        let mut cursor = TextCursor::new("X");
        let parser = is_element('X').map(Value::Letter);
        assert_eq!(parser.parse(&mut cursor), Ok(Value::Letter('X')));
    }

    #[test]
    fn test_map_chaining() {
        let data = [5u32];
        let mut cursor = TokenCursor::new(&data);
        let parser = any_element()
            .map(|n: u32| n * 2)
            .map(Value::Number);

        assert_eq!(parser.parse(&mut cursor), Ok(Value::Number(10)));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn test_map_preserves_errors() {
        let mut cursor = TextCursor::new("xyz");
        let parser = map(is_element('A'), |c: char| c.to_ascii_lowercase());
        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.message, "expected 'A' but got 'x'");
    }
}
