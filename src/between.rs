use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, then `content`, then `close`, and returns just the
/// content value. No stage rewinds on failure; wrap the whole `Between` in
/// [`attempt`](crate::attempt::attempt) when the bracketed form is one of
/// several alternatives.
///
/// # Examples
/// - `"(123)"` → `"123"`
/// - `"[entry]"` → `"entry"`
pub struct Between<O, C, P> {
    open: O,
    close: C,
    content: P,
}

impl<O, C, P> Parser for Between<O, C, P>
where
    O: Parser,
    C: Parser<Cursor = O::Cursor>,
    P: Parser<Cursor = O::Cursor>,
{
    type Cursor = O::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        self.open.parse(cursor)?;
        let value = self.content.parse(cursor)?;
        self.close.parse(cursor)?;
        Ok(value)
    }
}

/// Match `content` wrapped in `open` and `close`, keeping only the content
pub fn between<O, C, P>(open: O, close: C, content: P) -> Between<O, C, P>
where
    O: Parser,
    C: Parser<Cursor = O::Cursor>,
    P: Parser<Cursor = O::Cursor>,
{
    Between {
        open,
        close,
        content,
    }
}
