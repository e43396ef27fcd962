use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that rewinds the cursor whenever the inner parser fails
///
/// This is the only combinator that rewinds unconditionally. Wrapping a
/// parser in `Attempt` turns any failure, however much input it consumed,
/// into a failure that consumed nothing, which is what lets
/// [`either`](crate::either::either) and [`many`](crate::many::many) move on
/// to their fallback.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<P: Parser> Parser for Attempt<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let start = cursor.pos();
        self.parser.parse(cursor).inspect_err(|_| {
            if cursor.pos() != start {
                log_trace!("attempt rewinding from {} to {}", cursor.pos(), start);
            }
            cursor.seek_to(start);
        })
    }
}

/// Run `parser`, restoring the starting position if it fails
///
/// The error itself is passed through unchanged; it still reports where
/// the failure happened, not where the cursor was restored to.
pub fn attempt<P: Parser>(parser: P) -> Attempt<P> {
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt: Parser + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

impl<P: Parser> AttemptExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindExt;
    use crate::cursors::TextCursor;
    use crate::satisfy::is_element;

    #[test]
    fn test_attempt_success_keeps_progress() {
        let mut cursor = TextCursor::new("abc");
        let parser = attempt(is_element('a').bind_discard(is_element('b')));
        assert_eq!(parser.parse(&mut cursor), Ok('b'));
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_attempt_rewinds_after_consuming() {
        let mut cursor = TextCursor::new("abx");
        let parser = is_element('a')
            .bind_discard(is_element('b'))
            .bind_discard(is_element('c'))
            .attempt();

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(cursor.pos(), 0);
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        // The error still describes the failure point.
        assert_eq!(error.position, 2);
    }

    #[test]
    fn test_attempt_rewinds_end_of_input() {
        let mut cursor = TextCursor::new("a\nb");
        cursor.seek_to(2);
        let parser = attempt(is_element('b').bind_discard(is_element('c')));

        let error = parser.parse(&mut cursor).unwrap_err();
        assert!(error.is_end_of_input());
        assert_eq!(cursor.pos(), 2);
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_attempt_error_is_unchanged() {
        let inner = is_element('a').bind_discard(is_element('b'));
        let bare = inner.parse(&mut TextCursor::new("ax")).unwrap_err();
        let wrapped = attempt(inner).parse(&mut TextCursor::new("ax")).unwrap_err();
        assert_eq!(bare, wrapped);
    }
}
