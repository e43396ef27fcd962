use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that threads one value through a chain of continuations
///
/// `first` produces the starting value; each continuation builds the next
/// parser from the current value, and that parser's value replaces it. The
/// chain stops at the first failure and nothing is rewound.
pub struct Binds<P, F> {
    first: P,
    then: Vec<F>,
}

impl<P, F, Q> Parser for Binds<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Cursor = P::Cursor, Output = P::Output>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let mut value = self.first.parse(cursor)?;
        for then in &self.then {
            value = then(value).parse(cursor)?;
        }
        Ok(value)
    }
}

/// Left fold of [`bind`](crate::bind::bind) over `then`, starting from `first`
///
/// With no continuations this parses exactly like `first`. Chains whose
/// steps change the value type are written with `.bind(..)` directly.
///
/// ```
/// use recursa::prelude::*;
///
/// // Each token must be one more than the one before it.
/// let next = |n: u32| is_element(n + 1);
/// let run_of_four = binds(any_element(), vec![next; 3]);
///
/// let data = [4u32, 5, 6, 7];
/// let mut cursor = TokenCursor::new(&data);
/// assert_eq!(run_of_four.parse(&mut cursor).unwrap(), 7);
/// ```
pub fn binds<P, F, Q>(first: P, then: impl IntoIterator<Item = F>) -> Binds<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Cursor = P::Cursor, Output = P::Output>,
{
    Binds {
        first,
        then: then.into_iter().collect(),
    }
}

/// A fixed sequence of two or more parsers sharing a cursor
///
/// Implemented for tuples of two to eight parsers.
pub trait Sequence {
    type Cursor: Cursor;
    type Output;

    /// Run every parser in order, keeping only the last value
    fn parse_last(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output>;
}

macro_rules! tuple_sequence {
    ($first:ident $(, $middle:ident)* ; $last:ident) => {
        impl<$first, $($middle,)* $last> Sequence for ($first, $($middle,)* $last)
        where
            $first: Parser,
            $($middle: Parser<Cursor = <$first as Parser>::Cursor>,)*
            $last: Parser<Cursor = <$first as Parser>::Cursor>,
        {
            type Cursor = <$first as Parser>::Cursor;
            type Output = <$last as Parser>::Output;

            #[allow(non_snake_case)]
            fn parse_last(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
                let ($first, $($middle,)* $last) = self;
                $first.parse(cursor)?;
                $($middle.parse(cursor)?;)*
                $last.parse(cursor)
            }
        }
    };
}

tuple_sequence!(P1; P2);
tuple_sequence!(P1, P2; P3);
tuple_sequence!(P1, P2, P3; P4);
tuple_sequence!(P1, P2, P3, P4; P5);
tuple_sequence!(P1, P2, P3, P4, P5; P6);
tuple_sequence!(P1, P2, P3, P4, P5, P6; P7);
tuple_sequence!(P1, P2, P3, P4, P5, P6, P7; P8);

/// Parser combinator that runs several parsers in order and keeps the last value
pub struct BindsDiscard<S> {
    parsers: S,
}

impl<S: Sequence> Parser for BindsDiscard<S> {
    type Cursor = S::Cursor;
    type Output = S::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        self.parsers.parse_last(cursor)
    }
}

/// Run every parser in `parsers` in order, keeping the last value
///
/// The many-parser form of [`bind_discard`](crate::bind::bind_discard).
pub fn binds_discard<S: Sequence>(parsers: S) -> BindsDiscard<S> {
    BindsDiscard { parsers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{TextCursor, TokenCursor};
    use crate::satisfy::{any_element, is_element};
    use crate::text::{digit, is_char, is_string};

    type Letter = crate::satisfy::IsElement<TextCursor>;

    fn next_letter(c: char) -> Letter {
        is_element(char::from_u32(c as u32 + 1).unwrap_or(c))
    }

    #[test]
    fn test_binds_threads_value() {
        let mut cursor = TextCursor::new("abcd");
        let parser = binds(is_char('a'), [next_letter, next_letter, next_letter]);
        assert_eq!(parser.parse(&mut cursor), Ok('d'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_binds_without_continuations() {
        let mut cursor = TextCursor::new("q");
        let parser = binds(any_element(), Vec::<fn(char) -> Letter>::new());
        assert_eq!(parser.parse(&mut cursor), Ok('q'));
    }

    #[test]
    fn test_binds_stops_at_first_failure() {
        let mut cursor = TextCursor::new("abx");
        let parser = binds(is_char('a'), vec![next_letter; 3]);

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.message, "expected 'c' but got 'x'");
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_binds_over_tokens() {
        let data = [2u32, 4, 8, 9];
        let mut cursor = TokenCursor::new(&data);
        let double = |n: u32| is_element(n * 2);
        assert_eq!(binds(any_element(), vec![double; 2]).parse(&mut cursor), Ok(8));
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn test_binds_discard_keeps_last() {
        let mut cursor = TextCursor::new("let x=7");
        let parser = binds_discard((is_string("let"), is_char(' '), is_char('x'), is_char('='), digit()));
        assert_eq!(parser.parse(&mut cursor), Ok('7'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_binds_discard_pair() {
        let mut cursor = TextCursor::new("-5");
        assert_eq!(binds_discard((is_char('-'), digit())).parse(&mut cursor), Ok('5'));
    }

    #[test]
    fn test_binds_discard_does_not_rewind() {
        let mut cursor = TextCursor::new("ab!");
        let parser = binds_discard((is_char('a'), is_char('b'), is_char('c')));

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.position, 2);
        assert_eq!(cursor.pos(), 2);
    }
}
