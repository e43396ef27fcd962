use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A fixed, ordered list of parsers sharing a cursor and output type
///
/// Implemented for tuples of up to eight parsers, and for arrays, slices
/// and vectors of a single parser type (use
/// [`BoxedParser`](crate::boxed::BoxedParser) to mix types in a vector).
/// A reference to any of these works too, so `choice(&parsers[..])` borrows
/// the list instead of taking it.
pub trait Alternatives {
    type Cursor: Cursor;
    type Output;

    /// Run each alternative in order until one succeeds
    fn parse_first(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output>;
}

impl<P: Parser> Alternatives for [P] {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_first(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let mut last_error = None;
        for alternative in self {
            match alternative.parse(cursor) {
                Ok(value) => return Ok(value),
                Err(error) => last_error = Some(error),
            }
        }
        Err(last_error.unwrap_or_else(|| cursor.trap("choice has no alternatives")))
    }
}

impl<P: Parser, const N: usize> Alternatives for [P; N] {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_first(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        self.as_slice().parse_first(cursor)
    }
}

impl<P: Parser> Alternatives for Vec<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_first(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        self.as_slice().parse_first(cursor)
    }
}

impl<A: Alternatives + ?Sized> Alternatives for &A {
    type Cursor = A::Cursor;
    type Output = A::Output;

    fn parse_first(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        (**self).parse_first(cursor)
    }
}

macro_rules! tuple_alternatives {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first, $($rest),*> Alternatives for ($first, $($rest,)*)
        where
            $first: Parser,
            $($rest: Parser<Cursor = <$first as Parser>::Cursor, Output = <$first as Parser>::Output>,)*
        {
            type Cursor = <$first as Parser>::Cursor;
            type Output = <$first as Parser>::Output;

            #[allow(non_snake_case)]
            fn parse_first(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
                let ($first, $($rest,)*) = self;
                let result = $first.parse(cursor);
                $(let result = result.or_else(|_| $rest.parse(cursor));)*
                result
            }
        }
    };
}

tuple_alternatives!(P1);
tuple_alternatives!(P1, P2);
tuple_alternatives!(P1, P2, P3);
tuple_alternatives!(P1, P2, P3, P4);
tuple_alternatives!(P1, P2, P3, P4, P5);
tuple_alternatives!(P1, P2, P3, P4, P5, P6);
tuple_alternatives!(P1, P2, P3, P4, P5, P6, P7);
tuple_alternatives!(P1, P2, P3, P4, P5, P6, P7, P8);

/// Parser combinator that returns the first successful alternative
///
/// Unlike [`either`](crate::either::either), `Choice` does not check for
/// consumption between alternatives: if one alternative moves the cursor
/// and then fails, the next one starts from wherever the cursor was left.
/// Wrap alternatives that can fail part way in
/// [`attempt`](crate::attempt::attempt) to give each one a clean start.
/// When every alternative fails, the last error is returned.
pub struct Choice<A> {
    alternatives: A,
}

impl<A> Choice<A> {
    pub fn new(alternatives: A) -> Self {
        Choice { alternatives }
    }
}

impl<A: Alternatives> Parser for Choice<A> {
    type Cursor = A::Cursor;
    type Output = A::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        self.alternatives.parse_first(cursor)
    }
}

/// Try each alternative in order and return the first success
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::is_string;
///
/// let keyword = choice((
///     attempt(is_string("int")),
///     attempt(is_string("interface")),
///     attempt(is_string("if")),
/// ));
/// let mut cursor = TextCursor::new("if");
/// assert_eq!(keyword.parse(&mut cursor).unwrap(), "if");
/// ```
pub fn choice<A: Alternatives>(alternatives: A) -> Choice<A> {
    Choice::new(alternatives)
}
