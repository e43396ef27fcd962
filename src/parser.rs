use crate::cursor::Cursor;
use crate::error::ParseError;
use std::marker::PhantomData;
use std::rc::Rc;

pub type ParseResult<T> = Result<T, ParseError>;

/// Core parser trait for parser combinators
///
/// A parser reads from a shared, mutable cursor and either produces a value
/// or a positioned error. Parsers hold no per-run state, so one parser value
/// can be reused across any number of cursors.
///
/// Failing does not imply the cursor is back where it started. Primitive
/// matchers leave it untouched, but sequences stop wherever the failing
/// step stopped. Rewinding is always explicit, see
/// [`attempt`](crate::attempt::attempt).
pub trait Parser {
    type Cursor: Cursor;
    type Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

/// Apply a top-level parser to a cursor
///
/// ```
/// use recursa::{TextCursor, run};
/// use recursa::text::int;
///
/// let mut cursor = TextCursor::new("-42x");
/// assert_eq!(run(&int(), &mut cursor).unwrap(), "-42");
/// ```
pub fn run<P: Parser>(parser: &P, cursor: &mut P::Cursor) -> ParseResult<P::Output> {
    parser.parse(cursor)
}

/// Parser built from a plain function over the cursor
pub struct FnParser<C, F> {
    f: F,
    _cursor: PhantomData<fn(&mut C)>,
}

impl<C, F, O> Parser for FnParser<C, F>
where
    C: Cursor,
    F: Fn(&mut C) -> ParseResult<O>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: &mut C) -> ParseResult<O> {
        (self.f)(cursor)
    }
}

/// Lift a function into a parser
///
/// This is the escape hatch for matchers that are easier to write by hand
/// against the [`Cursor`] contract. Hand-written matchers should restore
/// the cursor themselves when they fail part way, or be wrapped in
/// [`attempt`](crate::attempt::attempt).
pub fn from_fn<C, F, O>(f: F) -> FnParser<C, F>
where
    C: Cursor,
    F: Fn(&mut C) -> ParseResult<O>,
{
    FnParser {
        f,
        _cursor: PhantomData,
    }
}
