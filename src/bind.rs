use crate::parser::{ParseResult, Parser};

/// Parser combinator that feeds one parser's value into the construction
/// of the next parser
///
/// Neither stage rewinds. If the second parser fails, the cursor stays
/// wherever it stopped, past everything the first parser consumed.
pub struct Bind<P, F> {
    parser: P,
    then: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, then: F) -> Self {
        Bind { parser, then }
    }
}

impl<P, F, Q> Parser for Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let value = self.parser.parse(cursor)?;
        (self.then)(value).parse(cursor)
    }
}

/// Run `parser`, then the parser `then` builds from its value
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::{digit, is_char};
///
/// let pair = bind(digit(), |a| bind_discard(is_char(','), digit().map(move |b| (a, b))));
/// let mut cursor = TextCursor::new("1,2");
/// assert_eq!(pair.parse(&mut cursor).unwrap(), ('1', '2'));
/// ```
pub fn bind<P, F, Q>(parser: P, then: F) -> Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Cursor = P::Cursor>,
{
    Bind::new(parser, then)
}

/// Parser combinator that runs two parsers in sequence and keeps the
/// second value
pub struct BindDiscard<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> BindDiscard<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        BindDiscard { first, second }
    }
}

impl<P, Q> Parser for BindDiscard<P, Q>
where
    P: Parser,
    Q: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        self.first.parse(cursor)?;
        self.second.parse(cursor)
    }
}

/// Run `first`, ignore its value, then run `second`
pub fn bind_discard<P, Q>(first: P, second: Q) -> BindDiscard<P, Q>
where
    P: Parser,
    Q: Parser<Cursor = P::Cursor>,
{
    BindDiscard::new(first, second)
}

/// Extension trait to add `.bind()` and `.bind_discard()` to parsers
pub trait BindExt: Parser + Sized {
    fn bind<F, Q>(self, then: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<Cursor = Self::Cursor>,
    {
        Bind::new(self, then)
    }

    fn bind_discard<Q>(self, second: Q) -> BindDiscard<Self, Q>
    where
        Q: Parser<Cursor = Self::Cursor>,
    {
        BindDiscard::new(self, second)
    }
}

impl<P: Parser> BindExt for P {}
