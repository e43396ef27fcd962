use crate::parser::{ParseResult, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> ParseResult<Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
///
/// A rule that refers to itself cannot name its own concrete type, so the
/// recursive reference goes through `lazy` and is boxed:
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::is_char;
///
/// // nested = "(" nested ")" | "x", counting the depth
/// fn nested() -> BoxedParser<'static, TextCursor, usize> {
///     either(
///         between(is_char('('), is_char(')'), lazy(nested)).map(|depth| depth + 1),
///         is_char('x').map(|_| 0),
///     )
///     .boxed()
/// }
///
/// let mut cursor = TextCursor::new("((x))");
/// assert_eq!(nested().parse(&mut cursor).unwrap(), 2);
/// ```
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
