use crate::bind::{BindDiscard, bind_discard};
use crate::either::{Either, either};
use crate::map::{Map, map};
use crate::parser::Parser;
use crate::pure::{Pure, pure};

/// Run `parser`, falling back to `default` if it fails without consuming
///
/// A failure after consumption is still an error; see
/// [`either`](crate::either::either).
pub fn option<P, V>(default: V, parser: P) -> Either<P, Pure<P::Cursor, V>>
where
    P: Parser<Output = V>,
    V: Clone,
{
    either(parser, pure(default))
}

/// Optionally match `parser`, discarding its value
pub fn maybe<P: Parser>(
    parser: P,
) -> Either<BindDiscard<P, Pure<P::Cursor, ()>>, Pure<P::Cursor, ()>> {
    option((), bind_discard(parser, pure(())))
}

/// Function pointer type of the `Some` wrapper used by [`optional`]
pub type Wrap<T> = fn(T) -> Option<T>;

/// Optionally match `parser`, keeping its value as an `Option`
pub fn optional<P: Parser>(
    parser: P,
) -> Either<Map<P, Wrap<P::Output>>, Pure<P::Cursor, Option<P::Output>>>
where
    P::Output: Clone,
{
    option(None, map(parser, Some as Wrap<P::Output>))
}
