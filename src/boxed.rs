use crate::parser::{ParseResult, Parser};
use std::rc::Rc;

// === Boxed parser for type erasure ===

/// Type-erased parser behind a shared pointer
///
/// Cloning is a reference count bump, so one boxed grammar rule can be
/// handed to several combinators. Boxing is also how parsers of different
/// concrete types end up in the same `Vec` for
/// [`choice`](crate::choice::choice) or [`union`](crate::union::union).
pub struct BoxedParser<'a, C, O> {
    parser: Rc<dyn Parser<Cursor = C, Output = O> + 'a>,
}

impl<C, O> Clone for BoxedParser<'_, C, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'a, C, O> BoxedParser<'a, C, O>
where
    C: crate::cursor::Cursor,
{
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Cursor = C, Output = O> + 'a,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<C, O> Parser for BoxedParser<'_, C, O>
where
    C: crate::cursor::Cursor,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: &mut C) -> ParseResult<O> {
        self.parser.parse(cursor)
    }
}

/// Extension trait to add `.boxed()` to parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, Self::Cursor, Self::Output>
    where
        Self: 'a,
    {
        BoxedParser::new(self)
    }
}

impl<P: Parser> BoxedExt for P {}
