use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that succeeds with a fixed value without reading input
pub struct Pure<C, V> {
    value: V,
    _cursor: PhantomData<fn(&mut C)>,
}

impl<C: Cursor, V: Clone> Parser for Pure<C, V> {
    type Cursor = C;
    type Output = V;

    fn parse(&self, _cursor: &mut C) -> ParseResult<V> {
        Ok(self.value.clone())
    }
}

/// Succeed with `value`, consuming nothing
pub fn pure<C: Cursor, V: Clone>(value: V) -> Pure<C, V> {
    Pure {
        value,
        _cursor: PhantomData,
    }
}

/// Parser that always fails with a fixed message
///
/// The output type is free so a `Fail` can stand in any alternative.
pub struct Fail<C, O> {
    message: Cow<'static, str>,
    _marker: PhantomData<fn(&mut C) -> O>,
}

impl<C: Cursor, O> Parser for Fail<C, O> {
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: &mut C) -> ParseResult<O> {
        Err(cursor.trap(self.message.to_string()))
    }
}

/// Fail with `message` at the current position, consuming nothing
pub fn fail<C: Cursor, O>(message: impl Into<Cow<'static, str>>) -> Fail<C, O> {
    Fail {
        message: message.into(),
        _marker: PhantomData,
    }
}
