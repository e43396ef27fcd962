use crate::cursor::{Cursor, Next};
use crate::element::Element;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches one element accepted by a predicate
///
/// On a mismatch the cursor is left where it was, because
/// [`Cursor::next`] only advances on acceptance. At end of input the
/// cursor's end-of-input error is returned as is.
pub struct Satisfy<C, F> {
    predicate: F,
    label: Cow<'static, str>,
    _cursor: PhantomData<fn(&mut C)>,
}

impl<C, F> Satisfy<C, F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    pub fn new(predicate: F, label: impl Into<Cow<'static, str>>) -> Self {
        Satisfy {
            predicate,
            label: label.into(),
            _cursor: PhantomData,
        }
    }
}

impl<C, F> Parser for Satisfy<C, F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: &mut C) -> ParseResult<C::Element> {
        match cursor.next(&self.predicate)? {
            Next::Matched(element) => Ok(element),
            Next::Rejected(element) => Err(cursor.trap(format!(
                "expected {} but got {}",
                self.label,
                element.describe()
            ))),
        }
    }
}

/// Match one element for which `predicate` holds
///
/// `label` names what was expected and ends up in the error message.
pub fn satisfy<C, F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Satisfy<C, F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    Satisfy::new(predicate, label)
}

/// Parser that consumes exactly one element, whatever it is
pub struct AnyElement<C> {
    _cursor: PhantomData<fn(&mut C)>,
}

impl<C: Cursor> Parser for AnyElement<C> {
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: &mut C) -> ParseResult<C::Element> {
        match cursor.next(|_| true)? {
            Next::Matched(element) | Next::Rejected(element) => Ok(element),
        }
    }
}

/// Match any single element; fails only at end of input
pub fn any_element<C: Cursor>() -> AnyElement<C> {
    AnyElement {
        _cursor: PhantomData,
    }
}

/// Parser that matches one specific element
pub struct IsElement<C: Cursor> {
    expected: C::Element,
}

impl<C: Cursor> Parser for IsElement<C> {
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: &mut C) -> ParseResult<C::Element> {
        match cursor.next(|element| *element == self.expected)? {
            Next::Matched(element) => Ok(element),
            Next::Rejected(element) => Err(cursor.trap(format!(
                "expected {} but got {}",
                self.expected.describe(),
                element.describe()
            ))),
        }
    }
}

/// Match an element equal to `expected`
pub fn is_element<C: Cursor>(expected: C::Element) -> IsElement<C> {
    IsElement { expected }
}

/// Parser that matches an element by membership in a set
pub struct Membership<C: Cursor> {
    elements: Vec<C::Element>,
    /// `true` to accept members, `false` to accept non-members
    accept_members: bool,
}

impl<C: Cursor> Parser for Membership<C> {
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: &mut C) -> ParseResult<C::Element> {
        let accept = |element: &C::Element| self.elements.contains(element) == self.accept_members;
        match cursor.next(accept)? {
            Next::Matched(element) => Ok(element),
            Next::Rejected(element) => {
                let relation = if self.accept_members { "one" } else { "none" };
                Err(cursor.trap(format!(
                    "expected {} of [{}] but got {}",
                    relation,
                    C::Element::slice_to_string(&self.elements),
                    element.describe()
                )))
            }
        }
    }
}

/// Match an element contained in `elements`
pub fn one_of<C: Cursor>(elements: impl IntoIterator<Item = C::Element>) -> Membership<C> {
    Membership {
        elements: elements.into_iter().collect(),
        accept_members: true,
    }
}

/// Match an element not contained in `elements`
pub fn none_of<C: Cursor>(elements: impl IntoIterator<Item = C::Element>) -> Membership<C> {
    Membership {
        elements: elements.into_iter().collect(),
        accept_members: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{TextCursor, TokenCursor};

    #[test]
    fn test_satisfy_matches() {
        let mut cursor = TextCursor::new("7a");
        let digit = satisfy(|c: &char| c.is_ascii_digit(), "digit");
        assert_eq!(digit.parse(&mut cursor), Ok('7'));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn test_satisfy_mismatch_keeps_position() {
        let mut cursor = TextCursor::new("a7");
        let digit = satisfy(|c: &char| c.is_ascii_digit(), "digit");

        let error = digit.parse(&mut cursor).unwrap_err();
        assert_eq!(error.message, "expected digit but got 'a'");
        assert_eq!(error.position, 0);
        assert!(!error.is_end_of_input());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_satisfy_never_moves_on_failure() {
        let inputs = ["", "x", "xy", " 1", "\n"];
        for input in inputs {
            for start in 0..=input.chars().count() {
                let mut cursor = TextCursor::new(input);
                cursor.seek_to(start);
                let digit = satisfy(|c: &char| c.is_ascii_digit(), "digit");
                if digit.parse(&mut cursor).is_err() {
                    assert_eq!(cursor.pos(), start);
                }
            }
        }
    }

    #[test]
    fn test_satisfy_at_end_of_input() {
        let mut cursor = TextCursor::new("");
        let digit = satisfy(|c: &char| c.is_ascii_digit(), "digit");
        assert!(digit.parse(&mut cursor).unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_any_element() {
        let data = [3u32, 4];
        let mut cursor = TokenCursor::new(&data);
        let any = any_element();
        assert_eq!(any.parse(&mut cursor), Ok(3));
        assert_eq!(any.parse(&mut cursor), Ok(4));
        assert!(any.parse(&mut cursor).unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_is_element_tokens() {
        let data = ["from", "now"];
        let mut cursor = TokenCursor::new(&data);
        assert_eq!(is_element("from").parse(&mut cursor), Ok("from"));

        let error = is_element("from").parse(&mut cursor).unwrap_err();
        assert_eq!(error.message, "expected \"from\" but got \"now\"");
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn test_one_of_and_none_of() {
        let data = [1u32, 2, 9];
        let mut cursor = TokenCursor::new(&data);
        let small = one_of([1, 2, 3]);
        assert_eq!(small.parse(&mut cursor), Ok(1));
        assert_eq!(small.parse(&mut cursor), Ok(2));
        assert!(small.parse(&mut cursor).is_err());
        assert_eq!(cursor.pos(), 2);

        assert_eq!(none_of([1, 2, 3]).parse(&mut cursor), Ok(9));
    }

    #[test]
    fn test_none_of_rejection_message() {
        let mut cursor = TextCursor::new(",");
        let error = none_of([',', ' ']).parse(&mut cursor).unwrap_err();
        assert_eq!(error.message, "expected none of [, ] but got ','");
    }
}
