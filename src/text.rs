//! Ready-made matchers for character input
//!
//! Everything here is fixed to [`TextCursor`]. Composite matchers that can
//! fail part way through (`is_string`, `int`, `float`) are atomic: on
//! failure the cursor is back where they started.

use crate::attempt::attempt;
use crate::bind::{BindExt, bind_discard};
use crate::cursors::TextCursor;
use crate::either::either;
use crate::end_of_input::end_of_input;
use crate::literal::literal;
use crate::many::{many, many1, skip_many};
use crate::map::MapExt;
use crate::option::optional;
use crate::parser::Parser;
use crate::satisfy::{self, IsElement, Membership, is_element, satisfy};

/// Join matched characters into a `String`
pub fn collect_string(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

/// Match one specific character
pub fn is_char(expected: char) -> IsElement<TextCursor> {
    is_element(expected)
}

/// Match `expected` exactly, all or nothing
pub fn is_string(expected: &str) -> impl Parser<Cursor = TextCursor, Output = String> + use<> {
    literal(expected.chars().collect::<Vec<_>>()).map(collect_string)
}

/// Match any character that appears in `chars`
pub fn one_of(chars: &str) -> Membership<TextCursor> {
    satisfy::one_of(chars.chars())
}

/// Match any character that does not appear in `chars`
pub fn none_of(chars: &str) -> Membership<TextCursor> {
    satisfy::none_of(chars.chars())
}

/// Match an ASCII digit
pub fn digit() -> impl Parser<Cursor = TextCursor, Output = char> {
    satisfy(|c: &char| c.is_ascii_digit(), "digit")
}

/// Match an alphabetic character
pub fn letter() -> impl Parser<Cursor = TextCursor, Output = char> {
    satisfy(|c: &char| c.is_alphabetic(), "letter")
}

/// Match one whitespace character
pub fn space() -> impl Parser<Cursor = TextCursor, Output = char> {
    satisfy(|c: &char| c.is_whitespace(), "space")
}

/// Skip any run of whitespace, including none
pub fn spaces() -> impl Parser<Cursor = TextCursor, Output = ()> {
    skip_many(space())
}

/// Match `'\r'` or `'\n'`
pub fn newline() -> Membership<TextCursor> {
    one_of("\r\n")
}

/// Match a line break or the end of the input
///
/// End of input counts as a line end, so a last line without a trailing
/// break still ends cleanly.
pub fn eol() -> impl Parser<Cursor = TextCursor, Output = ()> {
    either(end_of_input(), newline().map(|_| ()))
}

/// Match an optionally negative integer, returned as its text
///
/// ```
/// use recursa::prelude::*;
/// use recursa::text::int;
///
/// let mut cursor = TextCursor::new("-42x");
/// assert_eq!(int().parse(&mut cursor).unwrap(), "-42");
/// assert_eq!(cursor.pos(), 3);
/// ```
pub fn int() -> impl Parser<Cursor = TextCursor, Output = String> {
    attempt(optional(is_char('-')).bind(|sign| {
        many1(digit()).map(move |digits| sign.into_iter().chain(digits).collect::<String>())
    }))
}

/// Match a decimal number with a mandatory fraction, returned as its text
///
/// The integer part may be omitted, in which case it reads as `0`, so
/// `".5"` gives `"0.5"` and `"-.5"` gives `"-0.5"`.
pub fn float() -> impl Parser<Cursor = TextCursor, Output = String> {
    let whole = optional(is_char('-')).bind(|sign| {
        many(digit()).map(move |digits| {
            let mut text: String = sign.into_iter().collect();
            if digits.is_empty() {
                text.push('0');
            } else {
                text.extend(digits);
            }
            text
        })
    });

    attempt(whole.bind(|whole| {
        bind_discard(is_char('.'), many1(digit()))
            .map(move |fraction| format!("{}.{}", whole, collect_string(fraction)))
    }))
}
