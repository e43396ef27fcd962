//! # Recursa - Backtracking Parser Combinators
//!
//! Recursa builds parsers out of small functions that share one mutable
//! cursor over a fully loaded input. Grammars are written by combining
//! primitive matchers with sequencing, alternation and repetition
//! combinators.
//!
//! - **Explicit backtracking**: alternation is committed. [`either`] only
//!   tries its second branch when the first failed without consuming input;
//!   [`attempt`] turns any failure into one that consumed nothing.
//! - **Generic input**: the same combinators run over characters
//!   ([`TextCursor`]) or any token slice ([`TokenCursor`]).
//! - **Positioned errors**: every failure carries its absolute position and,
//!   for text, a line and column.
//!
//! ```
//! use recursa::prelude::*;
//! use recursa::text::{int, is_char, spaces};
//!
//! let item = bind_discard(spaces(), int());
//! let list = between(is_char('['), is_char(']'), sep_by(item, is_char(',')));
//!
//! let mut cursor = TextCursor::new("[1, -2, 30]");
//! assert_eq!(list.parse(&mut cursor).unwrap(), vec!["1", "-2", "30"]);
//! ```

#[macro_use]
mod logging;

pub mod attempt;
pub mod between;
pub mod bind;
pub mod binds;
pub mod boxed;
pub mod choice;
pub mod cursor;
pub mod cursors;
pub mod element;
pub mod either;
pub mod end_of_input;
pub mod error;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod many_until;
pub mod map;
pub mod option;
pub mod parser;
pub mod pure;
pub mod satisfy;
pub mod sep_by;
pub mod text;
pub mod union;

pub use attempt::{AttemptExt, attempt};
pub use between::between;
pub use bind::{BindExt, bind, bind_discard};
pub use boxed::{BoxedExt, BoxedParser};
pub use choice::choice;
pub use cursor::{Cursor, Next};
pub use cursors::{TextCursor, TokenCursor};
pub use either::{EitherExt, either};
pub use element::Element;
pub use error::{ErrorKind, Location, ParseError};
pub use parser::{ParseResult, Parser, from_fn, run};

/// Everything needed to write a grammar, in one import
pub mod prelude {
    pub use crate::attempt::{AttemptExt, attempt};
    pub use crate::between::between;
    pub use crate::bind::{BindExt, bind, bind_discard};
    pub use crate::binds::{binds, binds_discard};
    pub use crate::boxed::{BoxedExt, BoxedParser};
    pub use crate::choice::choice;
    pub use crate::cursor::{Cursor, Next};
    pub use crate::cursors::{TextCursor, TokenCursor};
    pub use crate::either::{EitherExt, either};
    pub use crate::element::Element;
    pub use crate::end_of_input::end_of_input;
    pub use crate::error::{ErrorKind, ParseError};
    pub use crate::lazy::lazy;
    pub use crate::literal::literal;
    pub use crate::many::{many, many1, skip_many};
    pub use crate::many_until::many_until;
    pub use crate::map::{MapExt, map};
    pub use crate::option::{maybe, option, optional};
    pub use crate::parser::{ParseResult, Parser, from_fn, run};
    pub use crate::pure::{fail, pure};
    pub use crate::satisfy::{any_element, is_element, none_of, one_of, satisfy};
    pub use crate::sep_by::{sep_by, sep_by1};
    pub use crate::union::{union, union_all};
}
