use crate::cursor::{Cursor, Next};
use crate::element::Element;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a fixed run of elements
///
/// Matching is all or nothing. Each element is checked with a single step
/// of [`Cursor::next`]; when one of them is rejected, or the input runs
/// out, the cursor is explicitly sent back to where the attempt started
/// before the error is returned. A failed `Literal` therefore never counts
/// as consumption, which keeps it safe under [`many`](crate::many::many)
/// and [`either`](crate::either::either).
pub struct Literal<C: Cursor> {
    expected: Vec<C::Element>,
}

impl<C: Cursor> Parser for Literal<C> {
    type Cursor = C;
    type Output = Vec<C::Element>;

    fn parse(&self, cursor: &mut C) -> ParseResult<Self::Output> {
        let start = cursor.pos();

        for expected in &self.expected {
            match cursor.next(|element| element == expected) {
                Ok(Next::Matched(_)) => {}
                Ok(Next::Rejected(_)) => {
                    cursor.seek_to(start);
                    return Err(cursor.trap(format!(
                        "expected {}",
                        C::Element::slice_to_string(&self.expected)
                    )));
                }
                Err(error) => {
                    cursor.seek_to(start);
                    return Err(error);
                }
            }
        }

        Ok(self.expected.clone())
    }
}

/// Match `sequence` exactly, element by element
pub fn literal<C: Cursor>(sequence: impl IntoIterator<Item = C::Element>) -> Literal<C> {
    Literal {
        expected: sequence.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{TextCursor, TokenCursor};

    #[test]
    fn test_literal_prefix_match() {
        let mut cursor = TextCursor::new("integer");
        let parser = literal("int".chars());

        assert_eq!(parser.parse(&mut cursor), Ok(vec!['i', 'n', 't']));
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn test_literal_partial_match_rewinds() {
        let mut cursor = TextCursor::new("inx");
        let parser = literal("int".chars());

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(cursor.pos(), 0);
        assert_eq!(error.position, 0);
        assert_eq!(error.message, "expected int");
        assert!(!error.is_end_of_input());
    }

    #[test]
    fn test_literal_runs_out_of_input() {
        let mut cursor = TextCursor::new("in");
        let parser = literal("int".chars());

        let error = parser.parse(&mut cursor).unwrap_err();
        assert!(error.is_end_of_input());
        assert_eq!(error.position, 2);
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_literal_rewinds_to_its_own_start() {
        let mut cursor = TextCursor::new("xxinx");
        cursor.seek_to(2);
        assert!(literal("int".chars()).parse(&mut cursor).is_err());
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_empty_literal_always_succeeds() {
        let mut cursor = TextCursor::new("");
        assert_eq!(literal(Vec::new()).parse(&mut cursor), Ok(vec![]));
    }

    #[test]
    fn test_literal_over_tokens() {
        let data = [1u32, 2, 3, 4];
        let mut cursor = TokenCursor::new(&data);

        assert!(literal([1, 3]).parse(&mut cursor).is_err());
        assert_eq!(cursor.pos(), 0);
        assert_eq!(literal([1, 2, 3]).parse(&mut cursor), Ok(vec![1, 2, 3]));
        assert_eq!(cursor.pos(), 3);
    }
}
