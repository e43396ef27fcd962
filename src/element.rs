use std::fmt;

/// Trait for the items a cursor hands out to parsers
///
/// Anything comparable and printable can be parsed: characters for text,
/// bytes, or a lexer's token type. The formatting hooks only feed error
/// messages, so user token types usually need nothing more than an empty
/// `impl Element for Token {}`.
pub trait Element: Clone + PartialEq + fmt::Debug {
    /// Render a single element for an error message
    fn describe(&self) -> String {
        format!("{:?}", self)
    }

    /// Render a run of elements for an error message
    fn slice_to_string(slice: &[Self]) -> String {
        slice
            .iter()
            .map(Element::describe)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Element for char {
    fn describe(&self) -> String {
        format!("'{}'", self.escape_debug())
    }

    fn slice_to_string(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

impl Element for u8 {
    fn describe(&self) -> String {
        format!("0x{:02X}", self)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Element for u32 {}

impl Element for i64 {}

impl Element for &str {}

impl Element for String {}
