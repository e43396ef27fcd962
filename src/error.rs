use std::fmt;

/// What kind of failure a [`ParseError`] records
///
/// End of input is kept apart from ordinary mismatches so combinators such
/// as [`eol`](crate::text::eol) can accept it as a terminator without
/// inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input did not match what the parser expected
    Unexpected,
    /// The parser needed another element but the input was exhausted
    EndOfInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Unexpected => write!(f, "unexpected input"),
            ErrorKind::EndOfInput => write!(f, "unexpected end of input"),
        }
    }
}

/// Line and column of a cursor position, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// A positioned parse failure
///
/// Errors are created where a parse fails and travel up the combinator
/// chain unchanged. Two errors are equal when all their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pos {position} line {line} column {column}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Absolute element offset in the input buffer
    pub position: usize,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(
        kind: ErrorKind,
        position: usize,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        ParseError {
            kind,
            position,
            line: location.line,
            column: location.column,
            message: message.into(),
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == ErrorKind::EndOfInput
    }

    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }

    /// Render the error together with the source lines around it
    ///
    /// Up to two lines of context are shown on each side of the failing
    /// line, and a marker points at the failing column. `source` must be
    /// the text the error was produced from.
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("{}\n\n", self);
        for line in self.context_lines(source) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn context_lines(&self, source: &str) -> Vec<String> {
        let first = self.line.saturating_sub(2).max(1);
        let last = self.line + 2;
        let mut lines = Vec::new();

        // A trailing newline opens one more (empty) line, which is where
        // end-of-input errors after it point.
        for (index, content) in source.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let content = content.strip_suffix('\r').unwrap_or(content);
            let prefix = if number == self.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == self.line {
                let offset = prefix.len() + self.column.saturating_sub(1);
                lines.push(format!("{}^--- here", " ".repeat(offset)));
            }
        }

        lines
    }
}
