use crate::cursor::{Cursor, Next, check_seek};
use crate::error::{Location, ParseError};

/// Cursor over a character stream
///
/// The text is decoded into `char`s up front, so positions count
/// characters rather than bytes. Line and column are tracked as the
/// cursor advances; after a rewind they are recomputed from the newline
/// offsets recorded at construction.
#[derive(Debug, Clone)]
pub struct TextCursor {
    buffer: Vec<char>,
    /// Offsets of every `'\n'` in `buffer`, ascending
    newlines: Vec<usize>,
    position: usize,
    line: usize,
    column: usize,
}

impl TextCursor {
    pub fn new(text: &str) -> Self {
        let buffer: Vec<char> = text.chars().collect();
        let newlines = buffer
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == '\n')
            .map(|(i, _)| i)
            .collect();

        TextCursor {
            buffer,
            newlines,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn source(&self) -> &[char] {
        &self.buffer
    }

    /// The unread part of the input
    pub fn remaining(&self) -> &[char] {
        &self.buffer[self.position..]
    }
}

impl From<&str> for TextCursor {
    fn from(text: &str) -> Self {
        TextCursor::new(text)
    }
}

impl Cursor for TextCursor {
    type Element = char;

    fn next<F>(&mut self, predicate: F) -> Result<Next<char>, ParseError>
    where
        F: FnOnce(&char) -> bool,
    {
        let Some(&c) = self.buffer.get(self.position) else {
            return Err(self.unexpected_end());
        };

        if !predicate(&c) {
            return Ok(Next::Rejected(c));
        }

        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(Next::Matched(c))
    }

    fn pos(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn seek_to(&mut self, pos: usize) {
        check_seek(pos, self.buffer.len());
        log_trace!("text cursor seek {} -> {}", self.position, pos);

        let location = self.location(pos);
        self.position = pos;
        self.line = location.line;
        self.column = location.column;
    }

    fn location(&self, pos: usize) -> Location {
        if pos == self.position {
            return Location {
                line: self.line,
                column: self.column,
            };
        }

        let preceding = self.newlines.partition_point(|&nl| nl < pos);
        let line_start = match preceding {
            0 => 0,
            n => self.newlines[n - 1] + 1,
        };
        Location {
            line: preceding + 1,
            column: pos - line_start + 1,
        }
    }
}
