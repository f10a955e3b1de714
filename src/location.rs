//! Source locations for tokens and diagnostics.
//!
//! A [`Location`] is a half-open span between two [`Position`]s. The lexer
//! moves it forward as a side effect of producing each token, so the parser
//! always holds the span of the most recently scanned lexeme.

use std::fmt;

/// A point in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1
    pub line: u32,
    /// Column number in characters, starting at 1
    pub column: u32,
    /// Byte offset from the start of input
    pub offset: usize,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Position {
    /// Advance past one character of the input.
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Span of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Location {
    pub begin: Position,
    pub end: Position,
}

impl Location {
    pub fn new(begin: Position, end: Position) -> Self {
        Location { begin, end }
    }

    /// Collapse the span onto its end, ready for the next token.
    pub fn step(&mut self) {
        self.begin = self.end;
    }

    pub fn is_empty(&self) -> bool {
        self.begin.offset == self.end.offset
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.begin.line == self.end.line {
            if self.end.column > self.begin.column + 1 {
                write!(
                    f,
                    "{}:{}-{}",
                    self.begin.line,
                    self.begin.column,
                    self.end.column - 1
                )
            } else {
                write!(f, "{}", self.begin)
            }
        } else {
            write!(f, "{}-{}", self.begin, self.end)
        }
    }
}
