//! Error types surfaced by the lexer and parser.
//!
//! Both layers fail fast: the first error ends the parse session and carries
//! the span of the offending input so the caller can render a diagnostic.

use std::fmt;

use thiserror::Error;

use crate::ast::TokenKind;
use crate::location::Location;

/// What went wrong while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A quoted span ran to the end of input
    UnterminatedQuote(char),
    /// A character that has no meaning outside quotes
    InvalidCharacter(char),
    /// A word starting with `-` that names no known predicate
    UnknownPredicate(String),
    /// A numeric argument that is not an optional sign and digits
    MalformedNumber(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedQuote(q) => write!(f, "unterminated {q}-quoted string"),
            LexErrorKind::InvalidCharacter(ch) => write!(f, "invalid character {ch:?}"),
            LexErrorKind::UnknownPredicate(word) => write!(f, "unknown predicate `{word}`"),
            LexErrorKind::MalformedNumber(text) => {
                write!(f, "malformed numeric argument `{text}`")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {location}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: Location,
}

impl LexError {
    pub fn new(kind: LexErrorKind, location: Location) -> Self {
        LexError { kind, location }
    }
}

/// What went wrong while applying the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A token that cannot continue the expression at this point
    UnexpectedToken,
    /// A `(` without `)`, or a `)` without `(`
    UnmatchedParenthesis,
    /// `()` with nothing inside
    EmptyParentheses,
    /// An exec-style action whose argument list never reached `;`
    MissingExecTerminator,
    /// A predicate at the end of input that needed an argument
    MissingArgument,
    /// Parentheses or operators nested beyond the configured limit
    NestingTooDeep,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SyntaxErrorKind::UnexpectedToken => "unexpected",
            SyntaxErrorKind::UnmatchedParenthesis => "unmatched parenthesis at",
            SyntaxErrorKind::EmptyParentheses => "empty parentheses closed by",
            SyntaxErrorKind::MissingExecTerminator => "missing `;` terminator before",
            SyntaxErrorKind::MissingArgument => "missing argument before",
            SyntaxErrorKind::NestingTooDeep => "expression nested too deeply at",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {found} at {location}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Kind of the offending token
    pub found: TokenKind,
    pub location: Location,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, found: TokenKind, location: Location) -> Self {
        SyntaxError {
            kind,
            found,
            location,
        }
    }
}

/// Failure result of a parse session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn location(&self) -> Location {
        match self {
            ParseError::Lexical(e) => e.location,
            ParseError::Syntax(e) => e.location,
        }
    }

    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            ParseError::Syntax(e) => Some(e.kind),
            ParseError::Lexical(_) => None,
        }
    }

    pub fn lexical_kind(&self) -> Option<&LexErrorKind> {
        match self {
            ParseError::Lexical(e) => Some(&e.kind),
            ParseError::Syntax(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Position;

    fn at(column: u32) -> Location {
        let begin = Position {
            line: 1,
            column,
            offset: column as usize - 1,
        };
        Location::new(begin, begin)
    }

    #[test]
    fn formats_syntax_error() {
        let err = SyntaxError::new(
            SyntaxErrorKind::UnmatchedParenthesis,
            TokenKind::Eof,
            at(14),
        );
        assert_eq!(
            err.to_string(),
            "unmatched parenthesis at end of input at 1:14"
        );
    }

    #[test]
    fn formats_lex_error() {
        let err = LexError::new(LexErrorKind::UnknownPredicate("-kind".into()), at(1));
        assert_eq!(err.to_string(), "unknown predicate `-kind` at 1:1");
        let parse: ParseError = err.into();
        assert_eq!(parse.location(), at(1));
        assert!(parse.syntax_kind().is_none());
    }
}
