//! Keyword table for the query language.
//!
//! Every predicate, action and connective the lexer recognizes is listed in
//! [`KEYWORDS`] together with the shape of the arguments it takes. The parser
//! consults the same table to decide which lexer mode to arm before pulling
//! each argument, so adding a predicate is a one-line change here plus a
//! [`TokenKind`] variant.

use crate::ast::TokenKind;

/// What follows a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Nothing: the keyword is a complete primary or a connective
    None,
    /// Exactly one verbatim string
    String,
    /// Exactly one signed decimal integer
    Number,
    /// Raw strings up to a `;` word
    Exec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub spelling: &'static str,
    pub kind: TokenKind,
    pub arguments: ArgumentKind,
}

const fn keyword(spelling: &'static str, kind: TokenKind, arguments: ArgumentKind) -> Keyword {
    Keyword {
        spelling,
        kind,
        arguments,
    }
}

pub static KEYWORDS: &[Keyword] = &[
    keyword("-true", TokenKind::True, ArgumentKind::None),
    keyword("-false", TokenKind::False, ArgumentKind::None),
    keyword("-prune", TokenKind::Prune, ArgumentKind::None),
    keyword("-print", TokenKind::Print, ArgumentKind::None),
    keyword("-print0", TokenKind::Print0, ArgumentKind::None),
    keyword("-delete", TokenKind::Delete, ArgumentKind::None),
    keyword("-quit", TokenKind::Quit, ArgumentKind::None),
    keyword("-empty", TokenKind::Empty, ArgumentKind::None),
    keyword("-type", TokenKind::Type, ArgumentKind::String),
    keyword("-xtype", TokenKind::Xtype, ArgumentKind::String),
    keyword("-name", TokenKind::Name, ArgumentKind::String),
    keyword("-iname", TokenKind::Iname, ArgumentKind::String),
    keyword("-path", TokenKind::Path, ArgumentKind::String),
    keyword("-ipath", TokenKind::Ipath, ArgumentKind::String),
    keyword("-regex", TokenKind::Regex, ArgumentKind::String),
    keyword("-iregex", TokenKind::Iregex, ArgumentKind::String),
    keyword("-newer", TokenKind::Newer, ArgumentKind::String),
    keyword("-mindepth", TokenKind::Mindepth, ArgumentKind::Number),
    keyword("-maxdepth", TokenKind::Maxdepth, ArgumentKind::Number),
    keyword("-mtime", TokenKind::Mtime, ArgumentKind::Number),
    keyword("-mmin", TokenKind::Mmin, ArgumentKind::Number),
    keyword("-links", TokenKind::Links, ArgumentKind::Number),
    keyword("-exec", TokenKind::Exec, ArgumentKind::Exec),
    keyword("-execdir", TokenKind::Execdir, ArgumentKind::Exec),
    keyword("-ok", TokenKind::Ok, ArgumentKind::Exec),
    keyword("-okdir", TokenKind::Okdir, ArgumentKind::Exec),
    keyword("-not", TokenKind::Not, ArgumentKind::None),
    keyword("!", TokenKind::Not, ArgumentKind::None),
    keyword("-and", TokenKind::And, ArgumentKind::None),
    keyword("-a", TokenKind::And, ArgumentKind::None),
    keyword("-or", TokenKind::Or, ArgumentKind::None),
    keyword("-o", TokenKind::Or, ArgumentKind::None),
    keyword("(", TokenKind::LeftParen, ArgumentKind::None),
    keyword(")", TokenKind::RightParen, ArgumentKind::None),
    keyword(";", TokenKind::Semicolon, ArgumentKind::None),
];

/// Find the keyword spelled exactly `word`.
pub fn lookup(word: &str) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|k| k.spelling == word)
}

/// Argument shape of a keyword kind; value kinds take none.
pub fn arguments(kind: TokenKind) -> ArgumentKind {
    KEYWORDS
        .iter()
        .find(|k| k.kind == kind)
        .map_or(ArgumentKind::None, |k| k.arguments)
}

/// Kinds that begin a primary expression on their own.
pub fn starts_primary(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::LeftParen | TokenKind::Not)
        || (KEYWORDS.iter().any(|k| k.kind == kind)
            && !matches!(
                kind,
                TokenKind::And | TokenKind::Or | TokenKind::RightParen | TokenKind::Semicolon
            ))
}
