use std::fmt;

use crate::location::Location;
use crate::number::NumberArg;

/// The kind of a lexical token.
///
/// Keyword kinds are named after the predicate or connective they spell;
/// the exact spellings live in [`crate::vocabulary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The command word at the very start of a query
    ///
    /// # Examples
    /// ```text
    /// find . -name '*.rs'
    /// ```
    Find,

    // Constant predicates
    /// Always true (`-true`)
    True,
    /// Always false (`-false`)
    False,

    // String-argument predicates
    /// File type test
    ///
    /// # Examples
    /// ```text
    /// -type f
    /// -type d
    /// ```
    Type,
    /// File type test that follows symbolic links (`-xtype`)
    Xtype,
    /// Base name glob
    ///
    /// # Examples
    /// ```text
    /// -name build
    /// -name '*.o'
    /// ```
    Name,
    /// Case-insensitive `-name`
    Iname,
    /// Whole path glob
    ///
    /// # Examples
    /// ```text
    /// -path '*/node_modules/*'
    /// ```
    Path,
    /// Case-insensitive `-path`
    Ipath,
    /// Whole path regular expression (`-regex`)
    Regex,
    /// Case-insensitive `-regex`
    Iregex,
    /// Modified more recently than a reference file (`-newer`)
    Newer,

    // Numeric-argument predicates
    /// Lower depth bound
    ///
    /// # Examples
    /// ```text
    /// -mindepth 2
    /// ```
    Mindepth,
    /// Upper depth bound
    ///
    /// # Examples
    /// ```text
    /// -maxdepth 4
    /// ```
    Maxdepth,
    /// Modification age in days
    ///
    /// # Examples
    /// ```text
    /// -mtime +7
    /// -mtime -1
    /// ```
    Mtime,
    /// Modification age in minutes (`-mmin`)
    Mmin,
    /// Hard link count (`-links`)
    Links,

    // Zero-argument actions and tests
    /// Do not descend into the current directory
    Prune,
    /// `-print`
    Print,
    /// `-print0`
    Print0,
    /// `-delete`
    Delete,
    /// `-quit`
    Quit,
    /// `-empty`
    Empty,

    // Actions with a raw argument list
    /// Run a command for each match
    ///
    /// The argument list is taken verbatim up to a `;` word.
    ///
    /// # Examples
    /// ```text
    /// -exec ls -l {} ;
    /// -exec grep -q TODO {} \;
    /// ```
    Exec,
    /// `-exec` from the directory holding the match
    Execdir,
    /// `-exec` with a confirmation prompt
    Ok,
    /// `-execdir` with a confirmation prompt
    Okdir,

    // Connectives
    /// Logical negation
    ///
    /// # Examples
    /// ```text
    /// ! -path '*/.git/*'
    /// -not -empty
    /// ```
    Not,
    /// Explicit conjunction (`-and`, `-a`)
    And,
    /// Disjunction
    ///
    /// # Examples
    /// ```text
    /// -name build -o -name node_modules
    /// ```
    Or,

    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;` ending an exec argument list
    Semicolon,

    // Value-carrying kinds
    /// A path operand preceding the expression
    StartingPoint,
    /// A string argument to a predicate or action
    StringArg,
    /// A signed numeric argument to a predicate
    NumberArg,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Canonical source spelling, or a descriptive name for value kinds.
    pub fn spelling(self) -> &'static str {
        match self {
            TokenKind::Find => "find",
            TokenKind::True => "-true",
            TokenKind::False => "-false",
            TokenKind::Type => "-type",
            TokenKind::Xtype => "-xtype",
            TokenKind::Name => "-name",
            TokenKind::Iname => "-iname",
            TokenKind::Path => "-path",
            TokenKind::Ipath => "-ipath",
            TokenKind::Regex => "-regex",
            TokenKind::Iregex => "-iregex",
            TokenKind::Newer => "-newer",
            TokenKind::Mindepth => "-mindepth",
            TokenKind::Maxdepth => "-maxdepth",
            TokenKind::Mtime => "-mtime",
            TokenKind::Mmin => "-mmin",
            TokenKind::Links => "-links",
            TokenKind::Prune => "-prune",
            TokenKind::Print => "-print",
            TokenKind::Print0 => "-print0",
            TokenKind::Delete => "-delete",
            TokenKind::Quit => "-quit",
            TokenKind::Empty => "-empty",
            TokenKind::Exec => "-exec",
            TokenKind::Execdir => "-execdir",
            TokenKind::Ok => "-ok",
            TokenKind::Okdir => "-okdir",
            TokenKind::Not => "!",
            TokenKind::And => "-and",
            TokenKind::Or => "-o",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::StartingPoint => "starting point",
            TokenKind::StringArg => "string argument",
            TokenKind::NumberArg => "numeric argument",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::StartingPoint
            | TokenKind::StringArg
            | TokenKind::NumberArg
            | TokenKind::Eof => f.write_str(self.spelling()),
            _ => write!(f, "`{}`", self.spelling()),
        }
    }
}

/// Payload carried by value tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenValue {
    #[default]
    None,
    Text(String),
    Number(NumberArg),
}

/// A scanned token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub location: Location,
}

impl Token {
    /// A token with no payload.
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Token {
            kind,
            value: TokenValue::None,
            location,
        }
    }

    pub fn starting_point(path: impl Into<String>, location: Location) -> Self {
        Token {
            kind: TokenKind::StartingPoint,
            value: TokenValue::Text(path.into()),
            location,
        }
    }

    pub fn string_arg(value: impl Into<String>, location: Location) -> Self {
        Token {
            kind: TokenKind::StringArg,
            value: TokenValue::Text(value.into()),
            location,
        }
    }

    pub fn number_arg(value: NumberArg, location: Location) -> Self {
        Token {
            kind: TokenKind::NumberArg,
            value: TokenValue::Number(value),
            location,
        }
    }

    pub fn eof(location: Location) -> Self {
        Token::new(TokenKind::Eof, location)
    }

    /// Text payload of `StartingPoint` and `StringArg` tokens.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Payload of `NumberArg` tokens.
    pub fn as_number(&self) -> Option<NumberArg> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Same kind and payload, ignoring where either token came from.
    pub fn same_lexeme(&self, other: &Token) -> bool {
        self.kind == other.kind && self.value == other.value
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            TokenValue::Text(s) => write!(f, "{} {:?}", self.kind, s),
            TokenValue::Number(n) => write!(f, "{} {}", self.kind, n),
        }
    }
}
