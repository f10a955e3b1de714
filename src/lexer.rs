//! Mode-switching tokenizer for find-style queries.
//!
//! Input is split into words the way a shell would split a command line:
//! whitespace separates words, `'...'` is literal, `"..."` honors `\"` and
//! `\\`, and an unquoted backslash escapes the next character. What a word
//! becomes depends on the active [`Mode`], which the parser arms right before
//! it asks for a token whose meaning depends on grammatical context.

use std::io::{self, Read};

use tracing::trace;

use crate::ast::{Token, TokenKind};
use crate::error::{LexError, LexErrorKind};
use crate::location::{Location, Position};
use crate::number::NumberArg;
use crate::vocabulary;

/// Scanning rule set for the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keywords, punctuation and starting points
    #[default]
    Default,
    /// Next word verbatim as a string argument, then back to `Default`
    StringArgument,
    /// Next word as a signed integer, then back to `Default`
    NumberArgument,
    /// Every word verbatim until a `;` word, which ends the mode
    ExecArguments,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    cursor: Position,
    mode: Mode,
    at_start: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            cursor: Position::default(),
            mode: Mode::Default,
            at_start: true,
        }
    }

    /// Read a whole stream into a new lexer.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        Ok(Lexer::new(&buffer))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn clear_mode(&mut self) {
        self.mode = Mode::Default;
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.cursor.advance(ch);
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn single_char_location(&self) -> Location {
        let mut end = self.cursor;
        if let Some(ch) = self.current_char() {
            end.advance(ch);
        }
        Location::new(self.cursor, end)
    }

    /// Read one shell-style word, or `None` at end of input.
    fn read_word(&mut self, start: Position, mode: Mode) -> Result<Option<String>, LexError> {
        if self.current_char().is_none() {
            return Ok(None);
        }

        let mut word = String::new();
        while let Some(ch) = self.current_char() {
            match ch {
                c if c.is_whitespace() => break,
                '\'' => self.read_single_quoted(&mut word, start)?,
                '"' => self.read_double_quoted(&mut word, start)?,
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some(next) => {
                            word.push(next);
                            self.advance();
                        }
                        None => word.push('\\'),
                    }
                }
                c if c.is_control() && mode == Mode::Default => {
                    return Err(LexError::new(
                        LexErrorKind::InvalidCharacter(c),
                        self.single_char_location(),
                    ));
                }
                c => {
                    word.push(c);
                    self.advance();
                }
            }
        }
        Ok(Some(word))
    }

    fn read_single_quoted(&mut self, word: &mut String, start: Position) -> Result<(), LexError> {
        self.advance(); // opening quote
        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '\'' {
                return Ok(());
            }
            word.push(ch);
        }
        Err(self.unterminated('\'', start))
    }

    fn read_double_quoted(&mut self, word: &mut String, start: Position) -> Result<(), LexError> {
        self.advance(); // opening quote
        while let Some(ch) = self.current_char() {
            self.advance();
            match ch {
                '"' => return Ok(()),
                '\\' => match self.current_char() {
                    Some(next @ ('"' | '\\')) => {
                        word.push(next);
                        self.advance();
                    }
                    _ => word.push('\\'),
                },
                c => word.push(c),
            }
        }
        Err(self.unterminated('"', start))
    }

    fn unterminated(&self, quote: char, start: Position) -> LexError {
        LexError::new(
            LexErrorKind::UnterminatedQuote(quote),
            Location::new(start, self.cursor),
        )
    }

    fn classify(&self, word: String, location: Location) -> Result<Token, LexError> {
        if self.at_start && word == "find" {
            return Ok(Token::new(TokenKind::Find, location));
        }
        match vocabulary::lookup(&word) {
            Some(keyword) => Ok(Token::new(keyword.kind, location)),
            None if word.starts_with('-') => Err(LexError::new(
                LexErrorKind::UnknownPredicate(word),
                location,
            )),
            None => Ok(Token::starting_point(word, location)),
        }
    }

    /// Scan the next token, moving `location` over its span.
    ///
    /// One-shot modes fall back to [`Mode::Default`] once a token has been
    /// produced in them; [`Mode::ExecArguments`] lasts until its `;`.
    pub fn next_token(&mut self, location: &mut Location) -> Result<Token, LexError> {
        self.skip_whitespace();
        location.end = self.cursor;
        location.step();

        let mode = self.mode;
        if mode != Mode::ExecArguments {
            self.mode = Mode::Default;
        }

        let word = self.read_word(location.begin, mode)?;
        location.end = self.cursor;

        let token = match word {
            None => Token::eof(*location),
            Some(word) => match mode {
                Mode::Default => self.classify(word, *location)?,
                Mode::StringArgument => Token::string_arg(word, *location),
                Mode::NumberArgument => {
                    let number = word.parse::<NumberArg>().map_err(|e| {
                        LexError::new(LexErrorKind::MalformedNumber(e.text), *location)
                    })?;
                    Token::number_arg(number, *location)
                }
                Mode::ExecArguments if word == ";" => {
                    self.mode = Mode::Default;
                    Token::new(TokenKind::Semicolon, *location)
                }
                Mode::ExecArguments => Token::string_arg(word, *location),
            },
        };
        self.at_start = false;

        trace!(kind = ?token.kind, ?mode, location = %token.location, "scanned token");
        Ok(token)
    }
}

/// Quote `value` so that lexing the result as one word yields `value` again.
pub fn quote_word(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '\'' | '"' | '\\'));

    if !needs_quoting {
        value.to_string()
    } else if !value.contains('\'') {
        format!("'{value}'")
    } else {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            if matches!(c, '"' | '\\') {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("-true -o -not -and ( )");
    let mut loc = Location::default();
    let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
        let token = lexer.next_token(&mut loc).ok()?;
        (!token.is_eof()).then_some(token.kind)
    })
    .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::True,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::And,
            TokenKind::LeftParen,
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn test_quote_word() {
    assert_eq!(quote_word("build"), "build");
    assert_eq!(quote_word("*/node_modules/*"), "*/node_modules/*");
    assert_eq!(quote_word(""), "''");
    assert_eq!(quote_word("a b"), "'a b'");
    assert_eq!(quote_word("it's"), "\"it's\"");
    assert_eq!(quote_word(r#"say "it's""#), r#""say \"it's\"""#);
}
