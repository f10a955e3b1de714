//! Token sources the parser can pull from.
//!
//! The parser only needs "give me the next token" plus a way to arm the next
//! lexer mode, so it is written against [`TokenSource`] rather than
//! [`Lexer`] directly. That lets tests observe the exact token stream the
//! parser consumes, or replace the lexer with a scripted sequence.

use std::collections::VecDeque;

use crate::ast::Token;
use crate::error::LexError;
use crate::lexer::{Lexer, Mode};
use crate::location::Location;

pub trait TokenSource {
    /// Produce the next token and move `location` over its span.
    fn next_token(&mut self, location: &mut Location) -> Result<Token, LexError>;

    /// Arm the scanning mode for the next token. Sources without modes
    /// ignore this.
    fn set_mode(&mut self, _mode: Mode) {}
}

impl TokenSource for Lexer {
    fn next_token(&mut self, location: &mut Location) -> Result<Token, LexError> {
        Lexer::next_token(self, location)
    }

    fn set_mode(&mut self, mode: Mode) {
        Lexer::set_mode(self, mode);
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self, location: &mut Location) -> Result<Token, LexError> {
        (**self).next_token(location)
    }

    fn set_mode(&mut self, mode: Mode) {
        (**self).set_mode(mode);
    }
}

/// A source that shows every token to an observer before handing it on.
pub struct Observed<S, F> {
    inner: S,
    observer: F,
}

impl<S, F> Observed<S, F>
where
    S: TokenSource,
    F: FnMut(&Token),
{
    pub fn new(inner: S, observer: F) -> Self {
        Observed { inner, observer }
    }
}

impl<S, F> TokenSource for Observed<S, F>
where
    S: TokenSource,
    F: FnMut(&Token),
{
    fn next_token(&mut self, location: &mut Location) -> Result<Token, LexError> {
        let token = self.inner.next_token(location)?;
        (self.observer)(&token);
        Ok(token)
    }

    fn set_mode(&mut self, mode: Mode) {
        self.inner.set_mode(mode);
    }
}

/// Replays a fixed token sequence, then end of input forever.
///
/// Mode requests are ignored: the tokens are already classified.
#[derive(Debug, Default)]
pub struct Replay {
    tokens: VecDeque<Token>,
    last: Location,
}

impl Replay {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Replay {
            tokens: tokens.into_iter().collect(),
            last: Location::default(),
        }
    }
}

impl FromIterator<Token> for Replay {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Replay::new(iter)
    }
}

impl TokenSource for Replay {
    fn next_token(&mut self, location: &mut Location) -> Result<Token, LexError> {
        let token = match self.tokens.pop_front() {
            Some(token) => token,
            None => {
                let mut end = self.last;
                end.step();
                Token::eof(end)
            }
        };
        self.last = token.location;
        *location = token.location;
        Ok(token)
    }
}
